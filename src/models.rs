//! Data models for facilities, emission records and the views built from them

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DataError;

/// GHG accounting scope. Closed set of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Scope {
    #[serde(rename = "Scope 1")]
    Scope1,
    #[serde(rename = "Scope 2")]
    Scope2,
    #[serde(rename = "Scope 3")]
    Scope3,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Scope1, Scope::Scope2, Scope::Scope3];

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Scope1 => "Scope 1",
            Scope::Scope2 => "Scope 2",
            Scope::Scope3 => "Scope 3",
        }
    }

    /// Position within `ALL`
    pub fn index(self) -> usize {
        match self {
            Scope::Scope1 => 0,
            Scope::Scope2 => 1,
            Scope::Scope3 => 2,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = DataError;

    /// Accepts "Scope 1", "scope1", "1" and friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        let digit = compact.strip_prefix("scope").unwrap_or(compact.as_str());
        match digit {
            "1" => Ok(Scope::Scope1),
            "2" => Ok(Scope::Scope2),
            "3" => Ok(Scope::Scope3),
            _ => Err(DataError::UnknownScope(s.to_string())),
        }
    }
}

/// Greenhouse gas kind, normalised to CO₂-equivalent tons. Closed set of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GhgType {
    #[serde(rename = "CO₂")]
    Co2,
    #[serde(rename = "CH₄")]
    Ch4,
    #[serde(rename = "N₂O")]
    N2o,
}

impl GhgType {
    pub const ALL: [GhgType; 3] = [GhgType::Co2, GhgType::Ch4, GhgType::N2o];

    pub fn as_str(self) -> &'static str {
        match self {
            GhgType::Co2 => "CO₂",
            GhgType::Ch4 => "CH₄",
            GhgType::N2o => "N₂O",
        }
    }

    pub fn index(self) -> usize {
        match self {
            GhgType::Co2 => 0,
            GhgType::Ch4 => 1,
            GhgType::N2o => 2,
        }
    }
}

impl fmt::Display for GhgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GhgType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "CO₂" | "CO2" | "co2" => Ok(GhgType::Co2),
            "CH₄" | "CH4" | "ch4" => Ok(GhgType::Ch4),
            "N₂O" | "N2O" | "n2o" => Ok(GhgType::N2o),
            other => Err(DataError::UnknownGhgType(other.to_string())),
        }
    }
}

/// One reported quantity of one gas for one facility, scope and period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionRecord {
    pub facility_id: String,
    pub facility_name: String, // Company name, denormalised from Facility
    pub reporting_period: String, // "YYYY Qn"
    pub scope: Scope,
    pub ghg_type: GhgType,
    pub emissions: f64, // tCO₂e, never negative
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub industry: String,
    pub description: String,
}

/// A facility annotated with the totals of its records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityWithTotals {
    #[serde(flatten)]
    pub facility: Facility,
    pub total_emissions: f64,
    pub record_count: usize,
}

/// One slice of a closed-enumeration breakdown (pie/bar chart series)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry<K> {
    pub key: K,
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub period: String,
    pub value: f64,
}

/// Leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmitterEntry {
    pub rank: usize,
    pub name: String,
    pub total: f64,
    pub share_percent: f64, // Of the leaderboard total
    pub bar_percent: f64,   // Relative to the largest entry
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Change between the two most recent reporting periods
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodChange {
    pub previous_period: String,
    pub latest_period: String,
    pub direction: TrendDirection,
    pub percent: f64, // Absolute value; direction carries the sign
}

/// Header/footer numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_emissions: f64,
    pub record_count: usize,
    pub facility_count: usize,
    pub company_count: usize,
}

/// Single-facility detail panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityDetail {
    pub facility: FacilityWithTotals,
    pub filtered_total: f64,
    pub filtered_count: usize,
    pub scopes: Vec<BreakdownEntry<Scope>>,
    pub gases: Vec<BreakdownEntry<GhgType>>,
    pub periods: Vec<PeriodTotal>,
    pub trend: Option<PeriodChange>,
}

/// Aggregated statistics panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsPanel {
    pub summary: DashboardSummary,
    pub top_emitters: Vec<EmitterEntry>,
    pub scopes: Vec<BreakdownEntry<Scope>>,
    pub gases: Vec<BreakdownEntry<GhgType>>,
    pub periods: Vec<PeriodTotal>,
    pub trend: Option<PeriodChange>,
}

/// Everything one screen shows for one filter specification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub facilities: Vec<FacilityWithTotals>,
    pub stats: StatsPanel,
}
