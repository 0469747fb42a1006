//! Derived views: the exact shapes the map, charts and tables render
//!
//! Views are recomputed from the current filter result on every call and
//! never cached.

use std::collections::{HashMap, HashSet};

use crate::aggregate;
use crate::filter::{self, FilterSpec, ScopeFilter};
use crate::models::{
    BreakdownEntry, Dashboard, DashboardSummary, EmissionRecord, EmitterEntry, Facility,
    FacilityDetail, FacilityWithTotals, GhgType, PeriodChange, PeriodTotal, Scope, StatsPanel,
    TrendDirection,
};

/// Attach total emissions and record count to every facility
pub fn facilities_with_totals(
    facilities: &[Facility],
    records: &[EmissionRecord],
) -> Vec<FacilityWithTotals> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = totals.entry(record.facility_id.as_str()).or_default();
        entry.0 += record.emissions;
        entry.1 += 1;
    }

    facilities
        .iter()
        .map(|facility| {
            let (total_emissions, record_count) =
                totals.get(facility.id.as_str()).copied().unwrap_or_default();
            FacilityWithTotals {
                facility: facility.clone(),
                total_emissions,
                record_count,
            }
        })
        .collect()
}

fn with_percentages<K: Copy>(totals: [(K, f64); 3]) -> Vec<BreakdownEntry<K>> {
    let whole: f64 = totals.iter().map(|(_, v)| v).sum();
    totals
        .iter()
        .map(|&(key, value)| BreakdownEntry {
            key,
            value,
            percentage: aggregate::percentage(value, whole),
        })
        .collect()
}

/// Scope 1/2/3 totals with their share of the whole; always three entries
pub fn scope_breakdown(records: &[EmissionRecord]) -> Vec<BreakdownEntry<Scope>> {
    with_percentages(aggregate::by_scope(records))
}

/// CO₂/CH₄/N₂O totals with their share of the whole; always three entries
pub fn ghg_breakdown(records: &[EmissionRecord]) -> Vec<BreakdownEntry<GhgType>> {
    with_percentages(aggregate::by_ghg_type(records))
}

/// Totals per reporting period, oldest first
pub fn period_trend(records: &[EmissionRecord]) -> Vec<PeriodTotal> {
    aggregate::by_period(records)
        .into_iter()
        .map(|(period, value)| PeriodTotal { period, value })
        .collect()
}

/// Companies ranked by total emissions, largest first
///
/// Ties keep first-encounter order. `limit` truncates after ranking;
/// percentages are always relative to the untruncated leaderboard.
pub fn top_emitters(records: &[EmissionRecord], limit: Option<usize>) -> Vec<EmitterEntry> {
    let mut totals = aggregate::by_company(records);
    // Stable sort keeps encounter order for equal totals
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    let whole: f64 = totals.iter().map(|(_, t)| t).sum();
    let max = totals.first().map(|(_, t)| *t).unwrap_or(0.0);

    totals
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, (name, total))| EmitterEntry {
            rank: i + 1,
            name,
            total,
            share_percent: aggregate::percentage(total, whole),
            bar_percent: aggregate::percentage(total, max),
        })
        .collect()
}

/// Change between the two most recent periods of a trend
///
/// `None` with fewer than two periods. A zero previous value reports 0%.
pub fn period_change(trend: &[PeriodTotal]) -> Option<PeriodChange> {
    let [.., previous, latest] = trend else {
        return None;
    };

    let delta = latest.value - previous.value;
    let direction = if delta > 0.0 {
        TrendDirection::Up
    } else if delta < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    Some(PeriodChange {
        previous_period: previous.period.clone(),
        latest_period: latest.period.clone(),
        direction,
        percent: aggregate::percentage(delta.abs(), previous.value),
    })
}

/// Distinct company names in first-encounter order
pub fn unique_companies(records: &[EmissionRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut companies = Vec::new();
    for record in records {
        if seen.insert(record.facility_name.as_str()) {
            companies.push(record.facility_name.clone());
        }
    }
    companies
}

pub fn records_for_facility(records: &[EmissionRecord], facility_id: &str) -> Vec<EmissionRecord> {
    records
        .iter()
        .filter(|r| r.facility_id == facility_id)
        .cloned()
        .collect()
}

pub fn records_for_company(records: &[EmissionRecord], company: &str) -> Vec<EmissionRecord> {
    records
        .iter()
        .filter(|r| r.facility_name == company)
        .cloned()
        .collect()
}

pub fn dashboard_summary(facilities: &[Facility], records: &[EmissionRecord]) -> DashboardSummary {
    DashboardSummary {
        total_emissions: aggregate::total(records),
        record_count: records.len(),
        facility_count: facilities.len(),
        company_count: unique_companies(records).len(),
    }
}

/// Detail panel for one facility under a scope selection
///
/// The scope chart covers all of the facility's records, narrowed to the
/// selected scope's slice when one is chosen. Gas, period and totals use
/// the scope-filtered records.
pub fn facility_detail(
    facility: &Facility,
    records: &[EmissionRecord],
    scope: ScopeFilter,
) -> FacilityDetail {
    let all = records_for_facility(records, &facility.id);
    let filtered = filter::filter_by_scope(&all, scope);

    let mut scopes = scope_breakdown(&all);
    if let ScopeFilter::Only(selected) = scope {
        scopes.retain(|entry| entry.key == selected);
    }

    let periods = period_trend(&filtered);
    let trend = period_change(&periods);

    FacilityDetail {
        facility: FacilityWithTotals {
            facility: facility.clone(),
            total_emissions: aggregate::total(&all),
            record_count: all.len(),
        },
        filtered_total: aggregate::total(&filtered),
        filtered_count: filtered.len(),
        scopes,
        gases: ghg_breakdown(&filtered),
        periods,
        trend,
    }
}

/// Statistics sidebar over records narrowed by scope and company
///
/// The summary counts only facilities owned by a selected company, so every
/// figure in it describes the same filter result.
pub fn stats_panel(
    facilities: &[Facility],
    records: &[EmissionRecord],
    spec: &FilterSpec,
    limit: Option<usize>,
) -> StatsPanel {
    let filtered = filter::filter_records(records, spec);
    let owned: Vec<Facility> = facilities
        .iter()
        .filter(|f| spec.matches_company(&f.name))
        .cloned()
        .collect();
    let periods = period_trend(&filtered);
    let trend = period_change(&periods);

    StatsPanel {
        summary: dashboard_summary(&owned, &filtered),
        top_emitters: top_emitters(&filtered, limit),
        scopes: scope_breakdown(&filtered),
        gases: ghg_breakdown(&filtered),
        periods,
        trend,
    }
}

/// The map facilities and the statistics panel for one filter spec
///
/// Map totals honour the scope selection so marker sizes agree with the
/// statistics panel.
pub fn dashboard(
    facilities: &[Facility],
    records: &[EmissionRecord],
    spec: &FilterSpec,
    limit: Option<usize>,
) -> Dashboard {
    let visible = filter::filter_facilities(facilities, spec);
    let scoped = filter::filter_by_scope(records, spec.selected_scope);

    Dashboard {
        facilities: facilities_with_totals(&visible, &scoped),
        stats: stats_panel(facilities, records, spec, limit),
    }
}
