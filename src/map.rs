//! Map marker placement and emission tiers
//!
//! Positions are plain linear scaling of latitude/longitude into the
//! percentage space of a bounding box. No geographic projection.

use serde::{Deserialize, Serialize};

use crate::models::FacilityWithTotals;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Default for MapBounds {
    /// India
    fn default() -> Self {
        MapBounds {
            min_lat: 8.0,
            max_lat: 35.0,
            min_lng: 68.0,
            max_lng: 97.0,
        }
    }
}

/// Percent offsets from the top-left corner of the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

pub fn project(bounds: &MapBounds, latitude: f64, longitude: f64) -> MapPosition {
    let lng_span = bounds.max_lng - bounds.min_lng;
    let lat_span = bounds.max_lat - bounds.min_lat;

    let x = if lng_span != 0.0 {
        (longitude - bounds.min_lng) / lng_span * 100.0
    } else {
        0.0
    };
    let y = if lat_span != 0.0 {
        (bounds.max_lat - latitude) / lat_span * 100.0
    } else {
        0.0
    };

    MapPosition { x, y }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionTier {
    Low,
    Moderate,
    High,
    Critical,
}

/// Lower bounds (exclusive) of each tier above `Low`, in tCO₂e
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub moderate: f64,
    pub high: f64,
    pub critical: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds {
            moderate: 4000.0,
            high: 8000.0,
            critical: 15000.0,
        }
    }
}

impl TierThresholds {
    pub fn classify(&self, total_emissions: f64) -> EmissionTier {
        if total_emissions > self.critical {
            EmissionTier::Critical
        } else if total_emissions > self.high {
            EmissionTier::High
        } else if total_emissions > self.moderate {
            EmissionTier::Moderate
        } else {
            EmissionTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub facility_id: String,
    pub name: String,
    pub industry: String,
    pub position: MapPosition,
    pub total_emissions: f64,
    pub tier: EmissionTier,
}

pub fn markers(
    facilities: &[FacilityWithTotals],
    bounds: &MapBounds,
    thresholds: &TierThresholds,
) -> Vec<Marker> {
    facilities
        .iter()
        .map(|f| Marker {
            facility_id: f.facility.id.clone(),
            name: f.facility.name.clone(),
            industry: f.facility.industry.clone(),
            position: project(bounds, f.facility.latitude, f.facility.longitude),
            total_emissions: f.total_emissions,
            tier: thresholds.classify(f.total_emissions),
        })
        .collect()
}
