//! Grouping and summing of emission records
//!
//! Every function here is a pure reduction over a record slice. Open key
//! sets (company, facility, period) only report keys seen in the input;
//! the closed enumerations (scope, gas) always report all three keys.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::models::{EmissionRecord, GhgType, Scope};

/// Total emissions of a record subset
pub fn total(records: &[EmissionRecord]) -> f64 {
    records.iter().map(|r| r.emissions).sum()
}

/// Sum emissions per key, keys in first-encounter order
pub fn sum_by<K, F>(records: &[EmissionRecord], key: F) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    F: Fn(&EmissionRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut totals: Vec<(K, f64)> = Vec::new();

    for record in records {
        let k = key(record);
        match index.get(&k) {
            Some(&i) => totals[i].1 += record.emissions,
            None => {
                index.insert(k.clone(), totals.len());
                totals.push((k, record.emissions));
            }
        }
    }

    totals
}

/// Total per company name, in first-encounter order
pub fn by_company(records: &[EmissionRecord]) -> Vec<(String, f64)> {
    sum_by(records, |r| r.facility_name.clone())
}

/// Total per facility id, in first-encounter order
pub fn by_facility(records: &[EmissionRecord]) -> Vec<(String, f64)> {
    sum_by(records, |r| r.facility_id.clone())
}

/// Total per scope; always three entries in Scope 1, 2, 3 order
pub fn by_scope(records: &[EmissionRecord]) -> [(Scope, f64); 3] {
    let mut totals = Scope::ALL.map(|s| (s, 0.0));
    for record in records {
        totals[record.scope.index()].1 += record.emissions;
    }
    totals
}

/// Total per gas; always three entries in CO₂, CH₄, N₂O order
pub fn by_ghg_type(records: &[EmissionRecord]) -> [(GhgType, f64); 3] {
    let mut totals = GhgType::ALL.map(|g| (g, 0.0));
    for record in records {
        totals[record.ghg_type.index()].1 += record.emissions;
    }
    totals
}

/// Total per reporting period, ordered by period string
pub fn by_period(records: &[EmissionRecord]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.reporting_period.clone()).or_default() += record.emissions;
    }
    totals
}

/// `value` as a percentage of `whole`; 0 when `whole` is not positive
pub fn percentage(value: f64, whole: f64) -> f64 {
    if whole > 0.0 { value * 100.0 / whole } else { 0.0 }
}
