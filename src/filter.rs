//! Filter engine for facilities and emission records
//!
//! Facilities are narrowed by free-text search and company selection,
//! records by scope and company selection. Filters never reorder or
//! duplicate their input, and applying the same spec twice is a no-op.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::models::{EmissionRecord, Facility, Scope};

/// Scope selector value; `All` disables scope filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeFilter {
    #[default]
    All,
    Only(Scope),
}

impl ScopeFilter {
    /// Parse a selector value, treating anything unrecognised as `All`
    pub fn parse_lenient(value: &str) -> Self {
        match value.parse::<ScopeFilter>() {
            Ok(filter) => filter,
            Err(()) => {
                log::debug!("Unrecognised scope filter '{}', showing all scopes", value);
                ScopeFilter::All
            }
        }
    }

    pub fn matches(self, scope: Scope) -> bool {
        match self {
            ScopeFilter::All => true,
            ScopeFilter::Only(selected) => selected == scope,
        }
    }
}

impl FromStr for ScopeFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(ScopeFilter::All),
            t if t.eq_ignore_ascii_case("all") => Ok(ScopeFilter::All),
            t => t.parse::<Scope>().map(ScopeFilter::Only).map_err(|_| ()),
        }
    }
}

impl fmt::Display for ScopeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeFilter::All => f.write_str("all"),
            ScopeFilter::Only(scope) => write!(f, "{}", scope),
        }
    }
}

/// Everything the search box, company multi-select and scope selector hold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub search_text: String,
    pub selected_companies: BTreeSet<String>,
    pub selected_scope: ScopeFilter,
}

impl FilterSpec {
    pub fn new<I, S>(search_text: &str, companies: I, scope: ScopeFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterSpec {
            search_text: search_text.to_string(),
            selected_companies: companies.into_iter().map(Into::into).collect(),
            selected_scope: scope,
        }
    }

    /// Lowercased whitespace-separated search terms
    pub fn search_terms(&self) -> Vec<String> {
        self.search_text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// True when no criterion is active
    pub fn is_identity(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.selected_companies.is_empty()
            && self.selected_scope == ScopeFilter::All
    }

    /// Facility rule: search match OR company match, with inactive criteria
    /// dropping out. No active criterion matches everything.
    pub fn matches_facility(&self, facility: &Facility) -> bool {
        self.matches_facility_with_terms(facility, &self.search_terms())
    }

    fn matches_facility_with_terms(&self, facility: &Facility, terms: &[String]) -> bool {
        let search_active = !terms.is_empty();
        let company_active = !self.selected_companies.is_empty();

        let search_hit = || {
            let name = facility.name.to_lowercase();
            let description = facility.description.to_lowercase();
            terms
                .iter()
                .any(|t| name.contains(t.as_str()) || description.contains(t.as_str()))
        };
        let company_hit = || self.selected_companies.contains(&facility.name);

        match (search_active, company_active) {
            (false, false) => true,
            (true, false) => search_hit(),
            (false, true) => company_hit(),
            (true, true) => search_hit() || company_hit(),
        }
    }

    /// Company selection alone; an empty selection admits every company
    pub fn matches_company(&self, company: &str) -> bool {
        self.selected_companies.is_empty() || self.selected_companies.contains(company)
    }

    /// Record rule: scope filter AND company selection (empty selects all)
    pub fn matches_record(&self, record: &EmissionRecord) -> bool {
        self.selected_scope.matches(record.scope) && self.matches_company(&record.facility_name)
    }
}

pub fn filter_facilities(facilities: &[Facility], spec: &FilterSpec) -> Vec<Facility> {
    let terms = spec.search_terms();
    let filtered: Vec<Facility> = facilities
        .iter()
        .filter(|f| spec.matches_facility_with_terms(f, &terms))
        .cloned()
        .collect();
    log::debug!(
        "Facility filter kept {} of {} (terms: {:?}, companies: {})",
        filtered.len(),
        facilities.len(),
        terms,
        spec.selected_companies.len()
    );
    filtered
}

pub fn filter_records(records: &[EmissionRecord], spec: &FilterSpec) -> Vec<EmissionRecord> {
    records
        .iter()
        .filter(|r| spec.matches_record(r))
        .cloned()
        .collect()
}

/// Scope rule alone, for views that apply company selection elsewhere
pub fn filter_by_scope(records: &[EmissionRecord], scope: ScopeFilter) -> Vec<EmissionRecord> {
    records
        .iter()
        .filter(|r| scope.matches(r.scope))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GhgType;
    use pretty_assertions::assert_eq;

    fn facility(id: &str, name: &str, description: &str) -> Facility {
        Facility {
            id: id.to_string(),
            name: name.to_string(),
            latitude: 20.0,
            longitude: 75.0,
            industry: "Test".to_string(),
            description: description.to_string(),
        }
    }

    fn facilities() -> Vec<Facility> {
        vec![
            facility("F1", "Tata Steel", "Tata Steel - Jamshedpur Plant"),
            facility("F2", "JSW Energy", "JSW Energy - Goa Facility"),
            facility("F3", "Adani Green", "Adani Solar - Rajasthan"),
            facility("F4", "L&T", "Larsen & Toubro - Mumbai HQ"),
        ]
    }

    fn ids(facilities: &[Facility]) -> Vec<&str> {
        facilities.iter().map(|f| f.id.as_str()).collect()
    }

    fn record(company: &str, scope: Scope) -> EmissionRecord {
        EmissionRecord {
            facility_id: "F1".to_string(),
            facility_name: company.to_string(),
            reporting_period: "2023 Q1".to_string(),
            scope,
            ghg_type: GhgType::Co2,
            emissions: 1.0,
        }
    }

    #[test]
    fn test_identity_spec_returns_everything_in_order() {
        let all = facilities();
        let spec = FilterSpec::default();
        assert!(spec.is_identity());
        assert_eq!(filter_facilities(&all, &spec), all);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let spec = FilterSpec::new("steel", Vec::<String>::new(), ScopeFilter::All);
        assert_eq!(ids(&filter_facilities(&facilities(), &spec)), vec!["F1"]);
    }

    #[test]
    fn test_search_terms_combine_with_or() {
        let spec = FilterSpec::new("adani jsw", Vec::<String>::new(), ScopeFilter::All);
        assert_eq!(ids(&filter_facilities(&facilities(), &spec)), vec!["F2", "F3"]);
    }

    #[test]
    fn test_search_matches_description() {
        let spec = FilterSpec::new("MUMBAI", Vec::<String>::new(), ScopeFilter::All);
        assert_eq!(ids(&filter_facilities(&facilities(), &spec)), vec!["F4"]);
    }

    #[test]
    fn test_unmatched_search_without_companies_is_empty() {
        let spec = FilterSpec::new("nowhere", Vec::<String>::new(), ScopeFilter::All);
        assert!(filter_facilities(&facilities(), &spec).is_empty());
    }

    #[test]
    fn test_company_selection_alone_restricts() {
        let spec = FilterSpec::new("", ["L&T", "JSW Energy"], ScopeFilter::All);
        assert_eq!(ids(&filter_facilities(&facilities(), &spec)), vec!["F2", "F4"]);
    }

    #[test]
    fn test_search_and_company_combine_with_or() {
        // "steel" matches F1 only; L&T is selected; both survive.
        let spec = FilterSpec::new("steel", ["L&T"], ScopeFilter::All);
        assert_eq!(ids(&filter_facilities(&facilities(), &spec)), vec!["F1", "F4"]);
    }

    #[test]
    fn test_whitespace_only_search_is_inactive() {
        let spec = FilterSpec::new("   ", ["Adani Green"], ScopeFilter::All);
        assert_eq!(ids(&filter_facilities(&facilities(), &spec)), vec!["F3"]);
    }

    #[test]
    fn test_facility_filter_is_idempotent() {
        let spec = FilterSpec::new("a", ["L&T"], ScopeFilter::All);
        let once = filter_facilities(&facilities(), &spec);
        let twice = filter_facilities(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_scope_filter_is_exact() {
        let records = vec![
            record("Acme", Scope::Scope1),
            record("Acme", Scope::Scope2),
            record("Acme", Scope::Scope3),
            record("Acme", Scope::Scope2),
        ];
        let spec = FilterSpec::new("", Vec::<String>::new(), ScopeFilter::Only(Scope::Scope2));
        let filtered = filter_records(&records, &spec);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.scope == Scope::Scope2));
    }

    #[test]
    fn test_record_filter_ands_scope_and_company() {
        let records = vec![
            record("Acme", Scope::Scope1),
            record("Bolt", Scope::Scope1),
            record("Acme", Scope::Scope2),
        ];
        let spec = FilterSpec::new("ignored", ["Acme"], ScopeFilter::Only(Scope::Scope1));
        assert_eq!(filter_records(&records, &spec), vec![record("Acme", Scope::Scope1)]);
    }

    #[test]
    fn test_unknown_scope_filter_fails_open() {
        assert_eq!(ScopeFilter::parse_lenient("Scope 9"), ScopeFilter::All);
        assert_eq!(ScopeFilter::parse_lenient("bogus"), ScopeFilter::All);
        assert_eq!(ScopeFilter::parse_lenient("ALL"), ScopeFilter::All);
        assert_eq!(
            ScopeFilter::parse_lenient("Scope 3"),
            ScopeFilter::Only(Scope::Scope3)
        );
    }

    #[test]
    fn test_filter_by_scope_all_is_identity() {
        let records = vec![record("Acme", Scope::Scope1), record("Bolt", Scope::Scope3)];
        assert_eq!(filter_by_scope(&records, ScopeFilter::All), records);
    }
}
