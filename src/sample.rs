//! Built-in dataset: Indian corporate facilities and their 2022-2023 reported emissions

use crate::models::{EmissionRecord, Facility, GhgType, Scope};

// (id, company, latitude, longitude, industry, description)
const FACILITIES: &[(&str, &str, f64, f64, &str, &str)] = &[
    ("F001", "L&T", 19.0760, 72.8777, "Infrastructure & Engineering", "Larsen & Toubro - Mumbai HQ"),
    ("F002", "Adani Green", 23.0225, 72.5714, "Renewable Energy", "Adani Green Energy - Ahmedabad"),
    ("F003", "Tata Steel", 22.7896, 86.2030, "Steel & Metals", "Tata Steel - Jamshedpur Plant"),
    ("F004", "JSW Energy", 15.2993, 74.1240, "Power Generation", "JSW Energy - Goa Facility"),
    ("F005", "Adani Green", 26.9124, 75.7873, "Renewable Energy", "Adani Solar - Rajasthan"),
    ("F006", "Adani Green", 21.1702, 72.8311, "Renewable Energy", "Adani Wind Farm - Gujarat"),
    ("F007", "Adani Green", 17.3850, 78.4867, "Renewable Energy", "Adani Hybrid - Telangana"),
    ("F008", "Tata Steel", 20.2961, 85.8245, "Steel & Metals", "Tata Steel - Odisha Facility"),
    ("F009", "JSW Energy", 15.8497, 74.4977, "Power Generation", "JSW Power - Karnataka"),
    ("F010", "L&T", 12.9716, 77.5946, "Infrastructure & Engineering", "L&T Construction - Bangalore"),
    ("F011", "Tata Steel", 18.5204, 73.8567, "Steel & Metals", "Tata Steel Processing - Pune"),
    ("F012", "JSW Energy", 19.9975, 73.7898, "Power Generation", "JSW Thermal - Nashik"),
    ("F013", "L&T", 13.0827, 80.2707, "Infrastructure & Engineering", "L&T Shipbuilding - Chennai"),
    ("F014", "Adani Green", 28.7041, 77.1025, "Renewable Energy", "Adani Solar - Delhi NCR"),
    ("F015", "JSW Energy", 12.2958, 76.6394, "Power Generation", "JSW Hydro - Mysore"),
];

// (facility id, company, period, scope, gas, tCO₂e)
const RECORDS: &[(&str, &str, &str, Scope, GhgType, f64)] = &[
    ("F001", "L&T", "2023 Q1", Scope::Scope2, GhgType::Ch4, 466.45),
    ("F001", "L&T", "2022 Q1", Scope::Scope2, GhgType::Co2, 1931.14),
    ("F001", "L&T", "2022 Q1", Scope::Scope2, GhgType::Ch4, 2905.28),
    ("F001", "L&T", "2022 Q2", Scope::Scope2, GhgType::Co2, 807.86),
    ("F001", "L&T", "2022 Q2", Scope::Scope2, GhgType::Co2, 4733.58),
    ("F001", "L&T", "2022 Q2", Scope::Scope1, GhgType::Co2, 87.51),
    ("F001", "L&T", "2023 Q2", Scope::Scope2, GhgType::N2o, 470.38),
    ("F001", "L&T", "2022 Q2", Scope::Scope2, GhgType::Co2, 2454.27),
    ("F001", "L&T", "2023 Q1", Scope::Scope3, GhgType::N2o, 2210.63),
    ("F001", "L&T", "2023 Q1", Scope::Scope1, GhgType::Ch4, 4550.11),
    ("F002", "Adani Green", "2023 Q2", Scope::Scope3, GhgType::Co2, 5138.83),
    ("F002", "Adani Green", "2023 Q1", Scope::Scope2, GhgType::N2o, 1440.90),
    ("F002", "Adani Green", "2023 Q1", Scope::Scope2, GhgType::Ch4, 1842.07),
    ("F002", "Adani Green", "2022 Q2", Scope::Scope2, GhgType::N2o, 3446.07),
    ("F002", "Adani Green", "2023 Q2", Scope::Scope1, GhgType::Co2, 960.86),
    ("F002", "Adani Green", "2023 Q2", Scope::Scope3, GhgType::N2o, 4696.23),
    ("F002", "Adani Green", "2023 Q2", Scope::Scope3, GhgType::N2o, 3222.47),
    ("F002", "Adani Green", "2023 Q1", Scope::Scope3, GhgType::Ch4, 1044.92),
    ("F002", "Adani Green", "2023 Q1", Scope::Scope1, GhgType::N2o, 3946.93),
    ("F002", "Adani Green", "2022 Q2", Scope::Scope1, GhgType::N2o, 270.88),
    ("F003", "Tata Steel", "2023 Q2", Scope::Scope3, GhgType::Ch4, 4299.73),
    ("F003", "Tata Steel", "2022 Q2", Scope::Scope2, GhgType::Co2, 3069.63),
    ("F003", "Tata Steel", "2023 Q2", Scope::Scope1, GhgType::N2o, 992.87),
    ("F003", "Tata Steel", "2023 Q1", Scope::Scope2, GhgType::Co2, 4204.69),
    ("F003", "Tata Steel", "2023 Q1", Scope::Scope1, GhgType::N2o, 2978.67),
    ("F003", "Tata Steel", "2022 Q2", Scope::Scope1, GhgType::Co2, 2278.95),
    ("F003", "Tata Steel", "2022 Q2", Scope::Scope1, GhgType::N2o, 4296.74),
    ("F003", "Tata Steel", "2022 Q1", Scope::Scope1, GhgType::Ch4, 1512.54),
    ("F003", "Tata Steel", "2023 Q2", Scope::Scope2, GhgType::Ch4, 3120.88),
    ("F003", "Tata Steel", "2023 Q1", Scope::Scope3, GhgType::Ch4, 243.88),
    ("F004", "JSW Energy", "2022 Q1", Scope::Scope2, GhgType::N2o, 4464.43),
    ("F004", "JSW Energy", "2022 Q2", Scope::Scope1, GhgType::Ch4, 2914.08),
    ("F004", "JSW Energy", "2023 Q1", Scope::Scope1, GhgType::Co2, 2286.97),
    ("F004", "JSW Energy", "2023 Q1", Scope::Scope2, GhgType::N2o, 4111.77),
    ("F004", "JSW Energy", "2023 Q1", Scope::Scope3, GhgType::Ch4, 1785.82),
    ("F004", "JSW Energy", "2023 Q2", Scope::Scope1, GhgType::Co2, 3965.06),
    ("F004", "JSW Energy", "2022 Q2", Scope::Scope1, GhgType::N2o, 179.80),
    ("F004", "JSW Energy", "2023 Q2", Scope::Scope1, GhgType::Ch4, 4510.42),
    ("F004", "JSW Energy", "2022 Q2", Scope::Scope3, GhgType::N2o, 2058.13),
    ("F004", "JSW Energy", "2022 Q2", Scope::Scope1, GhgType::Ch4, 1677.52),
    ("F005", "Adani Green", "2023 Q2", Scope::Scope2, GhgType::Co2, 3701.02),
    ("F005", "Adani Green", "2022 Q2", Scope::Scope2, GhgType::Co2, 4562.24),
    ("F005", "Adani Green", "2022 Q1", Scope::Scope1, GhgType::Co2, 4638.62),
    ("F005", "Adani Green", "2023 Q1", Scope::Scope1, GhgType::N2o, 3316.45),
    ("F005", "Adani Green", "2022 Q1", Scope::Scope2, GhgType::Co2, 4798.16),
    ("F005", "Adani Green", "2023 Q1", Scope::Scope3, GhgType::Ch4, 2731.89),
    ("F005", "Adani Green", "2023 Q1", Scope::Scope3, GhgType::N2o, 2617.07),
    ("F005", "Adani Green", "2023 Q1", Scope::Scope2, GhgType::Ch4, 3971.86),
    ("F006", "Adani Green", "2022 Q1", Scope::Scope3, GhgType::Co2, 3382.00),
    ("F006", "Adani Green", "2023 Q2", Scope::Scope1, GhgType::Ch4, 1569.86),
    ("F006", "Adani Green", "2023 Q2", Scope::Scope3, GhgType::N2o, 3021.59),
    ("F006", "Adani Green", "2023 Q2", Scope::Scope2, GhgType::Co2, 4737.45),
    ("F007", "Adani Green", "2022 Q1", Scope::Scope2, GhgType::Co2, 4810.13),
    ("F007", "Adani Green", "2023 Q2", Scope::Scope1, GhgType::Ch4, 3493.40),
    ("F007", "Adani Green", "2023 Q2", Scope::Scope1, GhgType::Co2, 3223.43),
    ("F007", "Adani Green", "2023 Q2", Scope::Scope1, GhgType::Co2, 3902.33),
    ("F008", "Tata Steel", "2023 Q2", Scope::Scope2, GhgType::N2o, 4053.30),
    ("F008", "Tata Steel", "2023 Q1", Scope::Scope2, GhgType::Ch4, 1436.13),
    ("F008", "Tata Steel", "2022 Q2", Scope::Scope3, GhgType::Ch4, 2512.78),
    ("F008", "Tata Steel", "2022 Q2", Scope::Scope1, GhgType::Ch4, 4101.93),
    ("F009", "JSW Energy", "2023 Q1", Scope::Scope1, GhgType::Co2, 3250.45),
    ("F009", "JSW Energy", "2023 Q2", Scope::Scope2, GhgType::N2o, 2180.32),
    ("F009", "JSW Energy", "2022 Q2", Scope::Scope3, GhgType::Co2, 4521.67),
    ("F010", "L&T", "2023 Q1", Scope::Scope1, GhgType::Co2, 1876.23),
    ("F010", "L&T", "2023 Q2", Scope::Scope2, GhgType::Ch4, 954.17),
    ("F010", "L&T", "2022 Q1", Scope::Scope3, GhgType::N2o, 3421.89),
    ("F011", "Tata Steel", "2023 Q1", Scope::Scope1, GhgType::Ch4, 2876.54),
    ("F011", "Tata Steel", "2023 Q2", Scope::Scope2, GhgType::Co2, 4123.67),
    ("F011", "Tata Steel", "2022 Q2", Scope::Scope3, GhgType::N2o, 1987.32),
    ("F012", "JSW Energy", "2023 Q1", Scope::Scope2, GhgType::Co2, 3654.21),
    ("F012", "JSW Energy", "2023 Q2", Scope::Scope1, GhgType::N2o, 2341.56),
    ("F012", "JSW Energy", "2022 Q1", Scope::Scope3, GhgType::Ch4, 4012.78),
    ("F013", "L&T", "2023 Q2", Scope::Scope1, GhgType::Co2, 5123.45),
    ("F013", "L&T", "2023 Q1", Scope::Scope2, GhgType::N2o, 1876.32),
    ("F013", "L&T", "2022 Q2", Scope::Scope3, GhgType::Ch4, 2987.65),
    ("F014", "Adani Green", "2023 Q1", Scope::Scope1, GhgType::Co2, 876.54),
    ("F014", "Adani Green", "2023 Q2", Scope::Scope2, GhgType::Ch4, 1234.67),
    ("F014", "Adani Green", "2022 Q1", Scope::Scope3, GhgType::N2o, 2156.89),
    ("F015", "JSW Energy", "2023 Q2", Scope::Scope1, GhgType::Co2, 1543.21),
    ("F015", "JSW Energy", "2023 Q1", Scope::Scope2, GhgType::N2o, 2876.43),
    ("F015", "JSW Energy", "2022 Q2", Scope::Scope3, GhgType::Ch4, 3421.67),
];

pub fn facilities() -> Vec<Facility> {
    FACILITIES
        .iter()
        .map(|&(id, name, latitude, longitude, industry, description)| Facility {
            id: id.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
            industry: industry.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub fn records() -> Vec<EmissionRecord> {
    RECORDS
        .iter()
        .map(|&(facility_id, facility_name, period, scope, ghg_type, emissions)| EmissionRecord {
            facility_id: facility_id.to_string(),
            facility_name: facility_name.to_string(),
            reporting_period: period.to_string(),
            scope,
            ghg_type,
            emissions,
        })
        .collect()
}
