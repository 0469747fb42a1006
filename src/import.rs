//! CSV import of facility and emission record files
//!
//! Walks a directory for `*.csv` files, recognises facility and record
//! files by their header row, and validates every row before it reaches
//! the store. Invalid rows are rejected and reported, never stored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use rusqlite::Connection;
use walkdir::WalkDir;

use crate::db;
use crate::error::DataError;
use crate::models::{EmissionRecord, Facility, GhgType, Scope};

const FACILITY_HEADER: [&str; 6] = ["id", "name", "latitude", "longitude", "industry", "description"];
const RECORD_HEADER: [&str; 6] = [
    "facility_id",
    "facility_name",
    "reporting_period",
    "scope",
    "ghg_type",
    "emissions",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Facilities,
    Records,
}

/// Trimmed, quote-aware reader; short rows still reach row validation
fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All).flexible(true);
    builder
}

fn detect_kind(header: &csv::StringRecord) -> Option<FileKind> {
    let columns: Vec<String> = header
        .iter()
        .map(|c| c.trim_start_matches('\u{feff}').to_ascii_lowercase())
        .collect();
    if columns == FACILITY_HEADER {
        Some(FileKind::Facilities)
    } else if columns == RECORD_HEADER {
        Some(FileKind::Records)
    } else {
        None
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, DataError> {
    if value.is_empty() {
        Err(DataError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn coordinate(value: &str, axis: &'static str, limit: f64) -> Result<f64, DataError> {
    let invalid = || DataError::InvalidCoordinate {
        axis,
        value: value.to_string(),
    };
    let parsed: f64 = value.parse().map_err(|_| invalid())?;
    if parsed.is_finite() && parsed.abs() <= limit {
        Ok(parsed)
    } else {
        Err(invalid())
    }
}

fn check_columns(fields: &[&str]) -> Result<(), DataError> {
    if fields.len() == 6 {
        Ok(())
    } else {
        Err(DataError::ColumnCount {
            expected: 6,
            found: fields.len(),
        })
    }
}

fn parse_facility_row(fields: &[&str]) -> Result<Facility, DataError> {
    check_columns(fields)?;
    Ok(Facility {
        id: required(fields[0], "id")?.to_string(),
        name: required(fields[1], "name")?.to_string(),
        latitude: coordinate(fields[2], "latitude", 90.0)?,
        longitude: coordinate(fields[3], "longitude", 180.0)?,
        industry: fields[4].to_string(),
        description: fields[5].to_string(),
    })
}

/// Validate one record row; `period_re` enforces the fixed-width period form
fn parse_record_row(fields: &[&str], period_re: &Regex) -> Result<EmissionRecord, DataError> {
    check_columns(fields)?;

    let reporting_period = required(fields[2], "reporting_period")?;
    if !period_re.is_match(reporting_period) {
        return Err(DataError::InvalidPeriod(reporting_period.to_string()));
    }

    let emissions = fields[5]
        .parse::<f64>()
        .ok()
        .filter(|e| e.is_finite() && *e >= 0.0)
        .ok_or_else(|| DataError::InvalidEmissions(fields[5].to_string()))?;

    Ok(EmissionRecord {
        facility_id: required(fields[0], "facility_id")?.to_string(),
        facility_name: required(fields[1], "facility_name")?.to_string(),
        reporting_period: reporting_period.to_string(),
        scope: fields[3].parse::<Scope>()?,
        ghg_type: fields[4].parse::<GhgType>()?,
        emissions,
    })
}

/// Find all CSV files below `dir`, sorted by path
pub fn find_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if entry.file_type().is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn read_header(path: &Path, content: &str) -> Option<FileKind> {
    let mut reader = reader_builder().from_reader(content.as_bytes());
    match reader.headers() {
        Ok(header) => detect_kind(header),
        Err(e) => {
            log::debug!("Could not read header of {}: {}", path.display(), e);
            None
        }
    }
}

fn import_file(
    conn: &Connection,
    kind: FileKind,
    path: &Path,
    content: &str,
    period_re: &Regex,
    stats: &mut ImportStats,
) -> Result<()> {
    let mut reader = reader_builder().from_reader(content.as_bytes());

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Rejected malformed row in {}: {}", path.display(), e);
                stats.rejected += 1;
                continue;
            }
        };
        let fields: Vec<&str> = row.iter().collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        let line = row.position().map_or(0, |p| p.line());

        let outcome = match kind {
            FileKind::Facilities => parse_facility_row(&fields).map(|facility| {
                db::upsert_facility(conn, &facility).map(|_| stats.facilities += 1)
            }),
            FileKind::Records => parse_record_row(&fields, period_re).map(|record| {
                db::insert_record(conn, &record).map(|_| stats.records += 1)
            }),
        };
        match outcome {
            Ok(stored) => stored
                .with_context(|| format!("Failed to store row {} of {}", line, path.display()))?,
            Err(e) => {
                log::warn!("Rejected {}:{}: {}", path.display(), line, e);
                stats.rejected += 1;
            }
        }
    }
    Ok(())
}

/// Import all recognised CSV files below `dir` into the store
///
/// Facility files are imported before record files so the store never
/// holds records whose facility arrives later in the same run. With
/// `clear` the existing contents are removed first. The whole run is one
/// transaction: a storage error leaves the store as it was.
pub fn import_directory(conn: &mut Connection, dir: &Path, clear: bool) -> Result<ImportStats> {
    let mut stats = ImportStats::default();
    let period_re = Regex::new(r"^\d{4} Q[1-4]$")?;

    log::info!("Scanning {} for CSV files", dir.display());
    let mut classified = Vec::new();
    for path in find_csv_files(dir)? {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                stats.errors += 1;
                continue;
            }
        };
        match read_header(&path, &content) {
            Some(kind) => classified.push((kind, path, content)),
            None => {
                log::debug!("Skipping {}: unrecognised header", path.display());
                stats.skipped_files += 1;
            }
        }
    }
    classified.sort_by_key(|(kind, _, _)| *kind == FileKind::Records);

    let tx = conn.transaction()?;
    if clear {
        db::clear_data(&tx)?;
    }
    for (kind, path, content) in &classified {
        import_file(&tx, *kind, path, content, &period_re, &mut stats)?;
        stats.files += 1;
    }
    tx.commit()?;

    log::info!("{}", stats);
    Ok(stats)
}

#[derive(Debug, Default, PartialEq)]
pub struct ImportStats {
    pub files: usize,
    pub facilities: usize,
    pub records: usize,
    pub rejected: usize,
    pub skipped_files: usize,
    pub errors: usize,
}

impl std::fmt::Display for ImportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Imported {} facilities and {} records from {} files. Rejected rows: {}, Skipped files: {}, Errors: {}",
            self.facilities, self.records, self.files, self.rejected, self.skipped_files, self.errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn period_re() -> Regex {
        Regex::new(r"^\d{4} Q[1-4]$").unwrap()
    }

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        conn
    }

    fn row(line: &str) -> csv::StringRecord {
        reader_builder()
            .has_headers(false)
            .from_reader(line.as_bytes())
            .records()
            .next()
            .unwrap()
            .unwrap()
    }

    fn fields(record: &csv::StringRecord) -> Vec<&str> {
        record.iter().collect()
    }

    #[test]
    fn test_detect_kind_by_header() {
        assert_eq!(
            detect_kind(&row("\u{feff}id,name,latitude,longitude,industry,description")),
            Some(FileKind::Facilities)
        );
        assert_eq!(
            detect_kind(&row("Facility_ID, Facility_Name, Reporting_Period, Scope, GHG_Type, Emissions")),
            Some(FileKind::Records)
        );
        assert_eq!(detect_kind(&row("a,b,c")), None);
    }

    #[test]
    fn test_record_row_validation() {
        let re = period_re();
        let ok = parse_record_row(&fields(&row("F1, Acme, 2023 Q1, Scope 2, CO2, 12.5")), &re).unwrap();
        assert_eq!(ok.scope, Scope::Scope2);
        assert_eq!(ok.ghg_type, GhgType::Co2);
        assert_eq!(ok.emissions, 12.5);

        let bad_scope = parse_record_row(&fields(&row("F1,Acme,2023 Q1,Scope 4,CO2,1")), &re);
        assert_eq!(bad_scope, Err(DataError::UnknownScope("Scope 4".to_string())));

        let bad_gas = parse_record_row(&fields(&row("F1,Acme,2023 Q1,Scope 1,SF6,1")), &re);
        assert_eq!(bad_gas, Err(DataError::UnknownGhgType("SF6".to_string())));

        let negative = parse_record_row(&fields(&row("F1,Acme,2023 Q1,Scope 1,CO2,-3")), &re);
        assert_eq!(negative, Err(DataError::InvalidEmissions("-3".to_string())));

        let nan = parse_record_row(&fields(&row("F1,Acme,2023 Q1,Scope 1,CO2,NaN")), &re);
        assert!(matches!(nan, Err(DataError::InvalidEmissions(_))));

        let unpadded = parse_record_row(&fields(&row("F1,Acme,2023 Q10,Scope 1,CO2,1")), &re);
        assert_eq!(unpadded, Err(DataError::InvalidPeriod("2023 Q10".to_string())));

        let short = parse_record_row(&fields(&row("F1,Acme")), &re);
        assert_eq!(short, Err(DataError::ColumnCount { expected: 6, found: 2 }));
    }

    #[test]
    fn test_facility_row_validation() {
        let ok = parse_facility_row(&fields(&row("F9,Acme,19.07,72.87,Steel,Acme - Mumbai"))).unwrap();
        assert_eq!(ok.id, "F9");
        assert_eq!(ok.latitude, 19.07);

        let out_of_range = parse_facility_row(&fields(&row("F9,Acme,91,72.87,Steel,x")));
        assert!(matches!(
            out_of_range,
            Err(DataError::InvalidCoordinate { axis: "latitude", .. })
        ));

        let no_id = parse_facility_row(&fields(&row(",Acme,19,72,Steel,x")));
        assert_eq!(no_id, Err(DataError::MissingField("id")));
    }

    #[test]
    fn test_import_directory_rejects_bad_rows_and_keeps_good_ones() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("2023");
        fs::create_dir_all(&nested).unwrap();

        // Record file sorts before the facility file but must import after it
        fs::write(
            nested.join("a_records.csv"),
            "facility_id,facility_name,reporting_period,scope,ghg_type,emissions\n\
             F1,Acme,2023 Q1,Scope 1,CO₂,100\n\
             F1,Acme,2023 Q2,Scope 9,CO₂,100\n\
             \n\
             F2,Bolt,2023 Q2,Scope 3,N2O,50.5\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("z_facilities.csv"),
            "id,name,latitude,longitude,industry,description\n\
             F1,Acme,19.0,72.8,Steel,Acme - Mumbai\n\
             F2,Bolt,23.0,72.5,Power,Bolt - Ahmedabad\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.csv"), "hello,world\n").unwrap();
        fs::write(dir.path().join("readme.txt"), "ignored").unwrap();

        let mut conn = open();
        let stats = import_directory(&mut conn, dir.path(), false).unwrap();
        assert_eq!(
            stats,
            ImportStats {
                files: 2,
                facilities: 2,
                records: 2,
                rejected: 1,
                skipped_files: 1,
                errors: 0,
            }
        );

        let records = db::load_records(&conn).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].ghg_type, GhgType::N2o);
        assert_eq!(db::load_facilities(&conn).unwrap().len(), 2);
    }

    #[test]
    fn test_import_honours_quoted_fields() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("facilities.csv"),
            "id,name,latitude,longitude,industry,description\n\
             F1,Acme,19.0,72.8,Steel,\"Acme - Mumbai, HQ\"\n\
             F2,\"Bolt\",23.0,72.5,Power,Bolt plant\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("records.csv"),
            "facility_id,facility_name,reporting_period,scope,ghg_type,emissions\n\
             F2,\"Bolt\",2023 Q1,Scope 1,CO2,7\n",
        )
        .unwrap();

        let mut conn = open();
        let stats = import_directory(&mut conn, dir.path(), false).unwrap();
        assert_eq!(stats.facilities, 2);
        assert_eq!(stats.records, 1);
        assert_eq!(stats.rejected, 0);

        let loaded: Vec<(String, String, String)> = db::load_facilities(&conn)
            .unwrap()
            .into_iter()
            .map(|f| (f.id, f.name, f.description))
            .collect();
        assert_eq!(
            loaded,
            vec![
                ("F1".to_string(), "Acme".to_string(), "Acme - Mumbai, HQ".to_string()),
                ("F2".to_string(), "Bolt".to_string(), "Bolt plant".to_string()),
            ]
        );
        assert_eq!(db::load_records(&conn).unwrap()[0].facility_name, "Bolt");
    }

    #[test]
    fn test_import_with_clear_replaces_contents() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("records.csv"),
            "facility_id,facility_name,reporting_period,scope,ghg_type,emissions\n\
             F2,Bolt,2023 Q1,Scope 1,CO2,7\n",
        )
        .unwrap();

        let mut conn = open();
        db::load_sample_data(&mut conn).unwrap();
        let stats = import_directory(&mut conn, dir.path(), true).unwrap();
        assert_eq!(stats.records, 1);
        assert_eq!(db::load_records(&conn).unwrap().len(), 1);
        assert!(db::load_facilities(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_storage_failure_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("records.csv"),
            "facility_id,facility_name,reporting_period,scope,ghg_type,emissions\n\
             F1,Acme,2023 Q1,Scope 1,CO2,1\n\
             F2,Bolt,2023 Q1,Scope 1,CO2,2\n",
        )
        .unwrap();

        let mut conn = open();
        db::load_sample_data(&mut conn).unwrap();
        conn.execute_batch(
            "CREATE TRIGGER refuse_bolt BEFORE INSERT ON emission_records
             WHEN NEW.facility_id = 'F2'
             BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
        )
        .unwrap();

        let err = import_directory(&mut conn, dir.path(), true).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to store row 3"));
        assert_eq!(db::load_records(&conn).unwrap().len(), crate::sample::records().len());
        assert_eq!(
            db::load_facilities(&conn).unwrap().len(),
            crate::sample::facilities().len()
        );
    }
}
