//! Database schema and operations for the emission record store

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::{EmissionRecord, Facility, GhgType, Scope};
use crate::sample;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Physical sites; name is the owning company and is not unique
        CREATE TABLE IF NOT EXISTS facilities (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            industry TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT ''
        );

        -- One gas quantity per facility, scope and reporting period
        CREATE TABLE IF NOT EXISTS emission_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            facility_id TEXT NOT NULL,
            facility_name TEXT NOT NULL,
            reporting_period TEXT NOT NULL,
            scope TEXT NOT NULL CHECK (scope IN ('Scope 1', 'Scope 2', 'Scope 3')),
            ghg_type TEXT NOT NULL CHECK (ghg_type IN ('CO₂', 'CH₄', 'N₂O')),
            emissions REAL NOT NULL CHECK (emissions >= 0)
        );

        CREATE INDEX IF NOT EXISTS idx_emission_records_facility ON emission_records(facility_id);
        CREATE INDEX IF NOT EXISTS idx_emission_records_company ON emission_records(facility_name);
        "#,
    )?;
    Ok(())
}

/// Insert a facility, or update it in place when the id already exists
pub fn upsert_facility(conn: &Connection, facility: &Facility) -> Result<()> {
    conn.execute(
        "INSERT INTO facilities (id, name, latitude, longitude, industry, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             latitude = excluded.latitude,
             longitude = excluded.longitude,
             industry = excluded.industry,
             description = excluded.description",
        (
            &facility.id,
            &facility.name,
            facility.latitude,
            facility.longitude,
            &facility.industry,
            &facility.description,
        ),
    )?;
    Ok(())
}

/// Insert an emission record
pub fn insert_record(conn: &Connection, record: &EmissionRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO emission_records (facility_id, facility_name, reporting_period, scope, ghg_type, emissions)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (
            &record.facility_id,
            &record.facility_name,
            &record.reporting_period,
            record.scope.as_str(),
            record.ghg_type.as_str(),
            record.emissions,
        ),
    )?;
    Ok(())
}

/// Clear all facilities and records (for re-import)
pub fn clear_data(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DELETE FROM emission_records;
        DELETE FROM facilities;
        "#,
    )?;
    Ok(())
}

/// All facilities in insertion order
pub fn load_facilities(conn: &Connection) -> Result<Vec<Facility>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, latitude, longitude, industry, description FROM facilities ORDER BY rowid",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Facility {
            id: row.get(0)?,
            name: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
            industry: row.get(4)?,
            description: row.get(5)?,
        })
    })?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// All emission records in insertion order
///
/// Scope and gas columns are parsed through their enumerations; a single
/// unknown value fails the whole load.
pub fn load_records(conn: &Connection) -> Result<Vec<EmissionRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, facility_id, facility_name, reporting_period, scope, ghg_type, emissions
         FROM emission_records
         ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, f64>(6)?,
        ))
    })?;

    let mut results = Vec::new();
    for row in rows {
        let (id, facility_id, facility_name, reporting_period, scope, ghg_type, emissions) = row?;
        let scope = scope
            .parse::<Scope>()
            .with_context(|| format!("emission record {} is corrupt", id))?;
        let ghg_type = ghg_type
            .parse::<GhgType>()
            .with_context(|| format!("emission record {} is corrupt", id))?;
        results.push(EmissionRecord {
            facility_id,
            facility_name,
            reporting_period,
            scope,
            ghg_type,
            emissions,
        });
    }

    log::info!("Loaded {} emission records", results.len());
    Ok(results)
}

/// Replace the store contents with the built-in dataset
pub fn load_sample_data(conn: &mut Connection) -> Result<usize> {
    let tx = conn.transaction()?;
    clear_data(&tx)?;

    for facility in sample::facilities() {
        upsert_facility(&tx, &facility)?;
    }
    let records = sample::records();
    for record in &records {
        insert_record(&tx, record)?;
    }

    tx.commit()?;
    log::info!("Loaded {} sample emission records", records.len());
    Ok(records.len())
}
