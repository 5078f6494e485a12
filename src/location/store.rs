//! Geo dataset store backed by SQLite at ~/.geo_mentions/locations.db.
//!
//! Names are case-folded in Rust and stored in indexed key columns, since
//! SQLite's LOWER() only folds ASCII ("Île-de-France" would not match).
//! `load` replaces the table inside one transaction.

use super::types::{GeoRecord, LocationError, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Stay well below SQLITE_MAX_VARIABLE_NUMBER on older builds.
const MAX_PARAMS_PER_QUERY: usize = 500;

const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-mostly store of reference locations.
pub trait GeoStore {
    /// Replace every stored record with `rows`. Returns the number stored.
    fn load(&self, rows: &[GeoRecord]) -> Result<usize>;

    fn has_data(&self) -> Result<bool>;

    /// Records whose subdivision name matches any of `names`, ignoring case.
    fn find_by_subdivision_name(&self, names: &BTreeSet<String>) -> Result<Vec<GeoRecord>>;

    /// Records whose city name matches any of `names`, ignoring case.
    fn find_by_city_name(&self, names: &BTreeSet<String>) -> Result<Vec<GeoRecord>>;
}

/// Case-folding used for every name comparison.
pub fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// SQLite-backed geo store.
pub struct SqliteGeoStore {
    db_path: PathBuf,
}

impl SqliteGeoStore {
    /// Open (creating if needed) the store at the default location.
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_path())
    }

    /// Open (creating if needed) the store at a specific path.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LocationError::DataUnavailable(format!(
                        "cannot create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let store = Self {
            db_path: db_path.to_path_buf(),
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".geo_mentions")
            .join("locations.db")
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let _mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        Ok(conn)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS locations (
                geoname_id INTEGER NOT NULL,
                continent_code TEXT NOT NULL,
                continent_name TEXT NOT NULL,
                country_iso_code TEXT NOT NULL,
                country_name TEXT NOT NULL,
                subdivision_iso_code TEXT NOT NULL,
                subdivision_name TEXT NOT NULL,
                city_name TEXT NOT NULL,
                metro_code TEXT NOT NULL,
                time_zone TEXT NOT NULL,
                subdivision_key TEXT NOT NULL,
                city_key TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_locations_subdivision_key
                ON locations(subdivision_key);
            CREATE INDEX IF NOT EXISTS idx_locations_city_key
                ON locations(city_key);
            CREATE TABLE IF NOT EXISTS dataset_meta (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                loaded_at TEXT NOT NULL,
                record_count INTEGER NOT NULL
            );
        "#,
        )?;
        Ok(())
    }

    /// When the dataset was last loaded, if ever.
    pub fn loaded_at(&self) -> Result<Option<DateTime<Utc>>> {
        let conn = self.connect()?;
        let raw: Option<String> = conn
            .query_row("SELECT loaded_at FROM dataset_meta WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(raw
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|dt| dt.with_timezone(&Utc)))
    }

    pub fn record_count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM locations", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn find_by_key(&self, column: &str, names: &BTreeSet<String>) -> Result<Vec<GeoRecord>> {
        let keys: BTreeSet<String> = names
            .iter()
            .filter(|n| !n.trim().is_empty())
            .map(|n| fold(n))
            .collect();
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = keys.into_iter().collect();
        let conn = self.connect()?;
        let mut found: Vec<(i64, GeoRecord)> = Vec::new();

        for chunk in keys.chunks(MAX_PARAMS_PER_QUERY) {
            let placeholders = vec!["?"; chunk.len()].join(",");
            let sql = format!(
                "SELECT rowid, geoname_id, continent_code, continent_name, country_iso_code, \
                 country_name, subdivision_iso_code, subdivision_name, city_name, metro_code, \
                 time_zone FROM locations WHERE {} IN ({})",
                column, placeholders
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(chunk.iter()), |row| {
                Ok((row.get::<_, i64>(0)?, row_to_record(row)?))
            })?;
            for row in rows {
                found.push(row?);
            }
        }

        // Keys are distinct, so chunks never return the same row twice.
        found.sort_by_key(|(rowid, _)| *rowid);
        Ok(found.into_iter().map(|(_, record)| record).collect())
    }
}

fn row_to_record(row: &Row) -> rusqlite::Result<GeoRecord> {
    Ok(GeoRecord {
        geoname_id: row.get(1)?,
        continent_code: row.get(2)?,
        continent_name: row.get(3)?,
        country_iso_code: row.get(4)?,
        country_name: row.get(5)?,
        subdivision_iso_code: row.get(6)?,
        subdivision_name: row.get(7)?,
        city_name: row.get(8)?,
        metro_code: row.get(9)?,
        time_zone: row.get(10)?,
    })
}

impl GeoStore for SqliteGeoStore {
    fn load(&self, rows: &[GeoRecord]) -> Result<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM locations", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO locations (geoname_id, continent_code, continent_name, \
                 country_iso_code, country_name, subdivision_iso_code, subdivision_name, \
                 city_name, metro_code, time_zone, subdivision_key, city_key) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for r in rows {
                stmt.execute(params![
                    r.geoname_id,
                    r.continent_code,
                    r.continent_name,
                    r.country_iso_code,
                    r.country_name,
                    r.subdivision_iso_code,
                    r.subdivision_name,
                    r.city_name,
                    r.metro_code,
                    r.time_zone,
                    fold(&r.subdivision_name),
                    fold(&r.city_name),
                ])?;
            }
        }
        tx.execute(
            "INSERT OR REPLACE INTO dataset_meta (id, loaded_at, record_count) VALUES (1, ?, ?)",
            params![Utc::now().to_rfc3339(), rows.len() as i64],
        )?;
        tx.commit()?;

        log::info!("Loaded {} location records into {}", rows.len(), self.db_path.display());
        Ok(rows.len())
    }

    fn has_data(&self) -> Result<bool> {
        let conn = self.connect()?;
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM locations LIMIT 1)",
            [],
            |row| row.get(0),
        )?;
        Ok(exists != 0)
    }

    fn find_by_subdivision_name(&self, names: &BTreeSet<String>) -> Result<Vec<GeoRecord>> {
        self.find_by_key("subdivision_key", names)
    }

    fn find_by_city_name(&self, names: &BTreeSet<String>) -> Result<Vec<GeoRecord>> {
        self.find_by_key("city_key", names)
    }
}
