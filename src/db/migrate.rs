//! Schema migrations for the `tempat` table.
//!
//! The applied schema version lives in `PRAGMA user_version`. Each step is
//! idempotent on its own, so a database whose version counter lags behind
//! its real schema (files created by older releases never set it) still
//! upgrades cleanly.

use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::Connection;

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub description: &'static str,
    apply: fn(&Connection) -> rusqlite::Result<()>,
}

/// Ordered by version. Append only; never renumber.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_tempat",
        description: "Created tempat table",
        apply: create_tempat_table,
    },
    Migration {
        version: 2,
        name: "add_creator_to_tempat",
        description: "Added creator column to tempat",
        apply: add_creator_column,
    },
];

/// Columns of `tempat` once every migration has run, in order.
pub const TEMPAT_COLUMNS: &[&str] = &[
    "id",
    "nama",
    "jam_buka",
    "harga",
    "latitude",
    "longitude",
    "foto",
    "rating",
    "komentar",
    "creator",
];

/// Latest schema version known to this build.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Column names of `table`, in declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let cols = stmt.query_map([table], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}

/// Current `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn create_tempat_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tempat (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            nama      TEXT,
            jam_buka  TEXT,
            harga     TEXT,
            latitude  REAL,
            longitude REAL,
            foto      TEXT,
            rating    REAL,
            komentar  TEXT
        );
        "#,
    )
}

fn add_creator_column(conn: &Connection) -> rusqlite::Result<()> {
    let has_creator = table_columns(conn, "tempat")?
        .iter()
        .any(|c| c == "creator");

    if !has_creator {
        conn.execute_batch("ALTER TABLE tempat ADD COLUMN creator TEXT DEFAULT '';")?;
    }

    // Rows written before the column existed (or by the bulk importer of
    // older releases) may still carry NULL.
    conn.execute("UPDATE tempat SET creator = '' WHERE creator IS NULL", [])?;
    Ok(())
}

/// Public entry point: run all pending migrations in version order.
///
/// Called by db::init_db() on every startup.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let current = schema_version(conn)?;

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        let tx = conn.unchecked_transaction()?;

        (m.apply)(&tx).map_err(|e| {
            AppError::Migration(format!("{} (v{}) failed: {}", m.name, m.version, e))
        })?;

        // user_version does not accept bound parameters; the value is a
        // compile-time constant from MIGRATIONS.
        tx.execute_batch(&format!("PRAGMA user_version = {};", m.version))?;
        audit(&tx, "migration_applied", m.name, m.description)?;

        tx.commit()?;

        success(format!(
            "Migration applied: v{} {} → {}",
            m.version, m.name, m.description
        ));
    }

    Ok(())
}
