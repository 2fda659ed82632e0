use crate::db::migrate::{TEMPAT_COLUMNS, latest_version, schema_version, table_columns};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

pub struct DbStats {
    pub file_size: u64,
    pub places: i64,
    pub schema_version: i64,
    /// (creator, count); legacy / imported rows are grouped under "".
    pub per_creator: Vec<(String, i64)>,
}

/// Gather `db --info` numbers. A database without `tempat` (never
/// initialised) reports zero places.
pub fn collect(conn: &Connection, db_path: &str) -> AppResult<DbStats> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let version = schema_version(conn)?;

    if table_columns(conn, "tempat")?.is_empty() {
        return Ok(DbStats {
            file_size,
            places: 0,
            schema_version: version,
            per_creator: Vec::new(),
        });
    }

    let places: i64 = conn.query_row("SELECT COUNT(*) FROM tempat", [], |row| row.get(0))?;

    let mut stmt = conn.prepare(
        "SELECT COALESCE(creator, ''), COUNT(*)
         FROM tempat
         GROUP BY COALESCE(creator, '')
         ORDER BY COUNT(*) DESC, 1 ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut per_creator: Vec<(String, i64)> = Vec::new();
    for r in rows {
        per_creator.push(r?);
    }

    Ok(DbStats {
        file_size,
        places,
        schema_version: version,
        per_creator,
    })
}

/// Everything `db --check` finds wrong; empty means healthy.
pub fn check_schema(conn: &Connection) -> AppResult<Vec<String>> {
    let mut problems = Vec::new();

    let integrity: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity != "ok" {
        problems.push(format!("integrity check: {integrity}"));
    }

    let version = schema_version(conn)?;
    if version < latest_version() {
        problems.push(format!(
            "schema version {} is behind {} (run `db --migrate`)",
            version,
            latest_version()
        ));
    }

    let columns = table_columns(conn, "tempat")?;
    if columns.is_empty() {
        problems.push("table tempat is missing".to_string());
        return Ok(problems);
    }
    if columns != TEMPAT_COLUMNS {
        problems.push(format!(
            "tempat columns are [{}], expected [{}]",
            columns.join(", "),
            TEMPAT_COLUMNS.join(", ")
        ));
    }

    if columns.iter().any(|c| c == "creator") {
        let nulls: i64 = conn.query_row(
            "SELECT COUNT(*) FROM tempat WHERE creator IS NULL",
            [],
            |row| row.get(0),
        )?;
        if nulls > 0 {
            problems.push(format!("{nulls} places have a NULL creator"));
        }
    }

    Ok(problems)
}

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    let stats = collect(conn, db_path)?;
    println!();

    let file_kb = (stats.file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema version:{} {} (latest {})",
        CYAN,
        RESET,
        stats.schema_version,
        latest_version()
    );
    println!(
        "{}• Total places:{} {}{}{}",
        CYAN, RESET, GREEN, stats.places, RESET
    );

    if !stats.per_creator.is_empty() {
        println!("{}• Places per creator:{}", CYAN, RESET);
        for (creator, count) in &stats.per_creator {
            let who = if creator.is_empty() {
                format!("{GREY}(imported){RESET}")
            } else {
                creator.clone()
            };
            println!("    {}: {}", who, count);
        }
    }

    println!();
    Ok(())
}
