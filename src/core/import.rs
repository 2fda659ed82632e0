//! Bulk CSV import into the `tempat` table.

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_place;
use crate::errors::{AppError, AppResult};
use crate::models::place::Place;
use crate::ui::messages::info;
use rusqlite::Connection;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One spreadsheet row. Headers follow the published dataset.
#[derive(Debug, Deserialize)]
pub struct ImportRow {
    #[serde(rename = "Nama")]
    pub name: String,
    #[serde(rename = "Jam Buka")]
    pub hours: String,
    #[serde(rename = "Harga")]
    pub price: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Foto", default)]
    pub photo: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Komentar", default)]
    pub comment: String,
}

impl From<ImportRow> for Place {
    fn from(r: ImportRow) -> Self {
        Place::new(
            &r.name,
            &r.hours,
            &r.price,
            r.latitude,
            r.longitude,
            &r.photo,
            r.rating,
            &r.comment,
        )
    }
}

/// Parse every row first so a bad line aborts before anything is written.
pub fn read_rows<R: Read>(reader: R) -> AppResult<Vec<Place>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for result in rdr.deserialize::<ImportRow>() {
        let row = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            AppError::Import(format!("line {}: {}", line, e))
        })?;
        out.push(row.into());
    }
    Ok(out)
}

/// Insert `places` in one transaction with an empty creator.
pub fn insert_all(conn: &mut Connection, places: &[Place], source: &str) -> AppResult<usize> {
    let tx = conn.transaction()?;

    for p in places {
        insert_place(&tx, p, "")?;
    }

    audit(
        &tx,
        "import",
        source,
        &format!("Imported {} places", places.len()),
    )?;

    tx.commit()?;
    Ok(places.len())
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn import_file(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        info(format!("Importing from CSV: {}", path.display()));

        let file = File::open(path)?;
        let places = read_rows(file)?;
        let source = path.to_string_lossy().to_string();

        pool.with_conn(|conn| insert_all(conn, &places, &source))
    }
}
