//! Export of the place list to CSV or JSON.

use crate::errors::{AppError, AppResult};
use crate::models::place::Place;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// CSV row: the import headers plus ID and Creator, so an export can be
/// fed back to `import`.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Nama")]
    name: &'a str,
    #[serde(rename = "Jam Buka")]
    hours: &'a str,
    #[serde(rename = "Harga")]
    price: &'a str,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Foto")]
    photo: &'a str,
    #[serde(rename = "Rating")]
    rating: f64,
    #[serde(rename = "Komentar")]
    comment: &'a str,
    #[serde(rename = "Creator")]
    creator: &'a str,
}

impl<'a> From<&'a Place> for CsvRow<'a> {
    fn from(p: &'a Place) -> Self {
        Self {
            id: p.id,
            name: &p.name,
            hours: &p.hours,
            price: &p.price,
            latitude: p.latitude,
            longitude: p.longitude,
            photo: &p.photo,
            rating: p.rating,
            comment: &p.comment,
            creator: &p.creator,
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        places: &[Place],
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "'{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        match format {
            ExportFormat::Csv => export_csv(places, path)?,
            ExportFormat::Json => export_json(places, path)?,
        }

        success(format!(
            "{} export completed: {} ({} places)",
            format.as_str().to_uppercase(),
            path.display(),
            places.len()
        ));
        Ok(())
    }
}

/// Export JSON pretty-printed.
fn export_json(places: &[Place], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(places)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// Export CSV (header included by serde).
fn export_csv(places: &[Place], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for p in places {
        wtr.serialize(CsvRow::from(p))?;
    }

    wtr.flush()?;
    Ok(())
}
