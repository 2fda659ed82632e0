use crate::errors::AppResult;
use crate::models::place::Place;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_PLACE: &str = "SELECT id, nama, jam_buka, harga, latitude, longitude,
                                   foto, rating, komentar, creator
                            FROM tempat";

/// Map a `tempat` row. NULL text → "", NULL real → 0.0.
pub fn map_row(row: &Row) -> Result<Place> {
    Ok(Place {
        id: row.get("id")?,
        name: text(row, "nama")?,
        hours: text(row, "jam_buka")?,
        price: text(row, "harga")?,
        latitude: real(row, "latitude")?,
        longitude: real(row, "longitude")?,
        photo: text(row, "foto")?,
        rating: real(row, "rating")?,
        comment: text(row, "komentar")?,
        creator: text(row, "creator")?,
    })
}

fn text(row: &Row, col: &str) -> Result<String> {
    Ok(row.get::<_, Option<String>>(col)?.unwrap_or_default())
}

fn real(row: &Row, col: &str) -> Result<f64> {
    Ok(row.get::<_, Option<f64>>(col)?.unwrap_or(0.0))
}

/// Every place, in insertion (id) order.
pub fn list_places(conn: &Connection) -> AppResult<Vec<Place>> {
    let mut stmt = conn.prepare(&format!("{SELECT_PLACE} ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_place(conn: &Connection, id: i64) -> AppResult<Option<Place>> {
    let mut stmt = conn.prepare(&format!("{SELECT_PLACE} WHERE id = ?1"))?;
    let place = stmt.query_row([id], map_row).optional()?;
    Ok(place)
}

/// Insert a new place and return the id SQLite assigned.
/// `place.id` and `place.creator` are ignored.
pub fn insert_place(conn: &Connection, place: &Place, creator: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tempat (nama, jam_buka, harga, latitude, longitude, foto, rating, komentar, creator)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            place.name,
            place.hours,
            place.price,
            place.latitude,
            place.longitude,
            place.photo,
            place.rating,
            place.comment,
            creator,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a place (all fields except id and creator).
/// Returns the number of rows touched: 0 means no place has that id.
pub fn update_place(conn: &Connection, place: &Place) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE tempat
         SET nama = ?1, jam_buka = ?2, harga = ?3,
             latitude = ?4, longitude = ?5,
             foto = ?6, rating = ?7, komentar = ?8
         WHERE id = ?9",
        params![
            place.name,
            place.hours,
            place.price,
            place.latitude,
            place.longitude,
            place.photo,
            place.rating,
            place.comment,
            place.id,
        ],
    )?;
    Ok(changed)
}

/// Delete a place. Returns 0 when the id does not exist.
pub fn delete_place(conn: &Connection, id: i64) -> AppResult<usize> {
    let changed = conn.execute("DELETE FROM tempat WHERE id = ?1", [id])?;
    Ok(changed)
}
