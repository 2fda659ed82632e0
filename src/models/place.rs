use serde::{Deserialize, Serialize};

/// One hangout spot, i.e. one row of the `tempat` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,         // ⇔ tempat.id (assigned by SQLite, never rewritten)
    pub name: String,    // ⇔ tempat.nama
    pub hours: String,   // ⇔ tempat.jam_buka ("24 Jam", "Nggak 24 Jam", ...)
    pub price: String,   // ⇔ tempat.harga ("Murah", "Mending Mahal", "Mahal", ...)
    pub latitude: f64,   // ⇔ tempat.latitude
    pub longitude: f64,  // ⇔ tempat.longitude
    pub photo: String,   // ⇔ tempat.foto (URL, may be empty)
    pub rating: f64,     // ⇔ tempat.rating
    pub comment: String, // ⇔ tempat.komentar
    pub creator: String, // ⇔ tempat.creator ('' for legacy rows)
}

impl Place {
    /// Build a not-yet-stored place. `id` stays 0 until the store assigns one
    /// and `creator` is supplied separately at insert time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        hours: &str,
        price: &str,
        latitude: f64,
        longitude: f64,
        photo: &str,
        rating: f64,
        comment: &str,
    ) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            hours: hours.to_string(),
            price: price.to_string(),
            latitude,
            longitude,
            photo: photo.to_string(),
            rating,
            comment: comment.to_string(),
            creator: String::new(),
        }
    }

    /// Google Maps search link centred on the place coordinates.
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.latitude, self.longitude
        )
    }

    /// Marker colour used for this place on the map.
    pub fn marker_color(&self) -> &'static str {
        marker_color(&self.price)
    }
}

/// Price tier → marker colour (case-insensitive).
/// Unknown tiers fall back to red, like "Mahal".
pub fn marker_color(price: &str) -> &'static str {
    match price.trim().to_lowercase().as_str() {
        "murah" => "green",
        "mending mahal" => "orange",
        _ => "red",
    }
}
