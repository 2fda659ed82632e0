//! In-memory filtering of the place list by opening hours and price tier.

use crate::models::place::Place;

/// Empty selections mean "everything", like a multiselect whose default is
/// every available option.
#[derive(Debug, Clone, Default)]
pub struct PlaceFilter {
    pub hours: Vec<String>,
    pub prices: Vec<String>,
}

impl PlaceFilter {
    pub fn new(hours: Vec<String>, prices: Vec<String>) -> Self {
        Self { hours, prices }
    }

    pub fn matches(&self, place: &Place) -> bool {
        selected(&self.hours, &place.hours) && selected(&self.prices, &place.price)
    }

    pub fn apply<'a>(&self, places: &'a [Place]) -> Vec<&'a Place> {
        places.iter().filter(|p| self.matches(p)).collect()
    }
}

fn selected(selection: &[String], value: &str) -> bool {
    selection.is_empty() || selection.iter().any(|s| s == value)
}

/// Distinct opening-hours labels present in `places`, first-seen order.
pub fn hours_options(places: &[Place]) -> Vec<String> {
    distinct(places.iter().map(|p| p.hours.as_str()))
}

/// Distinct price tiers present in `places`, first-seen order.
pub fn price_options(places: &[Place]) -> Vec<String> {
    distinct(places.iter().map(|p| p.price.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}
