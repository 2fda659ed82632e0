use crate::config::Config;
use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_place, find_place, insert_place, list_places, update_place};
use crate::errors::{AppError, AppResult};
use crate::models::place::Place;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Field overrides applied on top of a stored place by `edit`.
#[derive(Debug, Clone, Default)]
pub struct PlaceChanges {
    pub name: Option<String>,
    pub hours: Option<String>,
    pub price: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: Option<String>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

impl PlaceChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.hours.is_none()
            && self.price.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.photo.is_none()
            && self.rating.is_none()
            && self.comment.is_none()
    }

    /// Same checks as `validate`, limited to the fields being changed.
    /// Stored values (e.g. imported labels outside the option lists) are
    /// left alone.
    pub fn validate(&self, cfg: &Config) -> AppResult<()> {
        if let Some(h) = &self.hours {
            check_hours(h, cfg)?;
        }
        if let Some(p) = &self.price {
            check_price(p, cfg)?;
        }
        if let Some(r) = self.rating {
            check_rating(r)?;
        }
        Ok(())
    }

    /// Overlay the given fields; `id` and `creator` are untouched.
    pub fn apply_to(&self, place: &mut Place) {
        if let Some(v) = &self.name {
            place.name = v.clone();
        }
        if let Some(v) = &self.hours {
            place.hours = v.clone();
        }
        if let Some(v) = &self.price {
            place.price = v.clone();
        }
        if let Some(v) = self.latitude {
            place.latitude = v;
        }
        if let Some(v) = self.longitude {
            place.longitude = v;
        }
        if let Some(v) = &self.photo {
            place.photo = v.clone();
        }
        if let Some(v) = self.rating {
            place.rating = v;
        }
        if let Some(v) = &self.comment {
            place.comment = v.clone();
        }
    }
}

fn check_hours(hours: &str, cfg: &Config) -> AppResult<()> {
    if cfg.is_known_hours(hours) {
        Ok(())
    } else {
        Err(AppError::InvalidHours(hours.to_string()))
    }
}

fn check_price(price: &str, cfg: &Config) -> AppResult<()> {
    if cfg.is_known_price(price) {
        Ok(())
    } else {
        Err(AppError::InvalidPrice(price.to_string()))
    }
}

fn check_rating(rating: f64) -> AppResult<()> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::InvalidRating(rating))
    }
}

/// Form-level checks for a new place: hours and price must come from the
/// configured option lists, rating must sit on the 1.0..=5.0 slider.
pub fn validate(place: &Place, cfg: &Config) -> AppResult<()> {
    check_hours(&place.hours, cfg)?;
    check_price(&place.price, cfg)?;
    check_rating(place.rating)
}

pub struct PlaceLogic;

impl PlaceLogic {
    pub fn list(pool: &DbPool) -> AppResult<Vec<Place>> {
        list_places(&pool.conn)
    }

    /// Insert a new place credited to the logged-in user.
    pub fn add(pool: &DbPool, session: &Session, cfg: &Config, place: &Place) -> AppResult<i64> {
        let user = session.require_user()?;
        validate(place, cfg)?;

        let id = insert_place(&pool.conn, place, user)?;

        audit(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("{} added '{}'", user, place.name),
        )?;

        Ok(id)
    }

    /// Apply `changes` to place `id`.
    /// Returns `Ok(None)` when no such place exists.
    pub fn edit(
        pool: &DbPool,
        session: &Session,
        cfg: &Config,
        id: i64,
        changes: &PlaceChanges,
    ) -> AppResult<Option<Place>> {
        let user = session.require_admin()?;
        changes.validate(cfg)?;

        let Some(mut place) = find_place(&pool.conn, id)? else {
            return Ok(None);
        };

        changes.apply_to(&mut place);

        if update_place(&pool.conn, &place)? == 0 {
            return Ok(None);
        }

        audit(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("{} updated '{}'", user, place.name),
        )?;

        Ok(Some(place))
    }

    /// Delete place `id`. Returns `Ok(false)` when it did not exist.
    pub fn delete(pool: &DbPool, session: &Session, id: i64) -> AppResult<bool> {
        let user = session.require_admin()?;

        let removed = delete_place(&pool.conn, id)? > 0;

        if removed {
            audit(
                &pool.conn,
                "del",
                &id.to_string(),
                &format!("{} deleted place {}", user, id),
            )?;
        }

        Ok(removed)
    }
}
