use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::places::PlaceLogic;
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::place::Place;
use crate::ui::messages::{error, success};

/// Add a new place credited to the logged-in user.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Add { place: args } = cmd {
        let place = Place::new(
            &args.name,
            &args.hours,
            &args.price,
            args.lat,
            args.lon,
            &args.photo,
            args.rating.unwrap_or(cfg.default_rating),
            &args.comment,
        );

        let pool = DbPool::open(&cfg.database)?;

        match PlaceLogic::add(&pool, session, cfg, &place) {
            Ok(id) => success(format!("Place '{}' added with id {}.", place.name, id)),
            Err(e) => {
                // Keep what the user typed so it can be resubmitted.
                error(format!("Not saved: {:?}", place));
                return Err(e);
            }
        }
    }

    Ok(())
}
