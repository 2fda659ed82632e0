use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::places::{PlaceChanges, PlaceLogic};
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Edit { id, changes: args } = cmd {
        let changes = PlaceChanges {
            name: args.name.clone(),
            hours: args.hours.clone(),
            price: args.price.clone(),
            latitude: args.lat,
            longitude: args.lon,
            photo: args.photo.clone(),
            rating: args.rating,
            comment: args.comment.clone(),
        };

        if changes.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;

        match PlaceLogic::edit(&pool, session, cfg, *id, &changes) {
            Ok(Some(place)) => success(format!("Place {} ('{}') updated.", id, place.name)),
            Ok(None) => warning(format!("No place with id {}; nothing updated.", id)),
            Err(e) => {
                error(format!("Not saved: {:?}", changes));
                return Err(e);
            }
        }
    }

    Ok(())
}
