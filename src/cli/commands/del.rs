use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::places::PlaceLogic;
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        // Permission first: no point asking an anonymous user to confirm.
        session.require_admin()?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete place #{}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;

        if PlaceLogic::delete(&pool, session, *id)? {
            success(format!("Place #{} has been deleted.", id));
        } else {
            warning(format!("No place with id {}; nothing deleted.", id));
        }
    }

    Ok(())
}
