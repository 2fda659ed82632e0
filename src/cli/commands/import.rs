use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let path = expand_tilde(file);

        let count = ImportLogic::import_file(&mut pool, &path)?;
        success(format!("Imported {} places into SQLite.", count));
    }

    Ok(())
}
