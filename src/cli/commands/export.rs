use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::places::PlaceLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let places = PlaceLogic::list(&pool)?;

        ExportLogic::export(&places, format, &expand_tilde(file), *force)?;
    }

    Ok(())
}
