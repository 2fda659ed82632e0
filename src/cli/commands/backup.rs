use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let dest = match file {
            Some(f) => expand_tilde(f),
            None => BackupLogic::default_destination(&cfg.database, Local::now()),
        };
        BackupLogic::backup(&cfg.database, &dest, *compress)?;
    }

    Ok(())
}
