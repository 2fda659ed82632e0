use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::{check_schema, print_db_info};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info: show_info,
    } = cmd
    {
        // Only --migrate may create the file; inspecting a path that does
        // not exist must leave it that way.
        if !*migrate && !Path::new(&cfg.database).exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!(
                    "Database not found: {} (run `nongkrong init` first)",
                    cfg.database
                ),
            )
            .into());
        }

        // Plain open: the schema is only touched by --migrate.
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            info("Running migrations…");
            run_pending_migrations(&pool.conn)?;
            success("Schema is up to date.");
        }

        if *show_info {
            print_db_info(&pool.conn, &cfg.database)?;
        }

        if *check {
            info(format!("Checking {}…", cfg.database));
            let problems = check_schema(&pool.conn)?;

            if !problems.is_empty() {
                for p in &problems {
                    warning(p);
                }
                return Err(AppError::Migration(format!(
                    "database check found {} problem(s)",
                    problems.len()
                )));
            }
            success("Integrity, columns and creator backfill look good.");
        }
    }

    Ok(())
}
