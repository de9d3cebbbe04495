//! Interactive console for the book club catalog.
//!
//! # Responsibility
//! - Parse command-line configuration and bootstrap logging.
//! - Open the catalog database and run the menu session over stdin/stdout.

mod console;
mod error;
mod menu;
mod render;

use anyhow::Context;
use bookclub_core::db::{open_db_at, DbLocation};
use bookclub_core::{core_version, default_log_level, init_logging};
use clap::Parser;
use console::Console;
use log::{error, info};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bookclub", version, about = "Book club catalog console")]
struct Cli {
    /// SQLite database file, or `:memory:` for a throwaway catalog.
    #[arg(long, env = "BOOKCLUB_DB", default_value = "bookclub.sqlite3")]
    db: String,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "BOOKCLUB_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging stays off when unset.
    #[arg(long, env = "BOOKCLUB_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }
    info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );

    let location = DbLocation::parse(&cli.db);
    let mut conn = open_db_at(&location)
        .with_context(|| format!("failed to open database `{}`", cli.db))?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    if let Err(err) = menu::run_session(&mut conn, &mut console) {
        error!("event=session_abort module=cli status=error error={err}");
        return Err(err).context("session aborted");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_to_file_database_without_logging() {
        let cli = Cli::try_parse_from(["bookclub"]).unwrap();
        assert_eq!(cli.db, "bookclub.sqlite3");
        assert!(cli.log_level.is_none());
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn accepts_memory_database_and_log_options() {
        let cli = Cli::try_parse_from([
            "bookclub",
            "--db",
            ":memory:",
            "--log-level",
            "debug",
            "--log-dir",
            "/tmp/bookclub-logs",
        ])
        .unwrap();
        assert_eq!(cli.db, ":memory:");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/bookclub-logs")));
    }
}
