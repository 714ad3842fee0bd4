use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing rTrainWatch…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let store = EventStore::open(&db_path)?;

    println!("✅ Database initialized at {}", db_path.display());

    // non-blocking: a failed journal write does not undo the init
    if let Err(e) = store.record(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    store.close()?;

    println!("🎉 rTrainWatch initialization completed!");
    Ok(())
}
