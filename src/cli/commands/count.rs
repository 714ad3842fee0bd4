use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Count { json } = cmd {
        let store = open_store(cfg)?;
        let total = store.count()?;

        if *json {
            println!("{}", serde_json::json!({ "total_events": total }));
        } else {
            println!("{}", total);
        }
    }
    Ok(())
}
