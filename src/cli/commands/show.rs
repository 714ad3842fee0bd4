use crate::cli::commands::list::print_events;
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, json } = cmd {
        let store = open_store(cfg)?;

        // absence becomes an error only at the shell
        let ev = store.get(*id)?.ok_or(AppError::NotFound(*id))?;

        if *json {
            let out =
                serde_json::to_string_pretty(&ev).map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print_events(std::slice::from_ref(&ev));
        }
    }
    Ok(())
}
