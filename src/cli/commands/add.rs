use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::event::{CreatedId, NewEvent};

/// Register a new event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        location,
        trainer,
        start,
        end,
        json,
    } = cmd
    {
        let ev = NewEvent::new(location.as_str(), trainer.as_str(), start.as_str(), end.as_str());

        let store = open_store(cfg)?;
        let stored = AddLogic::apply(&store, &ev, *json)?;

        if *json {
            let out = serde_json::to_string(&CreatedId::from(&stored))
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        }
    }

    Ok(())
}
