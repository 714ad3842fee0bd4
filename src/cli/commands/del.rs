use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};

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

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = open_store(cfg)?;

        if !*yes {
            let ev = store.get(*id)?.ok_or(AppError::NotFound(*id))?;
            let prompt = format!(
                "Delete event #{} at {} ({} → {})? This action is irreversible.",
                ev.id, ev.location, ev.start_time, ev.end_time
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        // the delete itself decides existence; the lookup above is only for the prompt
        DeleteLogic::apply(&store, *id)?;
    }

    Ok(())
}
