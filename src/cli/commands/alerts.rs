use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alerts::{AlertLogic, AlertPolicy};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{alert, info};
use crate::utils::time::parse_optional_time;
use chrono::{Local, Timelike};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Alerts { at, json } = cmd {
        let override_time = parse_optional_time(at.as_ref())?;

        let now = Local::now();
        let now = match override_time {
            Some(t) => now
                .with_hour(t.hour())
                .and_then(|d| d.with_minute(t.minute()))
                .and_then(|d| d.with_second(0))
                .ok_or_else(|| AppError::InvalidTime(format!("{} does not exist today", t)))?,
            None => now,
        };

        let store = open_store(cfg)?;
        let events = store.list()?;
        let report = AlertLogic::check(&AlertPolicy::from(cfg), &events, now);

        if *json {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if report.alerts.is_empty() {
            info(format!("No alerts at {}.", report.current_time));
            return Ok(());
        }

        for a in &report.alerts {
            alert(a);
        }
    }
    Ok(())
}
