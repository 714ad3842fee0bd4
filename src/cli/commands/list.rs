use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, color_for_optional_field};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = open_store(cfg)?;
        let events = store.list()?;

        if *json {
            let out =
                serde_json::to_string_pretty(&events).map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if events.is_empty() {
            info("No events registered.");
            return Ok(());
        }

        header(format!("{} event(s)", events.len()));
        print_events(&events);
    }
    Ok(())
}

pub(crate) fn print_events(events: &[Event]) {
    let id_w = events
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let loc_w = events.iter().map(|e| e.location.chars().count()).max().unwrap_or(8);
    let trn_w = events.iter().map(|e| e.trainer.chars().count()).max().unwrap_or(8);

    for ev in events {
        let created = if ev.created_at.is_empty() {
            "--"
        } else {
            ev.created_at.as_str()
        };
        println!(
            "{:>id_w$} | {:<loc_w$} | {:<trn_w$} | {} → {} | {}{}{}",
            ev.id,
            ev.location,
            ev.trainer,
            ev.start_time,
            ev.end_time,
            color_for_optional_field(Some(&ev.created_at)),
            created,
            RESET,
            id_w = id_w,
            loc_w = loc_w,
            trn_w = trn_w,
        );
    }
    println!("{}{} total{}", GREY, events.len(), RESET);
}
