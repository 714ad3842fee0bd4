use crate::db::EventStore;
use crate::db::log::LogEntry;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Colour of the operation column
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// "operation (target)" cut to MAX_OP_WIDTH visible characters.
fn op_target_label(entry: &LogEntry) -> String {
    let raw = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if raw.chars().count() > MAX_OP_WIDTH {
        let mut s: String = raw.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        raw
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &EventStore) -> AppResult<()> {
        let entries = store.journal()?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = entries.iter().map(op_target_label).collect();

        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, label) in entries.iter().zip(labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            // padding is measured on the plain label, before colouring the operation
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));
            let colour = color_for_operation(&entry.operation);
            let coloured = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
                None => colour.paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                coloured,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
