use crate::models::alert::{Alert, AlertKind};
use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", colour.bold().paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}\n",
        Colour::Blue.bold().paint(format!("====================== {}", msg))
    );
}

/// Render one alert as a coloured block: red for finished, yellow for warnings.
pub fn alert(a: &Alert) {
    let style: Style = match a.kind {
        AlertKind::Finished => Colour::Red.bold(),
        AlertKind::Warning => Colour::Yellow.bold(),
    };
    let label = match a.minutes_remaining {
        Some(m) => format!("[{} -{}m] #{}", a.kind.as_str(), m, a.event.id),
        None => format!("[{}] #{}", a.kind.as_str(), a.event.id),
    };
    println!("{}", style.paint(label));
    println!("{}\n", a.message);
}
