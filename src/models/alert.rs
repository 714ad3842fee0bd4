use super::event::Event;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Finished,
    Warning,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Finished => "finished",
            AlertKind::Warning => "warning",
        }
    }
}

/// A derived, never persisted signal about one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub minutes_remaining: Option<u32>,
    pub message: String,
}

impl Alert {
    pub fn finished(event: &Event) -> Self {
        let message = format!(
            "🔔 EVENT FINISHED!\n\nThe event at {} with trainer {} has concluded.\n\n⚠️ LENT EQUIPMENT MUST BE RECONFIGURED.",
            event.location, event.trainer
        );
        Self {
            kind: AlertKind::Finished,
            event: event.clone(),
            minutes_remaining: None,
            message,
        }
    }

    pub fn warning(event: &Event, minutes_remaining: u32) -> Self {
        let message = format!(
            "⏰ ATTENTION!\n\nThe event at {} with trainer {} ends in {} minutes.\n\nScheduled end time: {}",
            event.location, event.trainer, minutes_remaining, event.end_time
        );
        Self {
            kind: AlertKind::Warning,
            event: event.clone(),
            minutes_remaining: Some(minutes_remaining),
            message,
        }
    }
}

/// Output of one alert check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReport {
    pub alerts: Vec<Alert>,
    /// `H:MM`, hour unpadded.
    pub current_time: String,
    /// RFC 3339 instant the check was run for.
    pub timestamp: String,
}
