//! Alert evaluation: maps the current event set and a time-of-day onto the
//! alerts that are true right now. Pure and stateless; nothing is stored
//! between calls, so polling inside a window reports the same alert again.

use crate::config::Config;
use crate::models::alert::{Alert, AlertReport};
use crate::models::event::Event;
use crate::utils::time::{clock_label, hhmm_to_minutes, in_window, minutes_before, minutes_of};
use chrono::{DateTime, Local, NaiveTime, SecondsFormat, Utc};
use tracing::{debug, warn};

pub const DEFAULT_WARNING_OFFSETS: [u32; 2] = [10, 5];
pub const DEFAULT_DETECTION_WINDOW: u32 = 1;

/// Warning offsets (checked in order, first match wins) and the width of
/// every detection window in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertPolicy {
    pub warning_offsets: Vec<u32>,
    pub window: u32,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            warning_offsets: DEFAULT_WARNING_OFFSETS.to_vec(),
            window: DEFAULT_DETECTION_WINDOW,
        }
    }
}

impl From<&Config> for AlertPolicy {
    fn from(cfg: &Config) -> Self {
        Self {
            warning_offsets: cfg.warning_offsets.clone(),
            window: cfg.detection_window,
        }
    }
}

pub struct AlertLogic;

impl AlertLogic {
    /// Evaluate with the default policy (`[10, 5]`, one-minute window).
    pub fn evaluate(events: &[Event], now: NaiveTime) -> Vec<Alert> {
        Self::evaluate_with(&AlertPolicy::default(), events, now)
    }

    /// Each event yields at most one alert. Events whose `end_time` cannot be
    /// read are skipped without affecting the others.
    pub fn evaluate_with(policy: &AlertPolicy, events: &[Event], now: NaiveTime) -> Vec<Alert> {
        let current = minutes_of(now);

        events
            .iter()
            .filter_map(|ev| match hhmm_to_minutes(&ev.end_time) {
                Some(end) => Self::alert_for(policy, ev, end, current),
                None => {
                    warn!(
                        id = ev.id,
                        end_time = %ev.end_time,
                        "skipping event with malformed end time"
                    );
                    None
                }
            })
            .collect()
    }

    fn alert_for(policy: &AlertPolicy, ev: &Event, end: u32, current: u32) -> Option<Alert> {
        // a finished alert suppresses any warning for the same event
        if in_window(current, end, policy.window) {
            return Some(Alert::finished(ev));
        }

        policy
            .warning_offsets
            .iter()
            .copied()
            .find(|&offset| in_window(current, minutes_before(end, offset), policy.window))
            .map(|offset| Alert::warning(ev, offset))
    }

    /// Build the full report for the instant `now`.
    pub fn check(policy: &AlertPolicy, events: &[Event], now: DateTime<Local>) -> AlertReport {
        let time = now.time();
        let alerts = Self::evaluate_with(policy, events, time);

        debug!(
            events = events.len(),
            alerts = alerts.len(),
            at = %clock_label(time),
            "alert check completed"
        );

        AlertReport {
            alerts,
            current_time: clock_label(time),
            timestamp: now
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
