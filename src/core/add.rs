use crate::db::EventStore;
use crate::errors::AppResult;
use crate::models::event::{Event, NewEvent};
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(store: &EventStore, ev: &NewEvent, quiet: bool) -> AppResult<Event> {
        let stored = store.create(ev)?;

        if !quiet {
            success(format!(
                "Event saved with ID {}: {} / {} ({} → {}).",
                stored.id, stored.location, stored.trainer, stored.start_time, stored.end_time
            ));
        }

        Ok(stored)
    }
}
