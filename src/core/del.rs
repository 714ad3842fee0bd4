use crate::db::EventStore;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::ui::messages::success;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one event. A second delete of the same id fails with NotFound;
    /// no verification read follows the delete.
    pub fn apply(store: &EventStore, id: i64) -> AppResult<Event> {
        let deleted = store.delete(id)?;
        success(format!(
            "Event {} at {} ({}) deleted.",
            deleted.id, deleted.location, deleted.trainer
        ));
        Ok(deleted)
    }
}
