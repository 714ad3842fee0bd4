//! Event store: durable, consistently ordered persistence of events.
//!
//! The store owns its connection pool and is shared by reference (or `Arc`)
//! between callers. Writes go through the pool's single writer inside an
//! IMMEDIATE transaction; reads use WAL reader connections.

use crate::db::initialize::init_db;
use crate::db::log::{LogEntry, load_log, ttlog};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, NewEvent};
use crate::utils::time::strict_hhmm_to_minutes;
use rusqlite::TransactionBehavior;
use std::path::Path;
use tracing::{debug, info};

pub struct EventStore {
    pool: DbPool,
    strict_times: bool,
}

impl EventStore {
    /// Open (or create) the database at `path` and run pending migrations.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        Self::init(DbPool::new(path)?)
    }

    /// Private in-memory database, mostly for tests.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::init(DbPool::in_memory()?)
    }

    fn init(pool: DbPool) -> AppResult<Self> {
        pool.with_writer(|conn| init_db(conn))?;
        Ok(Self {
            pool,
            strict_times: false,
        })
    }

    /// Reject start/end times that are not valid `HH:MM` at creation time.
    pub fn with_strict_times(mut self, strict: bool) -> Self {
        self.strict_times = strict;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.pool.path()
    }

    fn validate(&self, ev: &NewEvent) -> AppResult<()> {
        let missing = ev.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "all fields are required (missing: {})",
                missing.join(", ")
            )));
        }

        if self.strict_times {
            for t in [&ev.start_time, &ev.end_time] {
                if strict_hhmm_to_minutes(t).is_none() {
                    return Err(AppError::InvalidTime(t.clone()));
                }
            }
        }

        Ok(())
    }

    /// Persist a new event and return it with its assigned id and `created_at`.
    pub fn create(&self, ev: &NewEvent) -> AppResult<Event> {
        self.validate(ev)?;

        let stored = self.pool.with_writer(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            let stored = queries::insert_event(&tx, ev)?;
            ttlog(
                &tx,
                "add",
                &stored.id.to_string(),
                &format!("{} / {} ({})", stored.location, stored.trainer, stored.end_time),
            )?;
            tx.commit()?;
            Ok(stored)
        })?;

        info!(id = stored.id, location = %stored.location, "event created");
        Ok(stored)
    }

    /// All events, most recently created first.
    pub fn list(&self) -> AppResult<Vec<Event>> {
        let events = self.pool.with_reader(queries::load_events)?;
        debug!(count = events.len(), "events loaded");
        Ok(events)
    }

    /// Absence is not an error here; callers decide.
    pub fn get(&self, id: i64) -> AppResult<Option<Event>> {
        let ev = self
            .pool
            .with_reader(|conn| queries::load_event_by_id(conn, id))?;
        debug!(id, found = ev.is_some(), "event lookup");
        Ok(ev)
    }

    /// Delete an event and return the deleted row.
    ///
    /// The existence check and the delete are a single statement inside one
    /// write transaction: of several concurrent deletes of the same id exactly
    /// one succeeds and the others get `NotFound`.
    pub fn delete(&self, id: i64) -> AppResult<Event> {
        let deleted = self.pool.with_writer(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            let Some(deleted) = queries::delete_event(&tx, id)? else {
                return Err(AppError::NotFound(id));
            };
            ttlog(
                &tx,
                "del",
                &id.to_string(),
                &format!("{} / {}", deleted.location, deleted.trainer),
            )?;
            tx.commit()?;
            Ok(deleted)
        })?;

        info!(id, location = %deleted.location, "event deleted");
        Ok(deleted)
    }

    pub fn count(&self) -> AppResult<i64> {
        self.pool.with_reader(queries::count_events)
    }

    /// Oldest and newest `created_at`.
    pub fn created_range(&self) -> AppResult<(Option<String>, Option<String>)> {
        self.pool.with_reader(queries::created_range)
    }

    /// Rows of the internal `log` table, oldest first.
    pub fn journal(&self) -> AppResult<Vec<LogEntry>> {
        self.pool.with_reader(load_log)
    }

    /// Append a free-form entry to the internal `log` table.
    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.pool
            .with_writer(|conn| ttlog(conn, operation, target, message))
    }

    /// Run pending migrations again (idempotent).
    pub fn migrate(&self) -> AppResult<()> {
        self.pool.with_writer(|conn| init_db(conn))
    }

    /// `PRAGMA integrity_check`; "ok" when healthy.
    pub fn integrity_check(&self) -> AppResult<String> {
        self.pool.with_writer(|conn| {
            Ok(conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
        })
    }

    pub fn vacuum(&self) -> AppResult<()> {
        self.pool.with_writer(|conn| Ok(conn.execute_batch("VACUUM;")?))
    }

    /// Release every connection. Dropping the store does the same but
    /// swallows close errors.
    pub fn close(self) -> AppResult<()> {
        self.pool.close()
    }
}
