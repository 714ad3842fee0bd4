//! SQLite connection pool: one writer connection, many readers.
//!
//! Mutations go through the single writer behind a mutex, so they are totally
//! ordered within the process. File databases run in WAL mode and hand out
//! separate read-only connections, which never block each other or the writer.
//! In-memory databases cannot be shared between connections, so reads there
//! fall back to the writer.

use crate::db::initialize::configure_connection;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

pub struct DbPool {
    path: Option<PathBuf>,
    writer: Mutex<Connection>,
    readers: Mutex<Vec<Connection>>,
}

impl DbPool {
    pub fn new(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        configure_connection(&conn)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        debug!(path = %path.display(), journal_mode = %mode, "database opened");

        Ok(Self {
            path: Some(path.to_path_buf()),
            writer: Mutex::new(conn),
            readers: Mutex::new(Vec::new()),
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        configure_connection(&conn)?;

        Ok(Self {
            path: None,
            writer: Mutex::new(conn),
            readers: Mutex::new(Vec::new()),
        })
    }

    /// Database file backing this pool, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn lock_writer(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.writer
            .lock()
            .map_err(|_| AppError::Other("database writer mutex poisoned".into()))
    }

    /// Helper to execute a closure with exclusive access to the writer connection.
    pub fn with_writer<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        let mut conn = self.lock_writer()?;
        func(&mut conn)
    }

    /// Helper to execute a closure with a read connection.
    pub fn with_reader<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let Some(path) = &self.path else {
            let conn = self.lock_writer()?;
            return func(&conn);
        };

        let idle = self
            .readers
            .lock()
            .map_err(|_| AppError::Other("database reader pool poisoned".into()))?
            .pop();

        let conn = match idle {
            Some(c) => c,
            None => {
                debug!(path = %path.display(), "opening reader connection");
                let c = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )?;
                configure_connection(&c)?;
                c
            }
        };

        let result = func(&conn);

        if let Ok(mut readers) = self.readers.lock() {
            readers.push(conn);
        }

        result
    }

    /// Drop idle readers and close the writer, reporting close failures.
    pub fn close(self) -> AppResult<()> {
        let readers = self
            .readers
            .into_inner()
            .map_err(|_| AppError::Other("database reader pool poisoned".into()))?;
        for r in readers {
            r.close().map_err(|(_, e)| AppError::Db(e))?;
        }

        let writer = self
            .writer
            .into_inner()
            .map_err(|_| AppError::Other("database writer mutex poisoned".into()))?;
        writer.close().map_err(|(_, e)| AppError::Db(e))?;
        Ok(())
    }
}
