pub mod add;
pub mod alerts;
pub mod config;
pub mod count;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod show;

use crate::config::Config;
use crate::db::EventStore;
use crate::errors::AppResult;

/// Open the configured database, honouring `strict_times`.
pub fn open_store(cfg: &Config) -> AppResult<EventStore> {
    Ok(EventStore::open(cfg.database_path())?.with_strict_times(cfg.strict_times))
}
