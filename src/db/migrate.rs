use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result, Transaction, TransactionBehavior};
use tracing::{info, warn};

const EVENTS_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS events (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        ubicacion   TEXT NOT NULL,
        formador    TEXT NOT NULL,
        hora_inicio TEXT NOT NULL,
        hora_fin    TEXT NOT NULL,
        created_at  TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );
"#;

const EVENTS_INDEXES: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_hora_fin ON events(hora_fin);
    CREATE INDEX IF NOT EXISTS idx_created ON events(created_at);
"#;

const REQUIRED_COLUMNS: [&str; 6] = [
    "id",
    "ubicacion",
    "formador",
    "hora_inicio",
    "hora_fin",
    "created_at",
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// CREATE statement of the `events` table, if the table exists.
fn events_table_sql(conn: &Connection) -> Result<Option<String>> {
    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type='table' AND name='events'",
        [],
        |row| row.get(0),
    )
    .optional()
}

fn events_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Tables created without AUTOINCREMENT may hand out the id of a deleted
/// maximum row again. Rebuild them so ids are never reused.
fn migrate_events_autoincrement(conn: &Connection) -> AppResult<()> {
    let version = "20251016_0001_events_autoincrement";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let sql = events_table_sql(conn)?.unwrap_or_default();
    if !sql.to_uppercase().contains("AUTOINCREMENT") {
        warn!("rebuilding events table with AUTOINCREMENT ids");

        conn.execute_batch(&format!(
            r#"
            ALTER TABLE events RENAME TO events_old;

            {EVENTS_SCHEMA}

            INSERT INTO events (id, ubicacion, formador, hora_inicio, hora_fin, created_at)
            SELECT id, ubicacion, formador, hora_inicio, hora_fin, created_at
            FROM events_old;

            DROP TABLE events_old;

            UPDATE sqlite_sequence
                SET seq = (SELECT IFNULL(MAX(id), 0) FROM events)
            WHERE name = 'events';
            "#
        ))?;
    }

    ttlog(
        conn,
        "migration_applied",
        version,
        "Events table uses AUTOINCREMENT ids",
    )?;
    info!(version, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
/// Everything runs in one IMMEDIATE transaction, so concurrent openers of a
/// fresh database apply each migration exactly once.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    apply_migrations(&tx)?;
    tx.commit()?;
    Ok(())
}

fn apply_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    match events_table_sql(conn)? {
        None => {
            conn.execute_batch(EVENTS_SCHEMA)?;
            info!("created events table");
        }
        Some(_) => {
            let cols = events_columns(conn)?;
            if let Some(missing) = REQUIRED_COLUMNS
                .into_iter()
                .find(|c| !cols.iter().any(|have| have == c))
            {
                return Err(AppError::Migration(format!(
                    "events table is missing column '{}'",
                    missing
                )));
            }
        }
    }

    migrate_events_autoincrement(conn)?;

    conn.execute_batch(EVENTS_INDEXES)?;

    Ok(())
}
