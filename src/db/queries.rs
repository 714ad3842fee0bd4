use crate::errors::AppResult;
use crate::models::event::{Event, NewEvent};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// UTC, millisecond resolution. Sorts lexically and after legacy
/// second-resolution `CURRENT_TIMESTAMP` values of the same second.
const NOW_SQL: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

const EVENT_COLUMNS: &str = "id, ubicacion, formador, hora_inicio, hora_fin, created_at";

pub fn map_row(row: &Row) -> Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        location: row.get("ubicacion")?,
        trainer: row.get("formador")?,
        start_time: row.get("hora_inicio")?,
        end_time: row.get("hora_fin")?,
        created_at: row
            .get::<_, Option<String>>("created_at")?
            .unwrap_or_default(),
    })
}

/// Insert one event and return the stored row.
pub fn insert_event(conn: &Connection, ev: &NewEvent) -> AppResult<Event> {
    let sql = format!(
        "INSERT INTO events (ubicacion, formador, hora_inicio, hora_fin, created_at)
         VALUES (?1, ?2, ?3, ?4, {NOW_SQL})
         RETURNING {EVENT_COLUMNS}"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let stored = stmt.query_row(
        params![ev.location, ev.trainer, ev.start_time, ev.end_time],
        map_row,
    )?;
    Ok(stored)
}

/// All events, most recently created first.
pub fn load_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at DESC, id DESC");
    let mut stmt = conn.prepare_cached(&sql)?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event_by_id(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Delete one event, returning the row as it was. None when no row matched.
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let sql = format!("DELETE FROM events WHERE id = ?1 RETURNING {EVENT_COLUMNS}");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    Ok(count)
}

/// Oldest and newest `created_at` values, for `db --info`.
pub fn created_range(conn: &Connection) -> AppResult<(Option<String>, Option<String>)> {
    let range = conn.query_row(
        "SELECT MIN(created_at), MAX(created_at) FROM events",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(range)
}
