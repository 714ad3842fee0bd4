use serde::{Deserialize, Serialize};

/// A scheduled training event.
///
/// Field names on the wire and in the `events` table follow the
/// historical vocabulary (`ubicacion`, `formador`, `hora_inicio`, `hora_fin`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(rename = "ubicacion")]
    pub location: String, // ⇔ events.ubicacion
    #[serde(rename = "formador")]
    pub trainer: String, // ⇔ events.formador
    #[serde(rename = "hora_inicio")]
    pub start_time: String, // ⇔ events.hora_inicio (TEXT "HH:MM")
    #[serde(rename = "hora_fin")]
    pub end_time: String, // ⇔ events.hora_fin (TEXT "HH:MM")
    pub created_at: String, // ⇔ events.created_at (UTC "YYYY-MM-DD HH:MM:SS.SSS")
}

/// Input for `EventStore::create`, before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewEvent {
    #[serde(rename = "ubicacion", default)]
    pub location: String,
    #[serde(rename = "formador", default)]
    pub trainer: String,
    #[serde(rename = "hora_inicio", default)]
    pub start_time: String,
    #[serde(rename = "hora_fin", default)]
    pub end_time: String,
}

impl NewEvent {
    pub fn new(
        location: impl Into<String>,
        trainer: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            trainer: trainer.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Names of the mandatory fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("ubicacion", &self.location),
            ("formador", &self.trainer),
            ("hora_inicio", &self.start_time),
            ("hora_fin", &self.end_time),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Reply shape of `createEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedId {
    pub id: i64,
}

impl From<&Event> for CreatedId {
    fn from(ev: &Event) -> Self {
        Self { id: ev.id }
    }
}
