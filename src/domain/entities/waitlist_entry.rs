use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single waitlist signup. Entries are append-only: never updated,
/// never deleted.
#[derive(Debug, Clone)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
