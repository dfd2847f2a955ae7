use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The couple's single current mood. Not a history; `update_mood` mutates it
/// in place and refreshes `last_updated_date` on every successful update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStatus {
    pub note: String,
    pub mood: String,
    pub author_id: UserId,
    pub last_updated_date: DateTime<Utc>,
}
