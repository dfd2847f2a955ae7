use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a feed post
pub type PostId = String;

/// Unique identifier for a threaded reply
pub type ResponseId = String;

/// What kind of memory a post holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    #[default]
    Photo,
    Video,
    Text,
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Photo => write!(f, "photo"),
            Self::Video => write!(f, "video"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown post kind: {other}")),
        }
    }
}

/// A threaded reply attached to a post. Owned by exactly one post and
/// deleted along with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    pub user_id: UserId,
    pub user_name: String,
    pub created_date: DateTime<Utc>,
    pub message: String,
}

/// A single shared memory entry in the couple's journal.
///
/// Invariants maintained by the canonical store:
/// - `likes` holds each user id at most once (a like is a toggle, not a counter)
/// - `media` order is display order; index 0 is the primary image
/// - `responses` is append-ordered; delete-by-id preserves survivor order
/// - `id` is assigned at creation and immutable; `created_date` never changes
/// - `last_updated_date` is refreshed whenever title/description/media/likes/
///   responses change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub created_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
    pub title: String,
    pub description: String,
    /// Media URLs in display order.
    pub media: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Ids of users who liked this post. Set semantics.
    #[serde(default)]
    pub likes: Vec<UserId>,
    /// Response count shown in compact layouts; kept in step with `responses`.
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Threaded replies in append (chronological) order.
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl Post {
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    #[cfg(test)]
    pub fn new_for_test(id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            kind: PostKind::Text,
            created_date: now,
            last_updated_date: now,
            title: format!("Post {id}"),
            description: String::new(),
            media: Vec::new(),
            location: None,
            likes: Vec::new(),
            comments: 0,
            hashtags: Vec::new(),
            responses: Vec::new(),
        }
    }
}

/// Payload for creating a post. The id, likes, comments, and creation date
/// are assigned by the adapter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl PostDraft {
    /// Draft for the composer flow: posts with media are photos, bare drafts
    /// are text entries.
    pub fn new(title: impl Into<String>, description: impl Into<String>, media: Vec<String>) -> Self {
        let kind = if media.is_empty() {
            PostKind::Text
        } else {
            PostKind::Photo
        };
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            media,
            location: None,
            hashtags: Vec::new(),
        }
    }
}

/// Partial update merged into an existing post. Absent fields are left alone.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<Vec<String>>,
    pub location: Option<String>,
    pub hashtags: Option<Vec<String>>,
    /// The composer sends the user-picked date; when absent the adapter
    /// stamps the merge time.
    pub last_updated_date: Option<DateTime<Utc>>,
}
