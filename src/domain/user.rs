use serde::{Deserialize, Serialize};

/// Unique identifier for a user
pub type UserId = String;

/// One half of the couple. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// Per-couple limits enforced when composing a post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouplePreferences {
    pub max_images_per_post: usize,
    pub max_description_length: usize,
}

impl Default for CouplePreferences {
    fn default() -> Self {
        Self {
            max_images_per_post: 10,
            max_description_length: 2000,
        }
    }
}

/// The couple sharing this journal. Read-mostly singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleProfile {
    pub me: User,
    pub partner: User,
    /// ISO day string, e.g. "2022-05-14".
    pub anniversary_date: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Derived externally from the anniversary date; never recomputed here.
    pub days_together: u32,
    pub preferences: CouplePreferences,
}

impl CoupleProfile {
    /// Resolve a user id to its display name within the couple, if known.
    pub fn name_of(&self, id: &str) -> Option<&str> {
        if self.me.id == id {
            Some(&self.me.name)
        } else if self.partner.id == id {
            Some(&self.partner.name)
        } else {
            None
        }
    }
}
