//! Canonical in-memory store for the couple's journal.
//!
//! The store exclusively owns the canonical collections (posts list, mood
//! singleton, profile singleton) behind accessor methods. It is injected into
//! the adapter rather than reached through shared globals, so every mutation
//! goes through one place. Methods are synchronous; the adapter layers
//! latency on top.

use crate::domain::{
    CouplePreferences, CoupleProfile, DataError, DataResult, MoodStatus, Post, PostDraft,
    PostKind, PostPatch, Response, User, UserId,
};
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

struct StoreInner {
    profile: CoupleProfile,
    mood: MoodStatus,
    /// Most-recent-first; creates prepend.
    posts: Vec<Post>,
}

pub struct FeedStore {
    inner: Mutex<StoreInner>,
}

impl FeedStore {
    pub fn new(profile: CoupleProfile, mood: MoodStatus, posts: Vec<Post>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                profile,
                mood,
                posts,
            }),
        }
    }

    /// The demo data set the app ships with.
    pub fn seeded() -> Self {
        let me = User {
            id: "u1".to_string(),
            name: "Sarah".to_string(),
            avatar: "https://i.pravatar.cc/150?u=sarah".to_string(),
        };
        let partner = User {
            id: "u2".to_string(),
            name: "Mike".to_string(),
            avatar: "https://i.pravatar.cc/150?u=mike".to_string(),
        };

        let profile = CoupleProfile {
            me: me.clone(),
            partner: partner.clone(),
            anniversary_date: "2022-05-14".to_string(),
            cover_image: None,
            days_together: 1240,
            preferences: CouplePreferences::default(),
        };

        let mood = MoodStatus {
            note: "Missing you a little extra today...".to_string(),
            mood: "Missing you".to_string(),
            author_id: me.id.clone(),
            last_updated_date: Utc::now(),
        };

        let kyoto_date = Utc.with_ymd_and_hms(2023, 10, 5, 9, 30, 0).unwrap();
        let movie_date = Utc.with_ymd_and_hms(2023, 9, 12, 21, 0, 0).unwrap();

        let posts = vec![
            Post {
                id: "f1".to_string(),
                kind: PostKind::Photo,
                created_date: kyoto_date,
                last_updated_date: kyoto_date,
                title: "Kyoto Adventures 🍵".to_string(),
                description: "The matcha ice cream was amazing! Can't wait to go back. \
                              Walking through Fushimi Inari was tiring but worth it for the view."
                    .to_string(),
                media: vec![
                    "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e".to_string(),
                    "https://plus.unsplash.com/premium_photo-1664368832311-7fe635e32c7c".to_string(),
                    "https://images.unsplash.com/photo-1504150558240-0b4fd8946624".to_string(),
                ],
                location: Some("Kyoto, Japan".to_string()),
                likes: vec![me.id.clone(), partner.id.clone()],
                comments: 1,
                hashtags: vec!["travel".to_string(), "japan".to_string()],
                responses: vec![Response {
                    id: "r1".to_string(),
                    user_id: partner.id.clone(),
                    user_name: partner.name.clone(),
                    created_date: kyoto_date,
                    message: "Best trip ever. Next time we finish the hike!".to_string(),
                }],
            },
            Post {
                id: "f2".to_string(),
                kind: PostKind::Video,
                created_date: movie_date,
                last_updated_date: movie_date,
                title: "Movie Marathon Night 🍿".to_string(),
                description: "Late night Harry Potter marathon. I fell asleep halfway through \
                              the 4th..."
                    .to_string(),
                media: vec![
                    "https://images.unsplash.com/photo-1536440136628-849c177e76a1".to_string(),
                ],
                location: None,
                likes: vec![me.id.clone()],
                comments: 0,
                hashtags: Vec::new(),
                responses: Vec::new(),
            },
        ];

        Self::new(profile, mood, posts)
    }

    pub fn profile(&self) -> CoupleProfile {
        self.inner.lock().profile.clone()
    }

    pub fn preferences(&self) -> CouplePreferences {
        self.inner.lock().profile.preferences
    }

    pub fn mood(&self) -> MoodStatus {
        self.inner.lock().mood.clone()
    }

    pub fn set_mood_note(&self, note: &str, author_id: &str) -> MoodStatus {
        let mut inner = self.inner.lock();
        inner.mood.note = note.to_string();
        inner.mood.author_id = author_id.to_string();
        inner.mood.last_updated_date = Utc::now();
        inner.mood.clone()
    }

    pub fn feed(&self) -> Vec<Post> {
        self.inner.lock().posts.clone()
    }

    pub fn get_post(&self, id: &str) -> DataResult<Post> {
        let inner = self.inner.lock();
        inner
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found(format!("post {id}")))
    }

    /// Assigns a fresh id and creation timestamp, then prepends so the feed
    /// stays most-recent-first.
    pub fn insert_post(&self, draft: PostDraft) -> Post {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4().to_string(),
            kind: draft.kind,
            created_date: now,
            last_updated_date: now,
            title: draft.title,
            description: draft.description,
            media: draft.media,
            location: draft.location,
            likes: Vec::new(),
            comments: 0,
            hashtags: draft.hashtags,
            responses: Vec::new(),
        };
        self.inner.lock().posts.insert(0, post.clone());
        post
    }

    pub fn merge_post(&self, id: &str, patch: PostPatch) -> DataResult<Post> {
        let mut inner = self.inner.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DataError::not_found(format!("post {id}")))?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(description) = patch.description {
            post.description = description;
        }
        if let Some(media) = patch.media {
            post.media = media;
        }
        if let Some(location) = patch.location {
            post.location = Some(location);
        }
        if let Some(hashtags) = patch.hashtags {
            post.hashtags = hashtags;
        }
        post.last_updated_date = patch.last_updated_date.unwrap_or_else(Utc::now);
        Ok(post.clone())
    }

    /// No-op when the id is already absent; repeat deletes are not an error.
    pub fn remove_post(&self, id: &str) {
        self.inner.lock().posts.retain(|p| p.id != id);
    }

    /// Set-toggles `user_id` in the post's likes and returns the new snapshot.
    pub fn toggle_like(&self, post_id: &str, user_id: &UserId) -> DataResult<Post> {
        let mut inner = self.inner.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| DataError::not_found(format!("post {post_id}")))?;

        if let Some(pos) = post.likes.iter().position(|id| id == user_id) {
            post.likes.remove(pos);
        } else {
            post.likes.push(user_id.clone());
        }
        post.last_updated_date = Utc::now();
        Ok(post.clone())
    }

    pub fn push_response(&self, post_id: &str, response: Response) -> DataResult<Response> {
        let mut inner = self.inner.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| DataError::not_found(format!("post {post_id}")))?;

        post.responses.push(response.clone());
        post.comments = post.responses.len() as u32;
        post.last_updated_date = Utc::now();
        Ok(response)
    }

    /// Removes by id without reordering survivors; no-op when either id is
    /// absent.
    pub fn remove_response(&self, post_id: &str, response_id: &str) {
        let mut inner = self.inner.lock();
        if let Some(post) = inner.posts.iter_mut().find(|p| p.id == post_id) {
            let before = post.responses.len();
            post.responses.retain(|r| r.id != response_id);
            if post.responses.len() != before {
                post.comments = post.responses.len() as u32;
                post.last_updated_date = Utc::now();
            }
        }
    }
}
