//! Data access adapter simulating a remote backend.
//!
//! All operations are asynchronous and safe to call concurrently for
//! different entities. The mock implementation sleeps to stand in for
//! network variance; the delays can be turned off for tests.

use crate::data::store::FeedStore;
use crate::domain::{
    CoupleProfile, DataError, DataResult, MoodStatus, Post, PostDraft, PostPatch, Response, User,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Simulated latencies per operation class.
#[derive(Debug, Clone, Copy)]
pub struct LatencyProfile {
    pub profile: Duration,
    pub mood: Duration,
    pub feed: Duration,
    pub mutation: Duration,
}

impl LatencyProfile {
    /// Delays roughly matching a mobile network round trip.
    pub fn realistic() -> Self {
        Self {
            profile: Duration::from_millis(500),
            mood: Duration::from_millis(300),
            feed: Duration::from_millis(800),
            mutation: Duration::from_millis(400),
        }
    }

    /// No delays; calls stay genuinely asynchronous.
    pub fn none() -> Self {
        Self {
            profile: Duration::ZERO,
            mood: Duration::ZERO,
            feed: Duration::ZERO,
            mutation: Duration::ZERO,
        }
    }
}

/// The method surface UI code talks to, regardless of backend.
#[async_trait]
pub trait DataAdapter: Send + Sync {
    async fn get_couple_profile(&self) -> DataResult<CoupleProfile>;
    async fn get_mood_status(&self) -> DataResult<MoodStatus>;
    /// Overwrites the mood note and refreshes its timestamp.
    async fn update_mood(&self, note: &str) -> DataResult<MoodStatus>;
    /// Insertion order, most-recent-first.
    async fn get_feed(&self) -> DataResult<Vec<Post>>;
    async fn create_post(&self, draft: PostDraft) -> DataResult<Post>;
    async fn update_post(&self, id: &str, patch: PostPatch) -> DataResult<Post>;
    /// Set-toggle of the acting user's like; returns the new snapshot.
    async fn toggle_like(&self, post_id: &str) -> DataResult<Post>;
    /// No-op when the post is already absent.
    async fn delete_post(&self, id: &str) -> DataResult<()>;
    /// Appends a reply authored by the acting user.
    async fn add_response(&self, post_id: &str, message: &str) -> DataResult<Response>;
    /// No-op when either id is absent.
    async fn delete_response(&self, post_id: &str, response_id: &str) -> DataResult<()>;
}

/// In-memory adapter over the canonical store, acting as a single signed-in
/// user.
pub struct MockAdapter {
    store: Arc<FeedStore>,
    actor: User,
    latency: LatencyProfile,
}

impl MockAdapter {
    pub fn new(store: Arc<FeedStore>, actor: User) -> Self {
        Self::with_latency(store, actor, LatencyProfile::realistic())
    }

    pub fn with_latency(store: Arc<FeedStore>, actor: User, latency: LatencyProfile) -> Self {
        Self {
            store,
            actor,
            latency,
        }
    }

    async fn simulate(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn validate_draft(&self, title: &str, description: &str, media_len: usize) -> DataResult<()> {
        if title.trim().is_empty() {
            return Err(DataError::validation("title must not be blank"));
        }
        let prefs = self.store.preferences();
        if media_len > prefs.max_images_per_post {
            return Err(DataError::validation(format!(
                "at most {} images per post",
                prefs.max_images_per_post
            )));
        }
        if description.chars().count() > prefs.max_description_length {
            return Err(DataError::validation(format!(
                "description longer than {} characters",
                prefs.max_description_length
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DataAdapter for MockAdapter {
    async fn get_couple_profile(&self) -> DataResult<CoupleProfile> {
        self.simulate(self.latency.profile).await;
        Ok(self.store.profile())
    }

    async fn get_mood_status(&self) -> DataResult<MoodStatus> {
        self.simulate(self.latency.mood).await;
        Ok(self.store.mood())
    }

    async fn update_mood(&self, note: &str) -> DataResult<MoodStatus> {
        self.simulate(self.latency.mutation).await;
        Ok(self.store.set_mood_note(note, &self.actor.id))
    }

    async fn get_feed(&self) -> DataResult<Vec<Post>> {
        self.simulate(self.latency.feed).await;
        Ok(self.store.feed())
    }

    async fn create_post(&self, draft: PostDraft) -> DataResult<Post> {
        self.simulate(self.latency.mutation).await;
        self.validate_draft(&draft.title, &draft.description, draft.media.len())?;
        Ok(self.store.insert_post(draft))
    }

    async fn update_post(&self, id: &str, patch: PostPatch) -> DataResult<Post> {
        self.simulate(self.latency.mutation).await;
        let current = self.store.get_post(id)?;
        let title = patch.title.as_deref().unwrap_or(&current.title);
        let description = patch.description.as_deref().unwrap_or(&current.description);
        let media_len = patch
            .media
            .as_ref()
            .map(|m| m.len())
            .unwrap_or(current.media.len());
        self.validate_draft(title, description, media_len)?;
        self.store.merge_post(id, patch)
    }

    async fn toggle_like(&self, post_id: &str) -> DataResult<Post> {
        self.simulate(self.latency.mutation).await;
        self.store.toggle_like(post_id, &self.actor.id)
    }

    async fn delete_post(&self, id: &str) -> DataResult<()> {
        self.simulate(self.latency.mutation).await;
        self.store.remove_post(id);
        Ok(())
    }

    async fn add_response(&self, post_id: &str, message: &str) -> DataResult<Response> {
        self.simulate(self.latency.mutation).await;
        let message = message.trim();
        if message.is_empty() {
            return Err(DataError::validation("reply must not be blank"));
        }
        let response = Response {
            id: Uuid::new_v4().to_string(),
            user_id: self.actor.id.clone(),
            user_name: self.actor.name.clone(),
            created_date: Utc::now(),
            message: message.to_string(),
        };
        self.store.push_response(post_id, response)
    }

    async fn delete_response(&self, post_id: &str, response_id: &str) -> DataResult<()> {
        self.simulate(self.latency.mutation).await;
        self.store.remove_response(post_id, response_id);
        Ok(())
    }
}
