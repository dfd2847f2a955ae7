//! Single process-wide entry point for data access.
//!
//! Wraps whichever adapter backs the app and memoizes the two singleton
//! reads (profile, mood). The first read triggers the adapter call; later
//! reads return the memoized value, and concurrent first reads share one
//! in-flight fetch. Feed reads are deliberately not cached and hit the
//! adapter every time.

use crate::data::adapter::DataAdapter;
use crate::domain::{
    CoupleProfile, DataResult, MoodStatus, Post, PostDraft, PostPatch, Response,
};
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

pub struct DataFacade {
    adapter: Arc<dyn DataAdapter>,
    profile_cache: OnceCell<CoupleProfile>,
    mood_cache: Mutex<Option<MoodStatus>>,
}

impl DataFacade {
    pub fn new(adapter: Arc<dyn DataAdapter>) -> Self {
        Self {
            adapter,
            profile_cache: OnceCell::new(),
            mood_cache: Mutex::new(None),
        }
    }

    /// Memoized after the first successful read. A failed fetch leaves the
    /// cell empty, so the next caller retries.
    pub async fn profile(&self) -> DataResult<CoupleProfile> {
        self.profile_cache
            .get_or_try_init(|| self.adapter.get_couple_profile())
            .await
            .cloned()
    }

    /// Memoized like `profile`; the async lock is held across the fetch so
    /// concurrent first readers resolve from a single adapter call.
    pub async fn mood(&self) -> DataResult<MoodStatus> {
        let mut cached = self.mood_cache.lock().await;
        if let Some(mood) = cached.as_ref() {
            return Ok(mood.clone());
        }
        let fresh = self.adapter.get_mood_status().await?;
        *cached = Some(fresh.clone());
        Ok(fresh)
    }

    /// Replaces the mood cache with the adapter's result, so subsequent
    /// reads see the fresh value without re-fetching.
    pub async fn update_mood(&self, note: &str) -> DataResult<MoodStatus> {
        let mut cached = self.mood_cache.lock().await;
        let updated = self.adapter.update_mood(note).await?;
        *cached = Some(updated.clone());
        Ok(updated)
    }

    /// Always re-fetched; the feed changes too often to memoize safely.
    pub async fn feed(&self) -> DataResult<Vec<Post>> {
        self.adapter.get_feed().await
    }

    pub async fn create_post(&self, draft: PostDraft) -> DataResult<Post> {
        self.adapter.create_post(draft).await
    }

    pub async fn update_post(&self, id: &str, patch: PostPatch) -> DataResult<Post> {
        self.adapter.update_post(id, patch).await
    }

    pub async fn toggle_like(&self, post_id: &str) -> DataResult<Post> {
        self.adapter.toggle_like(post_id).await
    }

    pub async fn delete_post(&self, id: &str) -> DataResult<()> {
        self.adapter.delete_post(id).await
    }

    pub async fn add_response(&self, post_id: &str, message: &str) -> DataResult<Response> {
        self.adapter.add_response(post_id, message).await
    }

    pub async fn delete_response(&self, post_id: &str, response_id: &str) -> DataResult<()> {
        self.adapter.delete_response(post_id, response_id).await
    }
}
