//! Data-loading coordinator for the home screen.
//!
//! On activation, profile, mood, and feed are fetched concurrently and the
//! loading phase ends only when all three have resolved. A failure in any of
//! them discards the partial results so the screen is never half-populated.

use crate::data::DataFacade;
use crate::domain::{CoupleProfile, DataResult, MoodStatus, Post};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct HomeData {
    pub profile: CoupleProfile,
    pub mood: MoodStatus,
    pub feed: Vec<Post>,
}

#[derive(Debug, Clone, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready(HomeData),
    Failed(String),
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}

pub struct HomeLoader {
    facade: Arc<DataFacade>,
    phase: RwLock<LoadPhase>,
}

impl HomeLoader {
    pub fn new(facade: Arc<DataFacade>) -> Self {
        Self {
            facade,
            phase: RwLock::new(LoadPhase::Idle),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase.read().clone()
    }

    /// Load everything the home screen needs. Loading ends on both success
    /// and failure; there is no retry and no timeout.
    pub async fn activate(&self) {
        *self.phase.write() = LoadPhase::Loading;

        let result = tokio::try_join!(
            self.facade.profile(),
            self.facade.mood(),
            self.facade.feed(),
        );

        *self.phase.write() = match result {
            Ok((profile, mood, feed)) => LoadPhase::Ready(HomeData {
                profile,
                mood,
                feed,
            }),
            Err(err) => {
                log::error!("Failed to load home data: {err}");
                LoadPhase::Failed(err.to_string())
            }
        };
    }

    /// Re-read the feed into an already loaded screen, e.g. after a post was
    /// created or deleted. A failure keeps the current data on screen.
    pub async fn refresh_feed(&self) -> DataResult<()> {
        let feed = self.facade.feed().await?;
        if let LoadPhase::Ready(data) = &mut *self.phase.write() {
            data.feed = feed;
        }
        Ok(())
    }

    /// Update the mood note and swap the fresh value into the loaded state.
    /// A failure here leaves already-loaded feed/profile untouched.
    pub async fn update_mood(&self, note: &str) -> DataResult<MoodStatus> {
        let mood = self.facade.update_mood(note).await?;
        if let LoadPhase::Ready(data) = &mut *self.phase.write() {
            data.mood = mood.clone();
        }
        Ok(mood)
    }
}
