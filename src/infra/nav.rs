//! Navigation collaborator.
//!
//! The feed core triggers exactly one navigation: opening the post composer
//! pre-filled with an existing post for editing.

use crate::domain::Post;
use async_trait::async_trait;

#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigate to the composer with `draft` as the post being edited.
    async fn open_composer(&self, draft: Post);
}

/// CLI stand-in; a real shell would push the composer screen here.
pub struct LoggingNavigator;

#[async_trait]
impl Navigator for LoggingNavigator {
    async fn open_composer(&self, draft: Post) {
        log::info!("navigate: composer editing post {} ({})", draft.id, draft.title);
    }
}
