//! Per-post state machine backing a memory card.
//!
//! Each rendered post gets one `MemoryCard`. It owns the transient UI state
//! (optimistic like set, reply draft, dialog-driven flows) and reconciles it
//! with the canonical store through the facade. Optimistic mutations are
//! tentative: every one of them is rolled back when the adapter call fails.

use crate::data::DataFacade;
use crate::domain::{
    DataResult, LikeBadge, LikeState, Post, Response, User, UserId, like_badge,
};
use crate::infra::dialog::{DialogChoice, DialogPresenter};
use crate::infra::nav::Navigator;
use chrono::Utc;
use std::sync::Arc;

pub struct MemoryCard {
    post: Post,
    me: User,
    partner: User,
    facade: Arc<DataFacade>,
    nav: Arc<dyn Navigator>,
    dialogs: Arc<dyn DialogPresenter>,

    responses: Vec<Response>,
    likes: Vec<UserId>,
    show_reply_input: bool,
    reply_text: String,
    /// Celebratory heart-shower trigger; display-only, never persisted.
    shower_visible: bool,
}

impl MemoryCard {
    pub fn new(
        post: Post,
        me: User,
        partner: User,
        facade: Arc<DataFacade>,
        nav: Arc<dyn Navigator>,
        dialogs: Arc<dyn DialogPresenter>,
    ) -> Self {
        let responses = post.responses.clone();
        let likes = post.likes.clone();
        Self {
            post,
            me,
            partner,
            facade,
            nav,
            dialogs,
            responses,
            likes,
            show_reply_input: false,
            reply_text: String::new(),
            shower_visible: false,
        }
    }

    /// Replace local state when the parent post reference changes, e.g.
    /// after a feed reload handed this card a fresh snapshot.
    pub fn sync_from(&mut self, post: &Post) {
        self.responses = post.responses.clone();
        self.likes = post.likes.clone();
        self.post = post.clone();
    }

    pub fn post_id(&self) -> &str {
        &self.post.id
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn likes(&self) -> &[UserId] {
        &self.likes
    }

    pub fn reply_input_visible(&self) -> bool {
        self.show_reply_input
    }

    pub fn set_reply_input_visible(&mut self, visible: bool) {
        self.show_reply_input = visible;
    }

    pub fn reply_text(&self) -> &str {
        &self.reply_text
    }

    pub fn set_reply_text(&mut self, text: impl Into<String>) {
        self.reply_text = text.into();
    }

    pub fn shower_visible(&self) -> bool {
        self.shower_visible
    }

    pub fn dismiss_shower(&mut self) {
        self.shower_visible = false;
    }

    fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    pub fn like_state(&self) -> LikeState {
        LikeState::from_flags(self.liked_by(&self.me.id), self.liked_by(&self.partner.id))
    }

    /// Label/icon/color for the like row, derived purely from who liked.
    pub fn like_badge(&self) -> LikeBadge {
        like_badge(self.like_state(), &self.partner.name)
    }

    /// Optimistically flip my like before the adapter confirms it. On
    /// success the canonical snapshot is adopted; on failure the flip is
    /// reverted and the error surfaced to the caller.
    pub async fn toggle_like(&mut self) -> DataResult<()> {
        let was_liked = self.liked_by(&self.me.id);
        if was_liked {
            self.likes.retain(|id| id != &self.me.id);
        } else {
            self.likes.push(self.me.id.clone());
            self.shower_visible = true;
        }

        match self.facade.toggle_like(&self.post.id).await {
            Ok(snapshot) => {
                self.likes = snapshot.likes.clone();
                self.post = snapshot;
                Ok(())
            }
            Err(err) => {
                if was_liked {
                    self.likes.push(self.me.id.clone());
                } else {
                    self.likes.retain(|id| id != &self.me.id);
                    self.shower_visible = false;
                }
                log::warn!("Like toggle failed for post {}: {err}", self.post.id);
                Err(err)
            }
        }
    }

    /// Submit the current reply draft. Blank/whitespace drafts are a no-op
    /// with no adapter call. The reply is echoed locally first, then
    /// persisted; the echo is swapped for the stored response on success and
    /// removed on failure.
    pub async fn send_reply(&mut self) -> DataResult<()> {
        let message = self.reply_text.trim().to_string();
        if message.is_empty() {
            return Ok(());
        }

        let echo = Response {
            id: format!("r-{}", Utc::now().timestamp_millis()),
            user_id: self.me.id.clone(),
            user_name: self.me.name.clone(),
            created_date: Utc::now(),
            message: message.clone(),
        };
        let echo_id = echo.id.clone();
        self.responses.push(echo);
        self.reply_text.clear();
        self.show_reply_input = false;

        match self.facade.add_response(&self.post.id, &message).await {
            Ok(stored) => {
                if let Some(slot) = self.responses.iter_mut().find(|r| r.id == echo_id) {
                    *slot = stored;
                }
                Ok(())
            }
            Err(err) => {
                self.responses.retain(|r| r.id != echo_id);
                log::warn!("Reply send failed for post {}: {err}", self.post.id);
                Err(err)
            }
        }
    }

    /// Confirmed delete of one reply. The local list is mutated only after
    /// the adapter reports success. Returns whether the reply was deleted.
    pub async fn delete_response(&mut self, response_id: &str) -> DataResult<bool> {
        let taken = self
            .dialogs
            .present(
                "Delete Reply",
                "Are you sure you want to delete this reply?",
                &[
                    DialogChoice::cancel("Cancel"),
                    DialogChoice::destructive("Delete"),
                ],
            )
            .await;
        if taken != 1 {
            return Ok(false);
        }

        self.facade
            .delete_response(&self.post.id, response_id)
            .await?;
        self.responses.retain(|r| r.id != response_id);
        Ok(true)
    }

    /// The "..." menu: edit navigates to the composer with this post as the
    /// draft; delete runs a second destructive confirmation and then removes
    /// the post. Removal from the visible feed is left to the next feed
    /// reload.
    pub async fn menu(&mut self) -> DataResult<()> {
        let taken = self
            .dialogs
            .present(
                "Memory Actions",
                "What would you like to do?",
                &[
                    DialogChoice::plain("Edit"),
                    DialogChoice::destructive("Delete"),
                    DialogChoice::cancel("Cancel"),
                ],
            )
            .await;

        match taken {
            0 => {
                self.nav.open_composer(self.post.clone()).await;
                Ok(())
            }
            1 => self.confirm_delete_post().await,
            _ => Ok(()),
        }
    }

    async fn confirm_delete_post(&mut self) -> DataResult<()> {
        let taken = self
            .dialogs
            .present(
                "Delete Memory",
                "Are you sure you want to delete this memory?",
                &[
                    DialogChoice::cancel("Cancel"),
                    DialogChoice::destructive("Delete"),
                ],
            )
            .await;
        if taken != 1 {
            return Ok(());
        }

        self.facade.delete_post(&self.post.id).await?;
        self.dialogs.notify("Done", "Memory deleted").await;
        Ok(())
    }
}
