use crate::application::feed::item::MemoryCard;
use crate::application::feed::loader::{HomeLoader, LoadPhase};
use crate::application::feed::ordering::*;
use crate::data::{DataAdapter, DataFacade, FeedStore, LatencyProfile, MockAdapter};
use crate::domain::*;
use crate::infra::dialog::{DialogChoice, DialogPresenter};
use crate::infra::nav::Navigator;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[test]
fn test_feed_in_display_order() {
    let mut early = Post::new_for_test("old");
    early.created_date = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let mut late = Post::new_for_test("new");
    late.created_date = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();

    let posts = [early, late];
    let ordered = feed_in_display_order(&posts);
    assert_eq!(ordered[0].id, "new");
    assert_eq!(ordered[1].id, "old");
}

#[test]
fn test_date_indicator() {
    let date = Utc.with_ymd_and_hms(2023, 10, 5, 12, 0, 0).unwrap();
    assert_eq!(date_indicator(&date), ("05".to_string(), "OCT".to_string()));
}

#[tokio::test]
async fn test_loader_reaches_ready_with_all_data() {
    let loader = HomeLoader::new(facade());
    assert!(matches!(loader.phase(), LoadPhase::Idle));

    loader.activate().await;

    match loader.phase() {
        LoadPhase::Ready(data) => {
            assert_eq!(data.profile.me.name, "Sarah");
            assert_eq!(data.feed.len(), 2);
            assert_eq!(data.mood.mood, "Missing you");
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn test_loader_update_mood_swaps_loaded_value() {
    let loader = HomeLoader::new(facade());
    loader.activate().await;

    let updated = loader.update_mood("Counting the days!").await.unwrap();
    assert_eq!(updated.note, "Counting the days!");

    match loader.phase() {
        LoadPhase::Ready(data) => assert_eq!(data.mood.note, "Counting the days!"),
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn test_loader_fails_whole_load_when_one_read_fails() {
    let adapter = Arc::new(BrokenProfileAdapter::new());
    let loader = HomeLoader::new(Arc::new(DataFacade::new(adapter)));

    loader.activate().await;

    // Mood and feed resolved fine, but the profile failure discards them:
    // the screen is Failed, never half-populated, and loading has ended.
    match loader.phase() {
        LoadPhase::Failed(message) => assert!(message.contains("profile service down")),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(!loader.phase().is_loading());
}

#[tokio::test]
async fn test_refresh_feed_picks_up_new_posts() {
    let facade = facade();
    let loader = HomeLoader::new(facade.clone());
    loader.activate().await;

    facade
        .create_post(PostDraft::new("Picnic", "", Vec::new()))
        .await
        .unwrap();
    loader.refresh_feed().await.unwrap();

    match loader.phase() {
        LoadPhase::Ready(data) => {
            assert_eq!(data.feed.len(), 3);
            assert_eq!(data.feed[0].title, "Picnic");
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn test_toggle_like_adopts_canonical_snapshot() {
    let (mut card, facade) = card_for("f2", &[]).await;
    // f2 starts liked by me (u1) only.
    assert_eq!(card.like_state(), LikeState::MeOnly);

    card.toggle_like().await.unwrap();
    assert_eq!(card.like_state(), LikeState::Neither);

    card.toggle_like().await.unwrap();
    assert_eq!(card.like_state(), LikeState::MeOnly);
    assert!(card.shower_visible());

    // The canonical store agrees with the optimistic view.
    let feed = facade.feed().await.unwrap();
    let post = feed.iter().find(|p| p.id == "f2").unwrap();
    assert!(post.liked_by("u1"));
}

#[tokio::test]
async fn test_blank_reply_is_a_no_op() {
    let (mut card, facade) = card_for("f2", &[]).await;
    card.set_reply_text("   \n  ");
    card.send_reply().await.unwrap();

    assert!(card.responses().is_empty());
    let feed = facade.feed().await.unwrap();
    assert!(feed.iter().find(|p| p.id == "f2").unwrap().responses.is_empty());
}

#[tokio::test]
async fn test_send_reply_persists_and_swaps_echo() {
    let (mut card, facade) = card_for("f2", &[]).await;
    card.set_reply_input_visible(true);
    card.set_reply_text("  Movie night part two? ");
    card.send_reply().await.unwrap();

    assert_eq!(card.responses().len(), 1);
    let local = &card.responses()[0];
    assert_eq!(local.message, "Movie night part two?");
    // The local echo id ("r-<millis>") was replaced by the stored id.
    assert!(!local.id.starts_with("r-"));
    assert!(card.reply_text().is_empty());
    assert!(!card.reply_input_visible());

    let feed = facade.feed().await.unwrap();
    let post = feed.iter().find(|p| p.id == "f2").unwrap();
    assert_eq!(post.responses.len(), 1);
    assert_eq!(post.responses[0].id, local.id);
    assert_eq!(post.comments, 1);
}

#[tokio::test]
async fn test_delete_response_cancel_leaves_everything() {
    // First dialog answer: 0 = Cancel.
    let (mut card, facade) = card_for("f1", &[0]).await;
    let kept = card.responses()[0].id.clone();

    let deleted = card.delete_response(&kept).await.unwrap();
    assert!(!deleted);
    assert_eq!(card.responses().len(), 1);

    let feed = facade.feed().await.unwrap();
    assert_eq!(feed.iter().find(|p| p.id == "f1").unwrap().responses.len(), 1);
}

#[tokio::test]
async fn test_delete_response_confirm_removes_by_id() {
    // 1 = Delete.
    let (mut card, facade) = card_for("f1", &[1]).await;
    let target = card.responses()[0].id.clone();

    let deleted = card.delete_response(&target).await.unwrap();
    assert!(deleted);
    assert!(card.responses().is_empty());

    let feed = facade.feed().await.unwrap();
    assert!(feed.iter().find(|p| p.id == "f1").unwrap().responses.is_empty());
}

#[tokio::test]
async fn test_menu_edit_opens_composer_with_draft() {
    let store = Arc::new(FeedStore::seeded());
    let facade = facade_over(store);
    let nav = Arc::new(RecordingNavigator::default());
    let dialogs = Arc::new(ScriptedDialogs::new(&[0])); // Edit
    let mut card = card_over(facade, nav.clone(), dialogs, "f1").await;

    card.menu().await.unwrap();

    let opened = nav.opened.lock().clone();
    assert_eq!(opened, vec!["f1".to_string()]);
}

#[tokio::test]
async fn test_menu_delete_requires_second_confirmation() {
    let store = Arc::new(FeedStore::seeded());
    let facade = facade_over(store);
    let nav = Arc::new(RecordingNavigator::default());
    // Menu: 1 = Delete, then confirmation: 0 = Cancel.
    let dialogs = Arc::new(ScriptedDialogs::new(&[1, 0]));
    let mut card = card_over(facade.clone(), nav, dialogs, "f1").await;

    card.menu().await.unwrap();
    assert_eq!(facade.feed().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_menu_delete_confirmed_removes_post() {
    let store = Arc::new(FeedStore::seeded());
    let facade = facade_over(store);
    let nav = Arc::new(RecordingNavigator::default());
    let dialogs = Arc::new(ScriptedDialogs::new(&[1, 1]));
    let mut card = card_over(facade.clone(), nav, dialogs.clone(), "f1").await;

    card.menu().await.unwrap();

    let feed = facade.feed().await.unwrap();
    assert_eq!(feed.len(), 1);
    assert!(feed.iter().all(|p| p.id != "f1"));
    assert_eq!(
        dialogs.notices.lock().as_slice(),
        &["Done: Memory deleted".to_string()]
    );
}

// Helpers

fn facade() -> Arc<DataFacade> {
    facade_over(Arc::new(FeedStore::seeded()))
}

fn facade_over(store: Arc<FeedStore>) -> Arc<DataFacade> {
    let actor = store.profile().me;
    let adapter = Arc::new(MockAdapter::with_latency(
        store,
        actor,
        LatencyProfile::none(),
    ));
    Arc::new(DataFacade::new(adapter))
}

async fn card_for(post_id: &str, answers: &[usize]) -> (MemoryCard, Arc<DataFacade>) {
    let facade = facade();
    let card = card_over(
        facade.clone(),
        Arc::new(RecordingNavigator::default()),
        Arc::new(ScriptedDialogs::new(answers)),
        post_id,
    )
    .await;
    (card, facade)
}

async fn card_over(
    facade: Arc<DataFacade>,
    nav: Arc<RecordingNavigator>,
    dialogs: Arc<ScriptedDialogs>,
    post_id: &str,
) -> MemoryCard {
    let profile = facade.profile().await.unwrap();
    let feed = facade.feed().await.unwrap();
    let post = feed.into_iter().find(|p| p.id == post_id).unwrap();
    MemoryCard::new(post, profile.me, profile.partner, facade, nav, dialogs)
}

/// Serves mood and feed from the seeded store but cannot load the profile.
struct BrokenProfileAdapter {
    inner: MockAdapter,
}

impl BrokenProfileAdapter {
    fn new() -> Self {
        let store = Arc::new(FeedStore::seeded());
        let actor = store.profile().me;
        Self {
            inner: MockAdapter::with_latency(store, actor, LatencyProfile::none()),
        }
    }
}

#[async_trait]
impl DataAdapter for BrokenProfileAdapter {
    async fn get_couple_profile(&self) -> DataResult<CoupleProfile> {
        Err(DataError::Transient(anyhow!("profile service down")))
    }

    async fn get_mood_status(&self) -> DataResult<MoodStatus> {
        self.inner.get_mood_status().await
    }

    async fn update_mood(&self, note: &str) -> DataResult<MoodStatus> {
        self.inner.update_mood(note).await
    }

    async fn get_feed(&self) -> DataResult<Vec<Post>> {
        self.inner.get_feed().await
    }

    async fn create_post(&self, draft: PostDraft) -> DataResult<Post> {
        self.inner.create_post(draft).await
    }

    async fn update_post(&self, id: &str, patch: PostPatch) -> DataResult<Post> {
        self.inner.update_post(id, patch).await
    }

    async fn toggle_like(&self, post_id: &str) -> DataResult<Post> {
        self.inner.toggle_like(post_id).await
    }

    async fn delete_post(&self, id: &str) -> DataResult<()> {
        self.inner.delete_post(id).await
    }

    async fn add_response(&self, post_id: &str, message: &str) -> DataResult<Response> {
        self.inner.add_response(post_id, message).await
    }

    async fn delete_response(&self, post_id: &str, response_id: &str) -> DataResult<()> {
        self.inner.delete_response(post_id, response_id).await
    }
}

#[derive(Default)]
struct RecordingNavigator {
    opened: Mutex<Vec<PostId>>,
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn open_composer(&self, draft: Post) {
        self.opened.lock().push(draft.id);
    }
}

struct ScriptedDialogs {
    answers: Mutex<VecDeque<usize>>,
    notices: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    fn new(answers: &[usize]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            notices: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DialogPresenter for ScriptedDialogs {
    async fn present(&self, _title: &str, _message: &str, choices: &[DialogChoice]) -> usize {
        let answer = self.answers.lock().pop_front();
        answer.unwrap_or_else(|| {
            choices
                .iter()
                .position(|c| c.style == crate::infra::dialog::ChoiceStyle::Cancel)
                .unwrap_or(0)
        })
    }

    async fn notify(&self, title: &str, message: &str) {
        self.notices.lock().push(format!("{title}: {message}"));
    }
}
