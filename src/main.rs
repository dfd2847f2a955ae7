//! DailyUs CLI entry point.
//!
//! A terminal front for the feed core: browse the shared memory feed, like
//! and reply to posts, and update the couple mood, all against the seeded
//! mock backend.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use dailyus::application::feed::{HomeLoader, LoadPhase, MemoryCard};
use dailyus::application::feed::ordering::{date_indicator, feed_in_display_order};
use dailyus::domain::PostDraft;
use dailyus::infra::app_config::load_config;
use dailyus::infra::dialog::ConsoleDialogs;
use dailyus::infra::nav::LoggingNavigator;
use dailyus::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "dailyus")]
#[command(about = "Couple journal feed over a mock backend", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and print the home screen: mood, then memories newest-first
    Feed,

    /// Toggle your like on a post
    Like {
        /// Post id (e.g. f1)
        post_id: String,
    },

    /// Reply to a post
    Reply {
        /// Post id
        post_id: String,
        /// Reply text
        message: String,
    },

    /// Update the couple mood note
    Mood {
        /// New mood note
        note: String,
    },

    /// Create a new memory post
    Create {
        /// Post title
        title: String,
        /// Post description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Media URLs in display order
        #[arg(short, long)]
        media: Vec<String>,
    },

    /// Delete a post (asks for confirmation)
    Delete {
        /// Post id
        post_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let state = AppState::new(load_config());
    let loader = HomeLoader::new(state.facade.clone());

    match args.command {
        Commands::Feed => {
            loader.activate().await;
            match loader.phase() {
                LoadPhase::Ready(data) => {
                    println!(
                        "{} & {} — {} days together",
                        data.profile.me.name, data.profile.partner.name, data.profile.days_together
                    );
                    println!("Mood: {} — {}\n", data.mood.mood, data.mood.note);
                    for post in feed_in_display_order(&data.feed) {
                        let (day, month) = date_indicator(&post.created_date);
                        let card = MemoryCard::new(
                            post.clone(),
                            data.profile.me.clone(),
                            data.profile.partner.clone(),
                            state.facade.clone(),
                            Arc::new(LoggingNavigator),
                            Arc::new(ConsoleDialogs),
                        );
                        println!("[{day} {month}] {}  ({})", post.title, post.id);
                        if !post.description.is_empty() {
                            println!("    {}", post.description);
                        }
                        println!("    {}", card.like_badge().label);
                        for response in card.responses() {
                            println!("    ↳ {}: {}", response.user_name, response.message);
                        }
                        println!();
                    }
                }
                LoadPhase::Failed(message) => return Err(anyhow!(message)),
                _ => unreachable!("activate always leaves the loading phase"),
            }
        }
        Commands::Like { post_id } => {
            let mut card = card(&state, post_id).await?;
            card.toggle_like().await?;
            println!("{}", card.like_badge().label);
        }
        Commands::Reply { post_id, message } => {
            if message.trim().is_empty() {
                return Err(anyhow!("reply text must not be blank"));
            }
            let mut card = card(&state, post_id).await?;
            card.set_reply_text(message);
            card.send_reply().await?;
            println!("Reply sent ({} total)", card.responses().len());
        }
        Commands::Mood { note } => {
            let mood = state.facade.update_mood(&note).await?;
            println!("Mood updated at {}: {}", mood.last_updated_date, mood.note);
        }
        Commands::Create {
            title,
            description,
            media,
        } => {
            let post = state
                .facade
                .create_post(PostDraft::new(title, description, media))
                .await?;
            println!("Created {} post {}", post.kind, post.id);
        }
        Commands::Delete { post_id } => {
            let mut card = card(&state, post_id).await?;
            card.menu().await?;
        }
    }

    Ok(())
}

async fn card(state: &AppState, post_id: String) -> Result<MemoryCard> {
    let profile = state.facade.profile().await?;
    let feed = state.facade.feed().await?;
    let post = feed
        .into_iter()
        .find(|p| p.id == post_id)
        .ok_or_else(|| anyhow!("no post with id {post_id}"))?;
    Ok(MemoryCard::new(
        post,
        profile.me,
        profile.partner,
        state.facade.clone(),
        Arc::new(LoggingNavigator),
        Arc::new(ConsoleDialogs),
    ))
}
