//! Confirmation/alert collaborator.
//!
//! The feed controller presents a title, a message, and a set of labeled
//! choices with at most one marked destructive; the presenter resolves to
//! exactly one choice.

use async_trait::async_trait;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoiceStyle {
    #[default]
    Default,
    Destructive,
    Cancel,
}

#[derive(Debug, Clone)]
pub struct DialogChoice {
    pub label: String,
    pub style: ChoiceStyle,
}

impl DialogChoice {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ChoiceStyle::Default,
        }
    }

    pub fn destructive(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ChoiceStyle::Destructive,
        }
    }

    pub fn cancel(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ChoiceStyle::Cancel,
        }
    }
}

#[async_trait]
pub trait DialogPresenter: Send + Sync {
    /// Present the choices and resolve to the index of the one taken.
    async fn present(&self, title: &str, message: &str, choices: &[DialogChoice]) -> usize;

    /// Plain acknowledgment notice with a single dismiss action.
    async fn notify(&self, title: &str, message: &str);
}

/// Terminal presenter used by the CLI binary.
pub struct ConsoleDialogs;

#[async_trait]
impl DialogPresenter for ConsoleDialogs {
    async fn present(&self, title: &str, message: &str, choices: &[DialogChoice]) -> usize {
        println!("\n{title}\n{message}");
        for (i, choice) in choices.iter().enumerate() {
            let marker = match choice.style {
                ChoiceStyle::Destructive => " (destructive)",
                _ => "",
            };
            println!("  [{i}] {}{marker}", choice.label);
        }
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return cancel_index(choices);
        }
        match line.trim().parse::<usize>() {
            Ok(i) if i < choices.len() => i,
            _ => cancel_index(choices),
        }
    }

    async fn notify(&self, title: &str, message: &str) {
        println!("\n{title}: {message}");
    }
}

fn cancel_index(choices: &[DialogChoice]) -> usize {
    choices
        .iter()
        .position(|c| c.style == ChoiceStyle::Cancel)
        .unwrap_or(choices.len().saturating_sub(1))
}
