//! Derived like-status display logic.
//!
//! Lives here once, as a pure function of who liked the post, so every card
//! variant renders the same row.

use serde::{Deserialize, Serialize};

/// The four possible like memberships for a two-person journal.
/// Mutually exclusive and exhaustive over the 2x2 space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeState {
    Both,
    MeOnly,
    PartnerOnly,
    Neither,
}

impl LikeState {
    pub fn from_flags(liked_by_me: bool, liked_by_partner: bool) -> Self {
        match (liked_by_me, liked_by_partner) {
            (true, true) => Self::Both,
            (true, false) => Self::MeOnly,
            (false, true) => Self::PartnerOnly,
            (false, false) => Self::Neither,
        }
    }
}

/// Label, icon name, and color for the like row under a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeBadge {
    pub label: String,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Derive the like row for a card given the partner's display name.
pub fn like_badge(state: LikeState, partner_name: &str) -> LikeBadge {
    match state {
        LikeState::Both => LikeBadge {
            label: format!("You and {partner_name} liked this"),
            icon: "heart-circle",
            color: "#e11d48",
        },
        LikeState::MeOnly => LikeBadge {
            label: "You liked this".to_string(),
            icon: "heart",
            color: "#ef4444",
        },
        LikeState::PartnerOnly => LikeBadge {
            label: format!("{partner_name} liked this"),
            icon: "heart",
            color: "#f472b6",
        },
        LikeState::Neither => LikeBadge {
            label: "Be the first to like this".to_string(),
            icon: "heart-outline",
            color: "#9ca3af",
        },
    }
}
