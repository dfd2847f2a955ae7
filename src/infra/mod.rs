//! Infrastructure layer (adapters/implementations).
//!
//! Collaborator seams the feed core calls out through: confirmation dialogs,
//! navigation, and the on-disk app config.

pub mod app_config;
pub mod dialog;
pub mod nav;
