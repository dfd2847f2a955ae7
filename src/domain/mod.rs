//! Domain types for the DailyUs application
//! Defines the core data structures and business objects used throughout the application.

pub mod error;
pub mod likes;
pub mod mood;
pub mod post;
pub mod user;

pub use error::*;
pub use likes::*;
pub use mood::*;
pub use post::*;
pub use user::*;
