//! Application layer (use-cases, policies).
//!
//! This module orchestrates domain logic and defines app-specific policies
//! without depending on UI frameworks or storage.

pub mod feed;
