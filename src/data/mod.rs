//! Data layer - canonical in-memory store, mock adapter, and cached facade

mod adapter;
mod facade;
mod store;

pub use adapter::{DataAdapter, LatencyProfile, MockAdapter};
pub use facade::DataFacade;
pub use store::FeedStore;
