pub mod item;
pub mod loader;
pub mod ordering;

#[cfg(test)]
mod tests;

pub use item::MemoryCard;
pub use loader::{HomeData, HomeLoader, LoadPhase};
