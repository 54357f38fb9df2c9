//! Data models for the building component catalog.
//!
//! This module contains the core data structures used throughout the application.
//! Models are plain data and independent of the repository and screen state.

pub mod category;
pub mod color;
pub mod detail;
pub mod item;

// Re-export all model types
pub use category::{Category, CategoryType};
pub use color::AccentColor;
pub use detail::{ExampleProject, ItemDetail, Specification, GENERAL_SPEC_GROUP};
pub use item::Item;
