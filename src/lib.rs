//! ArchieWiki Library
//!
//! This library provides the data layer of the ArchieWiki building
//! architecture catalog: the embedded catalog and its queries, an
//! asynchronous repository facade, and the per-screen state holders that
//! the CLI drives.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod repository;
pub mod state;
