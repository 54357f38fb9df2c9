//! CLI command handlers for ArchieWiki.
//!
//! Each catalog command drives the same screen state holder the app would,
//! then prints the resulting state as text or JSON.

pub mod browse;
pub mod categories;
pub mod category;
pub mod check;
pub mod common;
pub mod config;
pub mod item;
pub mod popular;
pub mod search;

// Re-export types used by main.rs and tests
pub use browse::BrowseArgs;
pub use categories::CategoriesArgs;
pub use category::CategoryArgs;
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode, Session};
pub use config::ConfigArgs;
pub use item::ItemArgs;
pub use popular::PopularArgs;
pub use search::SearchArgs;
