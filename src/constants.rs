//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default timing values.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ArchieWiki";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "archiewiki";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ArchieWiki";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ARCHIEWIKI_CONFIG_DIR";

/// Default artificial latency added to every repository query, in milliseconds.
pub const DEFAULT_REPOSITORY_DELAY_MS: u64 = 300;

/// Default pause after the last keystroke before a search is dispatched, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Default number of recent searches kept.
pub const DEFAULT_MAX_RECENT_SEARCHES: usize = 10;

/// Upper bound accepted for any configured delay, in milliseconds.
pub const MAX_CONFIGURED_DELAY_MS: u64 = 10_000;

/// Generic message shown when a failure carries no detail.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
