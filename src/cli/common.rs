//! Shared plumbing for CLI commands: exit codes, errors, and the session
//! every catalog command runs against.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{CategoryType, Item};
use crate::repository::{CatalogRepository, RepositoryError};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input, unknown id, or a failed check
    ValidationError = 1,
    /// I/O or internal failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code handed to the operating system.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned by a CLI command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or a failed check.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// A looked-up id does not exist.
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::validation(format!("{kind} '{id}' not found"))
    }

    /// I/O or internal failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { kind, id } => Self::not_found(kind, &id),
            RepositoryError::OperationFailed(message) => Self::io(message),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Configuration and repository shared by the catalog commands.
pub struct Session {
    /// Effective configuration
    pub config: Config,
    /// Repository over the embedded catalog
    pub repository: Arc<CatalogRepository>,
}

impl Session {
    /// Loads configuration and the embedded catalog.
    ///
    /// An unreadable config file falls back to the defaults with a warning.
    pub fn open() -> CliResult<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            warn!("Using default configuration: {e:#}");
            Config::default()
        });
        Self::with_config(config)
    }

    /// Builds a session from an explicit configuration.
    pub fn with_config(config: Config) -> CliResult<Self> {
        let catalog =
            Catalog::load().map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;
        debug!(
            delay_ms = config.repository.delay_ms,
            debounce_ms = config.search.debounce_ms,
            "session opened"
        );

        let repository = Arc::new(CatalogRepository::from_config(Arc::new(catalog), &config));
        Ok(Self { config, repository })
    }

    /// The embedded catalog, for synchronous existence checks.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.repository.catalog()
    }
}

/// Parses a category id given on the command line.
pub fn parse_category(id: &str) -> CliResult<CategoryType> {
    CategoryType::from_id(id).ok_or_else(|| {
        let valid: Vec<&str> = CategoryType::ALL.iter().map(|c| c.id()).collect();
        CliError::validation(format!(
            "Unknown category '{id}'. Valid categories: {}",
            valid.join(", ")
        ))
    })
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Prints one aligned line per item; popular items carry a star.
pub fn print_item_rows(items: &[Item]) {
    for item in items {
        let marker = if item.is_popular { "*" } else { " " };
        println!(
            "  {marker} {:<22} {:<30} {}",
            item.id,
            item.name,
            item.category.display_name()
        );
    }
}
