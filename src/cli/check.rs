//! `check` command: catalog integrity report.

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::catalog::IntegrityIssue;
use crate::cli::common::{print_json, CliError, CliResult, Session};

/// Check the catalog for dangling references and count mismatches
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    version: String,
    categories: usize,
    items: usize,
    valid: bool,
    issues: Vec<IntegrityIssue>,
}

impl CheckArgs {
    /// Execute the check command
    ///
    /// Exits with a validation error when any issue is found.
    pub fn execute(&self, session: &Session) -> CliResult<()> {
        let catalog = session.catalog();
        let issues = catalog.integrity_report();
        for issue in &issues {
            warn!("Catalog integrity: {issue}");
        }

        let response = CheckResponse {
            version: catalog.version().to_string(),
            categories: catalog.category_count(),
            items: catalog.item_count(),
            valid: issues.is_empty(),
            issues,
        };

        if self.json {
            print_json(&response)?;
        } else {
            println!(
                "Catalog {}: {} categories, {} items",
                response.version, response.categories, response.items
            );
            if response.valid {
                println!("No integrity issues found.");
            } else {
                println!();
                for issue in &response.issues {
                    println!("  - {issue}");
                }
            }
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "{} integrity issue(s) found",
                response.issues.len()
            )))
        }
    }
}
