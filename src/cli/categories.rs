//! `categories` command: the home screen's category list.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult, Session};
use crate::models::Category;
use crate::state::{HomeState, LoadState};

/// List all building component categories
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
    count: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub async fn execute(&self, session: &Session) -> CliResult<()> {
        let home = HomeState::new(session.repository.clone());
        home.load().await;

        if let LoadState::Error(message) = home.status().get() {
            return Err(CliError::io(format!("Failed to load categories: {message}")));
        }

        let categories = home.categories().get();
        let response = CategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            return print_json(&response);
        }

        if response.count == 0 {
            println!("No categories available.");
            return Ok(());
        }

        println!("Categories ({}):", response.count);
        println!();
        for category in &response.categories {
            println!(
                "  {:<16} {:<18} {:>3} items  {}  {}",
                category.id,
                category.name,
                category.item_count,
                category.color,
                category.summary()
            );
        }

        Ok(())
    }
}
