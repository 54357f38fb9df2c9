//! `category` command: items in one category.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_item_rows, print_json, CliError, CliResult, Session};
use crate::models::{Category, Item};
use crate::state::{CategoryState, LoadState};

/// Show a category and its items
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Category ID (e.g., walls, windows_doors)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Only show popular items
    #[arg(long)]
    pub popular: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryResponse {
    category: Category,
    popular_only: bool,
    item_count: usize,
    popular_count: usize,
    items: Vec<Item>,
}

impl CategoryArgs {
    /// Execute the category command
    pub async fn execute(&self, session: &Session) -> CliResult<()> {
        if session.catalog().category_by_id(&self.id).is_none() {
            return Err(CliError::not_found("Category", &self.id));
        }

        let state = CategoryState::new(session.repository.clone());
        state.load(&self.id).await;
        if self.popular {
            state.toggle_popular_only();
        }

        if let LoadState::Error(message) = state.status().get() {
            return Err(CliError::io(format!("Failed to load category: {message}")));
        }
        let Some(category) = state.category().get() else {
            return Err(CliError::not_found("Category", &self.id));
        };

        let response = CategoryResponse {
            category,
            popular_only: state.show_popular_only().get(),
            item_count: state.item_count(),
            popular_count: state.popular_count(),
            items: state.filtered_items().get(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("{} ({})", response.category.name, response.category.id);
        println!("{}", response.category.description);
        println!();
        println!(
            "{} items, {} popular",
            response.item_count, response.popular_count
        );
        println!();

        if response.items.is_empty() {
            if response.popular_only && response.item_count > 0 {
                println!("No popular items in this category.");
            } else {
                println!("No items in this category.");
            }
        } else {
            print_item_rows(&response.items);
        }

        Ok(())
    }
}
