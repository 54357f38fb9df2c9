//! `search` command: debounced free-text search.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{parse_category, print_item_rows, print_json, CliError, CliResult, Session};
use crate::models::Item;
use crate::state::{SearchState, SearchStatus};

/// Search items by name, description or tag
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Text to search for (case-insensitive)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Only search within this category
    #[arg(long, value_name = "ID")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    status: SearchStatus,
    count: usize,
    results: Vec<Item>,
    recent_searches: Vec<String>,
}

impl SearchArgs {
    /// Execute the search command
    pub async fn execute(&self, session: &Session) -> CliResult<()> {
        if self.query.trim().is_empty() {
            return Err(CliError::validation("Search query must not be blank"));
        }
        let category = self.category.as_deref().map(parse_category).transpose()?;

        let search = SearchState::new(session.repository.clone(), session.config.search_debounce());
        search.set_category(category);
        search.on_query_change(self.query.as_str());
        search.wait_idle().await;

        let status = search.status().get();
        if let SearchStatus::Error(message) = &status {
            return Err(CliError::io(format!("Search failed: {message}")));
        }

        let results = search.results().get();
        let response = SearchResponse {
            query: search.query().get(),
            category: category.map(|c| c.id().to_string()),
            status,
            count: results.len(),
            results,
            recent_searches: search.recent_searches().get(),
        };

        if self.json {
            return print_json(&response);
        }

        match &response.status {
            SearchStatus::NoResults(query) => println!("No results for '{query}'."),
            _ => {
                println!("Results for '{}' ({}):", response.query, response.count);
                println!();
                print_item_rows(&response.results);
            }
        }

        Ok(())
    }
}
