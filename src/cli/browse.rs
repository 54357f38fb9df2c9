//! `browse` command: every item with optional filter, sort and grouping.

use std::collections::BTreeMap;

use clap::Args;
use serde::Serialize;

use crate::cli::common::{parse_category, print_item_rows, print_json, CliError, CliResult, Session};
use crate::models::Item;
use crate::state::{BrowseState, LoadState, SortOrder};

/// Browse all items
#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    /// Only show items in this category
    #[arg(long, value_name = "ID")]
    pub category: Option<String>,

    /// Sort order: alphabetical, category, or popular
    #[arg(long, value_name = "ORDER", default_value = "alphabetical")]
    pub sort: String,

    /// Group items by the first letter of their name
    #[arg(long)]
    pub grouped: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BrowseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    sort: SortOrder,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Vec<Item>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<BTreeMap<String, Vec<Item>>>,
}

impl BrowseArgs {
    /// Execute the browse command
    pub async fn execute(&self, session: &Session) -> CliResult<()> {
        let order: SortOrder = self
            .sort
            .parse()
            .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
        let category = self.category.as_deref().map(parse_category).transpose()?;

        let state = BrowseState::new(session.repository.clone());
        state.load().await;
        state.set_category(category);
        state.set_sort_order(order);

        if let LoadState::Error(message) = state.status().get() {
            return Err(CliError::io(format!("Failed to load items: {message}")));
        }

        let items = state.filtered_items().get();
        let count = items.len();
        let (items, groups) = if self.grouped {
            let groups = state
                .items_grouped_by_letter()
                .into_iter()
                .map(|(letter, items)| (letter.to_string(), items))
                .collect();
            (None, Some(groups))
        } else {
            (Some(items), None)
        };

        let response = BrowseResponse {
            category: category.map(|c| c.id().to_string()),
            sort: order,
            count,
            items,
            groups,
        };

        if self.json {
            return print_json(&response);
        }

        if count == 0 {
            println!("No items found.");
            return Ok(());
        }

        println!("Items ({count}, sorted {order}):");
        if let Some(groups) = &response.groups {
            for (letter, items) in groups {
                println!();
                println!("{letter}");
                print_item_rows(items);
            }
        } else if let Some(items) = &response.items {
            println!();
            print_item_rows(items);
        }

        Ok(())
    }
}
