//! `popular` command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_item_rows, print_json, CliResult, Session};
use crate::models::Item;
use crate::repository::BuildingRepository;

/// List popular items across all categories
#[derive(Debug, Clone, Args)]
pub struct PopularArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PopularResponse {
    items: Vec<Item>,
    count: usize,
}

impl PopularArgs {
    /// Execute the popular command
    pub async fn execute(&self, session: &Session) -> CliResult<()> {
        let items = session.repository.popular_items().await?;
        let response = PopularResponse {
            count: items.len(),
            items,
        };

        if self.json {
            return print_json(&response);
        }

        if response.count == 0 {
            println!("No popular items.");
        } else {
            println!("Popular items ({}):", response.count);
            println!();
            print_item_rows(&response.items);
        }

        Ok(())
    }
}
