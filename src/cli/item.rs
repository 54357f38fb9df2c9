//! `item` command: the detail view for one item.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult, Session};
use crate::models::{Item, ItemDetail, Specification};
use crate::state::{DetailState, LoadState};

/// Show an item's full details
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Item ID (e.g., brick_wall)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Toggle the item's favorite flag before showing it
    #[arg(long)]
    pub favorite: bool,

    /// Select a gallery image (clamped to the available range)
    #[arg(long, value_name = "N")]
    pub image: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RelatedItem {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct SpecGroup {
    category: String,
    specifications: Vec<Specification>,
}

#[derive(Debug, Serialize)]
struct ItemResponse {
    item: Item,
    detail: Option<ItemDetail>,
    related_items: Vec<RelatedItem>,
    is_favorite: bool,
    image_index: usize,
    image_count: usize,
    specification_groups: Vec<SpecGroup>,
}

impl ItemArgs {
    /// Execute the item command
    pub async fn execute(&self, session: &Session) -> CliResult<()> {
        if session.catalog().item_by_id(&self.id).is_none() {
            return Err(CliError::not_found("Item", &self.id));
        }

        let state = DetailState::new(session.repository.clone());
        state.load(&self.id).await;

        if let LoadState::Error(message) = state.status().get() {
            return Err(CliError::io(format!("Failed to load item: {message}")));
        }

        if self.favorite {
            state.toggle_favorite().await;
        }
        if let Some(index) = self.image {
            state.set_image_index(index);
        }

        let Some(item) = state.item().get() else {
            return Err(CliError::not_found("Item", &self.id));
        };

        let response = ItemResponse {
            item,
            detail: state.detail().get(),
            related_items: state
                .related_items()
                .get()
                .into_iter()
                .map(|related| RelatedItem {
                    id: related.id,
                    name: related.name,
                })
                .collect(),
            is_favorite: state.is_favorite().get(),
            image_index: state.image_index().get(),
            image_count: state.image_count(),
            specification_groups: state
                .grouped_specifications()
                .into_iter()
                .map(|(category, specifications)| SpecGroup {
                    category,
                    specifications,
                })
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        print_human_readable(&response);
        Ok(())
    }
}

fn print_list(title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    println!();
    println!("{title}:");
    for entry in entries {
        println!("  - {entry}");
    }
}

fn print_human_readable(response: &ItemResponse) {
    let item = &response.item;
    let star = if response.is_favorite { " [favorite]" } else { "" };

    println!("{}{star}", item.name);
    println!("{} | {}", item.id, item.category_name());
    println!();
    println!("{}", item.short_description);
    if !item.tags.is_empty() {
        println!("Tags: {}", item.tags.join(", "));
    }

    if let Some(detail) = &response.detail {
        println!();
        println!("{}", detail.full_description);

        for group in &response.specification_groups {
            println!();
            println!("{}:", group.category);
            for spec in &group.specifications {
                println!("  {:<24} {}", spec.label, spec.display_value());
            }
        }

        print_list("Materials", &detail.materials);
        print_list("Advantages", &detail.advantages);
        print_list("Disadvantages", &detail.disadvantages);
        print_list("Common uses", &detail.common_uses);

        for (title, note) in [
            ("History", &detail.historical_info),
            ("Installation", &detail.installation_notes),
            ("Maintenance", &detail.maintenance_notes),
        ] {
            if let Some(note) = note {
                println!();
                println!("{title}: {note}");
            }
        }

        if !detail.example_projects.is_empty() {
            println!();
            println!("Example projects:");
            for project in &detail.example_projects {
                let mut line = format!("  - {}", project.name);
                if let Some(location) = &project.location {
                    line.push_str(&format!(", {location}"));
                }
                if let Some(year) = project.year {
                    line.push_str(&format!(" ({year})"));
                }
                println!("{line}");
            }
        }

        if let Some(image) = detail.images.get(response.image_index) {
            println!();
            println!(
                "Image {} of {}: {image}",
                response.image_index + 1,
                response.image_count
            );
        }
    } else {
        println!();
        println!("No detailed information available yet.");
    }

    if !response.related_items.is_empty() {
        println!();
        println!("Related:");
        for related in &response.related_items {
            println!("  {:<22} {}", related.id, related.name);
        }
    }
}
