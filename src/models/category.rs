//! Building component categories.

use crate::models::AccentColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of building component categories.
///
/// Every item in the catalog belongs to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    /// Structural and non-structural wall systems
    Walls,
    /// Roof types and structures
    Roofs,
    /// Classical and modern columns
    Columns,
    /// Floor systems and materials
    Floors,
    /// Opening systems
    WindowsDoors,
    /// Staircase types
    Stairs,
}

impl CategoryType {
    /// All category types in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Walls,
        Self::Roofs,
        Self::Columns,
        Self::Floors,
        Self::WindowsDoors,
        Self::Stairs,
    ];

    /// Returns every category type in catalog order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Stable string identifier (e.g., "walls", "windows_doors").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Walls => "walls",
            Self::Roofs => "roofs",
            Self::Columns => "columns",
            Self::Floors => "floors",
            Self::WindowsDoors => "windows_doors",
            Self::Stairs => "stairs",
        }
    }

    /// Human-readable name (e.g., "Windows & Doors").
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Walls => "Walls",
            Self::Roofs => "Roofs",
            Self::Columns => "Columns",
            Self::Floors => "Floors",
            Self::WindowsDoors => "Windows & Doors",
            Self::Stairs => "Stairs",
        }
    }

    /// Parses a category type from its string identifier.
    ///
    /// Matching is exact; "Walls" is not accepted.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A grouping of catalog items shown on the home screen.
///
/// `item_count` is denormalized authoring data and is not kept in sync with
/// the actual item list; see `Catalog::integrity_report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (e.g., "walls")
    pub id: String,
    /// Category type this record describes
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    /// Display name (e.g., "Walls")
    pub name: String,
    /// Brief description of what the category covers
    pub description: String,
    /// Icon reference for the view layer
    pub icon: String,
    /// Accent color for visual identification
    pub color: AccentColor,
    /// Advertised number of items
    #[serde(default)]
    pub item_count: usize,
    /// Example labels shown on the category card
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Category {
    /// Short summary for display: the first three examples, or the
    /// description when no examples are authored.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.examples.is_empty() {
            self.description.clone()
        } else {
            self.examples
                .iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}
