//! Detailed item records: specifications, pros/cons, usage notes.

use serde::{Deserialize, Serialize};

/// Group label used for specifications without an explicit category.
pub const GENERAL_SPEC_GROUP: &str = "General";

/// A labeled, optionally unit-tagged property of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    /// Label (e.g., "Standard Size")
    pub label: String,
    /// Value (e.g., "215 x 102.5 x 65")
    pub value: String,
    /// Unit of measurement (e.g., "mm")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Free-text grouping label (e.g., "Dimensional")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Specification {
    /// Value with its unit appended, if any (e.g., "10-100 N/mm²").
    #[must_use]
    pub fn display_value(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }

    /// Group label, falling back to [`GENERAL_SPEC_GROUP`].
    #[must_use]
    pub fn group(&self) -> &str {
        self.category.as_deref().unwrap_or(GENERAL_SPEC_GROUP)
    }
}

/// A real-world building that uses an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleProject {
    /// Project name
    pub name: String,
    /// Location (city, country)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Architect or firm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architect: Option<String>,
    /// Year of completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Full description of an item.
///
/// Details are sparse: not every item has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    /// Id of the item this detail belongs to
    pub item_id: String,
    /// Comprehensive description
    pub full_description: String,
    /// Technical specifications
    #[serde(default)]
    pub specifications: Vec<Specification>,
    /// Materials used
    #[serde(default)]
    pub materials: Vec<String>,
    /// Advantages
    #[serde(default)]
    pub advantages: Vec<String>,
    /// Disadvantages
    #[serde(default)]
    pub disadvantages: Vec<String>,
    /// Common applications
    #[serde(default)]
    pub common_uses: Vec<String>,
    /// Historical context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_info: Option<String>,
    /// Installation guidelines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_notes: Option<String>,
    /// Maintenance information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_notes: Option<String>,
    /// Gallery image references
    #[serde(default)]
    pub images: Vec<String>,
    /// Buildings using this item
    #[serde(default)]
    pub example_projects: Vec<ExampleProject>,
}

impl ItemDetail {
    /// Groups specifications by their category label.
    ///
    /// Groups appear in the order their first specification appears;
    /// specifications keep their authored order within a group.
    #[must_use]
    pub fn specs_by_category(&self) -> Vec<(String, Vec<Specification>)> {
        let mut groups: Vec<(String, Vec<Specification>)> = Vec::new();
        for spec in &self.specifications {
            let group = spec.group();
            match groups.iter_mut().find(|(name, _)| name == group) {
                Some((_, specs)) => specs.push(spec.clone()),
                None => groups.push((group.to_string(), vec![spec.clone()])),
            }
        }
        groups
    }

    /// Whether the gallery has any images.
    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Whether any specifications are authored.
    #[must_use]
    pub fn has_specs(&self) -> bool {
        !self.specifications.is_empty()
    }
}
