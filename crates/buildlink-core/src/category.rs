use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Label shown for the "no category constraint" choice.
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cement,
    Sand,
    IronRods,
    Pop,
    Bed,
    Table,
    Lamp,
    Wardrobe,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Cement,
        Category::Sand,
        Category::IronRods,
        Category::Pop,
        Category::Bed,
        Category::Table,
        Category::Lamp,
        Category::Wardrobe,
        Category::Other,
    ];

    /// Raw stored value, e.g. `"iron_rods"`. Search and the category
    /// predicate both compare against this, never against the label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cement => "cement",
            Category::Sand => "sand",
            Category::IronRods => "iron_rods",
            Category::Pop => "pop",
            Category::Bed => "bed",
            Category::Table => "table",
            Category::Lamp => "lamp",
            Category::Wardrobe => "wardrobe",
            Category::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Cement => "Cement",
            Category::Sand => "Sand",
            Category::IronRods => "Iron Rods",
            Category::Pop => "POP (Plaster of Paris)",
            Category::Bed => "Beds",
            Category::Table => "Tables",
            Category::Lamp => "Lamps",
            Category::Wardrobe => "Wardrobes",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
