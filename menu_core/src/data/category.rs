use std::{fmt, str::FromStr};

use crate::error::CatalogError;

/// A section of the menu. The set of sections is fixed.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub enum Category {
    Starters,
    Mains,
    Desserts,
}

impl Category {
    /// Every category, in the order the menu presents them.
    pub const ALL: [Category; 3] = [Category::Starters, Category::Mains, Category::Desserts];

    pub fn name(self) -> &'static str {
        match self {
            Category::Starters => "Starters",
            Category::Mains => "Mains",
            Category::Desserts => "Desserts",
        }
    }

    /// Position of this category's collection inside the store.
    pub(crate) fn index(self) -> usize {
        match self {
            Category::Starters => 0,
            Category::Mains => 1,
            Category::Desserts => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Parses a category key. Matching ignores ASCII case and surrounding
    /// whitespace, so "mains" and " Mains " both name `Category::Mains`.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let trimmed = key.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnknownCategory(key.to_owned()))
    }
}
