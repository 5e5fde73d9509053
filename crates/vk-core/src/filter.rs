//! Presentational list filtering.
//!
//! A row is visible iff the type filter accepts its type AND its name contains
//! the search text, both compared case-insensitively. Filtering never drops
//! rows from the underlying list.

use crate::enums::TypeFilter;
use crate::item::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub search: String,
    pub item_type: TypeFilter,
}

impl Filter {
    #[must_use]
    pub fn new(search: impl Into<String>, item_type: TypeFilter) -> Self {
        Self {
            search: search.into(),
            item_type,
        }
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.item_type.matches(item.item_type)
            && item
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    /// Visible rows, in input order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
