use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Product ids the current user has saved. Presentation only; the catalog
/// filter never looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    product_ids: BTreeSet<String>,
}

impl Wishlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.product_ids.contains(product_id)
    }

    /// Returns `true` if the id was newly added.
    pub fn insert(&mut self, product_id: impl Into<String>) -> bool {
        self.product_ids.insert(product_id.into())
    }

    /// Returns `true` if the id was present.
    pub fn remove(&mut self, product_id: &str) -> bool {
        self.product_ids.remove(product_id)
    }

    /// Flips membership and returns whether the product is now saved.
    pub fn toggle(&mut self, product_id: &str) -> bool {
        if self.remove(product_id) {
            false
        } else {
            self.insert(product_id)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.product_ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Wishlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            product_ids: iter.into_iter().map(Into::<String>::into).collect(),
        }
    }
}
