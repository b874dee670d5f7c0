//! Category derivation
//!
//! Categories are a pure function of the item list: distinct, non-empty, in
//! first-seen order. [`CategoryMemo`] avoids recomputing them while the list
//! is unchanged.

use std::collections::HashSet;
use std::sync::Arc;

use crate::model::Product;

/// Distinct non-empty categories in first-seen order.
pub fn derive_categories(items: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|item| item.category.as_deref())
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .filter(|category| seen.insert(*category))
        .map(str::to_string)
        .collect()
}

/// Caches the last derivation, keyed on the item list.
///
/// A list that is the same allocation, or has equal contents, reuses the
/// cached result. Anything else is derived afresh.
#[derive(Debug, Default)]
pub struct CategoryMemo {
    source: Option<Arc<[Product]>>,
    categories: Arc<[String]>,
}

impl CategoryMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, items: &Arc<[Product]>) -> Arc<[String]> {
        let hit = self
            .source
            .as_ref()
            .is_some_and(|source| Arc::ptr_eq(source, items) || source[..] == items[..]);

        if !hit {
            self.categories = derive_categories(items).into();
            self.source = Some(Arc::clone(items));
        }
        Arc::clone(&self.categories)
    }
}
