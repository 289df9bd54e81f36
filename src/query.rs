//! View derivation: filter then sort, as a pure function of its inputs.
//!
//! [`derive`] never mutates the store and is idempotent for identical inputs;
//! callers re-run it whenever the list or the view state changes.

use crate::model::{Product, SortField, SortOrder};
use std::cmp::Ordering;

/// Ephemeral display state. Not persisted; a fresh session starts unfiltered,
/// sorted by name ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: SortField::Name,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl ViewState {
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Selecting the active field again flips the order; a new field starts
    /// ascending.
    pub fn set_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Ascending;
        }
    }

    /// Direct assignment for clients whose input is already absolute
    /// (e.g. `--sort price --desc`), as opposed to the toggling
    /// [`Self::set_sort`].
    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort_field = field;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }
}

/// Filter by case-insensitive substring match on name, category and
/// description (empty term passes everything), then stable-sort on `field`.
///
/// Descending reverses the comparator rather than the sorted list: ties stay
/// `Equal` either way, so tied rows keep their filtered-list relative order in
/// both directions.
pub fn derive(
    products: &[Product],
    term: &str,
    field: SortField,
    order: SortOrder,
) -> Vec<Product> {
    let needle = term.to_lowercase();
    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, &needle))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    view
}

fn matches(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Category => compare_text(&a.category, &b.category),
        SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
    }
}

// Case-insensitive ordering standing in for locale collation; raw comparison
// only breaks case-equal pairs.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
