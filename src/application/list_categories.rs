//! List categories use case

use crate::domain::CategoryFilter;
use crate::error::Result;
use crate::infrastructure::QuoteStore;

/// The derived category set plus the effective remembered selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub categories: Vec<String>,
    pub selected: CategoryFilter,
}

/// List the sorted, distinct categories in the collection along with the
/// remembered selection, validated against the live set.
pub fn list_categories(store: &impl QuoteStore) -> Result<CategoryView> {
    let collection = store.load_quotes()?;
    let config = store.load_config()?;

    let categories = collection.categories();
    let selected = config.category_filter().validated_against(&categories);

    Ok(CategoryView {
        categories,
        selected,
    })
}
