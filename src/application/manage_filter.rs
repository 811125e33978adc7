//! Remembered filter management use case

use crate::domain::CategoryFilter;
use crate::error::Result;
use crate::infrastructure::QuoteStore;

/// Show the remembered selection, validated against the live category
/// set with fallback to all categories.
pub fn show_filter(store: &impl QuoteStore) -> Result<CategoryFilter> {
    let collection = store.load_quotes()?;
    let config = store.load_config()?;

    Ok(config
        .category_filter()
        .validated_against(&collection.categories()))
}

/// Persist a new remembered selection and return it. The value is not
/// required to name an existing category; an unknown one simply yields
/// empty views until quotes appear under it or it is validated away.
pub fn set_filter(store: &impl QuoteStore, value: &str) -> Result<CategoryFilter> {
    let filter = CategoryFilter::parse(value);

    let mut config = store.load_config()?;
    config.set_filter(&filter);
    store.save_config(&config)?;

    Ok(filter)
}
