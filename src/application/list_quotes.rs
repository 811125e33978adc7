//! Filtered quote view use case

use crate::domain::{CategoryFilter, Quote};
use crate::error::Result;
use crate::infrastructure::QuoteStore;

/// A rendered view of the collection: the effective filter and the
/// ordered quotes it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteView {
    pub filter: CategoryFilter,
    pub quotes: Vec<Quote>,
}

/// Produce the filtered view of the collection.
///
/// An explicit selection wins and becomes the remembered filter. With no
/// selection the remembered filter applies, validated against the live
/// category set; when its category no longer exists the view falls back
/// to all categories and the fallback is written back as the new
/// remembered filter.
pub fn list_quotes(store: &impl QuoteStore, requested: Option<&str>) -> Result<QuoteView> {
    let collection = store.load_quotes()?;

    let filter = match requested {
        Some(raw) => {
            let filter = CategoryFilter::parse(raw);
            let mut config = store.load_config()?;
            config.set_filter(&filter);
            store.save_config(&config)?;
            filter
        }
        None => {
            let mut config = store.load_config()?;
            let remembered = config.category_filter();
            let filter = remembered.validated_against(&collection.categories());
            if filter != remembered {
                config.set_filter(&filter);
                store.save_config(&config)?;
            }
            filter
        }
    };

    let quotes = collection.filtered(&filter);

    Ok(QuoteView { filter, quotes })
}
