//! Add quote use case

use crate::error::Result;
use crate::infrastructure::QuoteStore;

/// Outcome of an add attempt. Blank input is ignored rather than treated
/// as an error, matching the validated-form behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { total: usize },
    IgnoredEmpty,
}

/// Append a quote to the collection and persist it. No duplicate check
/// is performed; identical quotes may be added repeatedly (only the
/// import merge deduplicates).
pub fn add_quote(store: &impl QuoteStore, text: &str, category: &str) -> Result<AddOutcome> {
    let mut collection = store.load_quotes()?;

    if !collection.add(text, category) {
        return Ok(AddOutcome::IgnoredEmpty);
    }

    store.save_quotes(&collection)?;

    Ok(AddOutcome::Added {
        total: collection.len(),
    })
}
