//! Import quotes use case

use crate::domain::parse_import;
use crate::error::Result;
use crate::infrastructure::QuoteStore;
use std::fs;
use std::path::Path;

/// Result of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Quotes actually added (duplicates of existing entries are dropped)
    pub added: usize,
    /// Collection size after the merge
    pub total: usize,
}

/// Read a JSON file and merge its quotes into the collection.
///
/// Validation happens before any mutation: an unreadable file or invalid
/// payload aborts the import with the collection untouched.
pub fn import_quotes(store: &impl QuoteStore, path: &Path) -> Result<ImportSummary> {
    let raw = fs::read_to_string(path)?;
    let incoming = parse_import(&raw)?;

    let mut collection = store.load_quotes()?;
    let added = collection.merge(incoming);
    store.save_quotes(&collection)?;

    Ok(ImportSummary {
        added,
        total: collection.len(),
    })
}
