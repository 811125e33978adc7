//! Export quotes use case

use crate::error::Result;
use crate::infrastructure::QuoteStore;
use std::fs;
use std::path::PathBuf;

/// Where an export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

/// Result of an export: either the file written or the rendered JSON for
/// the caller to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, count: usize },
    Rendered { json: String, count: usize },
}

/// Serialize the persisted collection (or the seed fallback when nothing
/// was persisted) as pretty-printed JSON.
pub fn export_quotes(store: &impl QuoteStore, target: ExportTarget) -> Result<ExportOutcome> {
    let collection = store.load_quotes()?;
    let count = collection.len();
    let json = serde_json::to_string_pretty(&collection)?;

    match target {
        ExportTarget::Stdout => Ok(ExportOutcome::Rendered { json, count }),
        ExportTarget::File(path) => {
            fs::write(&path, format!("{}\n", json))?;
            Ok(ExportOutcome::Written { path, count })
        }
    }
}
