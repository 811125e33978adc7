//! Initialize store use case

use crate::domain::QuoteCollection;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStore, QuoteStore};
use std::fs;
use std::path::Path;

/// Initialize a new quote store at the specified path, seeded with the
/// default collection and an all-categories filter.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::new(path.to_path_buf());

    store.initialize()?;

    let seeds = QuoteCollection::seed();
    store.save_quotes(&seeds)?;
    store.save_config(&Config::new())?;

    println!("Initialized quoth store at {}", path.display());
    println!("Seeded {} quote(s)", seeds.len());

    Ok(())
}
