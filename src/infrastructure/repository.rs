//! Quote store persistence

use crate::domain::QuoteCollection;
use crate::error::{QuothError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract persistence seam for the quote store. The application layer
/// is generic over this trait so tests can run against an in-memory fake.
pub trait QuoteStore {
    /// Load the persisted collection, falling back to the seed collection
    /// when nothing is persisted or the persisted value cannot be parsed.
    fn load_quotes(&self) -> Result<QuoteCollection>;

    /// Persist the collection, overwriting any prior value.
    fn save_quotes(&self, collection: &QuoteCollection) -> Result<()>;

    /// Load configuration (remembered filter)
    fn load_config(&self) -> Result<Config>;

    /// Save configuration
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the store has been initialized
    fn is_initialized(&self) -> bool;

    /// Create the store directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of QuoteStore. A store is a directory
/// containing a `.quoth` subdirectory with `quotes.json` and
/// `config.toml`.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

const QUOTES_FILE: &str = "quotes.json";

impl FileSystemStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover the store root by walking up from the current directory.
    /// First checks the QUOTH_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUOTH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_quoth_dir(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(QuothError::Config(format!(
                    "QUOTH_ROOT is set to '{}' but no .quoth directory found. \
                    Run 'quoth init' in that directory or unset QUOTH_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_quoth_dir(&current) {
                return Ok(FileSystemStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(QuothError::NotQuothStore(start.to_path_buf()));
                }
            }
        }
    }

    fn has_quoth_dir(path: &Path) -> bool {
        path.join(".quoth").is_dir()
    }

    fn quotes_path(&self) -> PathBuf {
        self.root.join(".quoth").join(QUOTES_FILE)
    }
}

impl QuoteStore for FileSystemStore {
    fn load_quotes(&self) -> Result<QuoteCollection> {
        let path = self.quotes_path();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(QuoteCollection::seed());
            }
            Err(e) => return Err(QuothError::Io(e)),
        };

        // A corrupt quotes file is replaced by the seed collection rather
        // than surfaced; the next save overwrites it.
        Ok(serde_json::from_str(&contents).unwrap_or_else(|_| QuoteCollection::seed()))
    }

    fn save_quotes(&self, collection: &QuoteCollection) -> Result<()> {
        let path = self.quotes_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = serde_json::to_string_pretty(collection)?;
        contents.push('\n');
        fs::write(&path, contents)?;
        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_quoth_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let quoth_dir = self.root.join(".quoth");

        if quoth_dir.exists() {
            return Err(QuothError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&quoth_dir)?;
        Ok(())
    }
}

/// In-memory store used by application-layer unit tests.
#[cfg(test)]
pub struct MemoryStore {
    quotes: std::cell::RefCell<Option<QuoteCollection>>,
    config: std::cell::RefCell<Config>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn empty() -> Self {
        MemoryStore {
            quotes: std::cell::RefCell::new(Some(QuoteCollection::default())),
            config: std::cell::RefCell::new(Config::new()),
        }
    }

    /// A store with nothing persisted yet; loads fall back to the seeds.
    pub fn unpersisted() -> Self {
        MemoryStore {
            quotes: std::cell::RefCell::new(None),
            config: std::cell::RefCell::new(Config::new()),
        }
    }

    pub fn with_quotes(collection: QuoteCollection) -> Self {
        MemoryStore {
            quotes: std::cell::RefCell::new(Some(collection)),
            config: std::cell::RefCell::new(Config::new()),
        }
    }
}

#[cfg(test)]
impl QuoteStore for MemoryStore {
    fn load_quotes(&self) -> Result<QuoteCollection> {
        Ok(self
            .quotes
            .borrow()
            .clone()
            .unwrap_or_else(QuoteCollection::seed))
    }

    fn save_quotes(&self, collection: &QuoteCollection) -> Result<()> {
        *self.quotes.borrow_mut() = Some(collection.clone());
        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        Ok(self.config.borrow().clone())
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        *self.config.borrow_mut() = config.clone();
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        true
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }
}
