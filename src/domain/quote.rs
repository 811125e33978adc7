//! Quote model and merge-key identity

use serde::{Deserialize, Serialize};

/// Separator used to build a quote's merge key.
const MERGE_KEY_SEPARATOR: &str = "|||";

/// A single quote: trimmed, non-empty text paired with a trimmed,
/// non-empty category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Build a quote from raw input, trimming both fields.
    /// Returns None when either field is blank after trimming.
    pub fn new(text: &str, category: &str) -> Option<Self> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() || category.is_empty() {
            return None;
        }

        Some(Quote {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// Composite identity used for deduplication during import merge.
    /// Quotes have no id field; two quotes are the same entry exactly
    /// when both text and category match.
    pub fn merge_key(&self) -> String {
        format!("{}{}{}", self.text, MERGE_KEY_SEPARATOR, self.category)
    }
}
