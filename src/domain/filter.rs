//! Category filter selection

use std::fmt;

/// The sentinel value that selects every category.
pub const ALL: &str = "all";

/// A category selection: either every quote or a single category.
///
/// The remembered selection is persisted as a plain string, so parsing
/// never fails; anything that is not the `all` sentinel is treated as a
/// category name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a user- or config-supplied selection. Blank input and the
    /// `all` sentinel (case-insensitive) select everything.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Validate this selection against the live category set, falling
    /// back to `All` when the remembered category no longer exists.
    pub fn validated_against(&self, categories: &[String]) -> CategoryFilter {
        match self {
            CategoryFilter::All => CategoryFilter::All,
            CategoryFilter::Category(name) => {
                if categories.iter().any(|c| c == name) {
                    self.clone()
                } else {
                    CategoryFilter::All
                }
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL),
            CategoryFilter::Category(name) => write!(f, "{}", name),
        }
    }
}
