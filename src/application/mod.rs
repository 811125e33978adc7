//! Application layer - Use cases and orchestration

pub mod add_quote;
pub mod export_quotes;
pub mod import_quotes;
pub mod init;
pub mod list_categories;
pub mod list_quotes;
pub mod manage_filter;

pub use add_quote::{add_quote, AddOutcome};
pub use export_quotes::{export_quotes, ExportOutcome, ExportTarget};
pub use import_quotes::{import_quotes, ImportSummary};
pub use init::init;
pub use list_categories::{list_categories, CategoryView};
pub use list_quotes::{list_quotes, QuoteView};
pub use manage_filter::{set_filter, show_filter};
