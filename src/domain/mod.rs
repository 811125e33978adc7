//! Domain layer - Pure quote collection logic, no I/O

pub mod collection;
pub mod filter;
pub mod import;
pub mod quote;

pub use collection::QuoteCollection;
pub use filter::CategoryFilter;
pub use import::parse_import;
pub use quote::Quote;
