//! quoth - Terminal quote collection manager
//!
//! A command-line application that keeps a collection of quotes (text +
//! category pairs) with filtered views, a remembered category filter, and
//! JSON import/export with merge-on-import deduplication.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuothError;
