//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quoth")]
#[command(about = "Terminal quote collection manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quote store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a quote to the collection
    Add {
        /// Quote text
        text: String,

        /// Category label
        category: String,
    },

    /// Show quotes, filtered by the remembered or a given category
    List {
        /// Category to filter by ('all' shows everything); remembered
        /// for later invocations
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the distinct categories in the collection
    Categories,

    /// Show or set the remembered category filter
    Filter {
        /// New filter value ('all' or a category name); omit to show
        /// the current one
        category: Option<String>,
    },

    /// Export the collection as a JSON file
    Export {
        /// Output file path
        #[arg(short, long, default_value = "quotes.json")]
        output: PathBuf,

        /// Print the JSON to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Import quotes from a JSON file, skipping duplicates
    Import {
        /// File containing a JSON array of {text, category} objects
        file: PathBuf,
    },
}
