use clap::Parser;
use quoth::application::{
    add_quote, export_quotes, import_quotes, init, list_categories, list_quotes, set_filter,
    show_filter, AddOutcome, ExportOutcome, ExportTarget,
};
use quoth::cli::{format_category_list, format_quote_list, Cli, Commands};
use quoth::error::QuothError;
use quoth::infrastructure::FileSystemStore;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), QuothError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Add { text, category }) => {
            let store = FileSystemStore::discover()?;
            match add_quote(&store, &text, &category)? {
                AddOutcome::Added { total } => {
                    println!("Added quote. Total: {}.", total);
                }
                AddOutcome::IgnoredEmpty => {
                    println!("Ignored: quote text and category must be non-empty.");
                }
            }
            Ok(())
        }
        Some(Commands::List { category }) => {
            let store = FileSystemStore::discover()?;
            let view = list_quotes(&store, category.as_deref())?;
            println!("{}", format_quote_list(&view.quotes).trim_end());
            Ok(())
        }
        Some(Commands::Categories) => {
            let store = FileSystemStore::discover()?;
            let view = list_categories(&store)?;
            println!(
                "{}",
                format_category_list(&view.categories, &view.selected).trim_end()
            );
            Ok(())
        }
        Some(Commands::Filter { category }) => {
            let store = FileSystemStore::discover()?;
            let filter = match category {
                Some(value) => set_filter(&store, &value)?,
                None => show_filter(&store)?,
            };
            println!("{}", filter);
            Ok(())
        }
        Some(Commands::Export { output, stdout }) => {
            let store = FileSystemStore::discover()?;
            let target = if stdout {
                ExportTarget::Stdout
            } else {
                ExportTarget::File(output)
            };
            match export_quotes(&store, target)? {
                ExportOutcome::Written { path, count } => {
                    println!("Exported {} quote(s) to {}", count, path.display());
                }
                ExportOutcome::Rendered { json, .. } => {
                    println!("{}", json);
                }
            }
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let store = FileSystemStore::discover()?;
            let summary = import_quotes(&store, &file)?;
            println!(
                "Import successful. Added {} new quote(s). Total: {}.",
                summary.added, summary.total
            );
            Ok(())
        }
        None => {
            println!("quoth - Terminal quote collection manager");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
