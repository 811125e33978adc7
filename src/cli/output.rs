//! Output formatting utilities

use crate::domain::{CategoryFilter, Quote};

/// Format a filtered quote view for display
pub fn format_quote_list(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes available for this category.".to_string();
    }

    let mut output = String::new();
    for quote in quotes {
        output.push_str(&format!("\"{}\" — [{}]\n", quote.text, quote.category));
    }
    output
}

/// Format the category list, marking the effective selection. The `all`
/// sentinel is always listed first.
pub fn format_category_list(categories: &[String], selected: &CategoryFilter) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();

    let marker = if selected.is_all() { "*" } else { " " };
    output.push_str(&format!("{} all\n", marker));

    for category in categories {
        let marker = match selected {
            CategoryFilter::Category(name) if name == category => "*",
            _ => " ",
        };
        output.push_str(&format!("{} {}\n", marker, category));
    }

    output
}
