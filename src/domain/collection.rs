//! Ordered quote collection and its pure transformations

use crate::domain::filter::CategoryFilter;
use crate::domain::quote::Quote;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered sequence of quotes. Insertion order is preserved and
/// content duplicates are allowed; only the import merge deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    pub fn new(quotes: Vec<Quote>) -> Self {
        QuoteCollection { quotes }
    }

    /// The default collection used when no persisted state exists or the
    /// persisted state cannot be parsed.
    pub fn seed() -> Self {
        let seeds = [
            (
                "The best way to get started is to quit talking and begin doing.",
                "Motivation",
            ),
            ("Your limitation—it's only your imagination.", "Inspiration"),
            (
                "Push yourself, because no one else is going to do it for you.",
                "Motivation",
            ),
            ("Dream it. Wish it. Do it.", "Inspiration"),
        ];

        QuoteCollection {
            quotes: seeds
                .iter()
                .filter_map(|(text, category)| Quote::new(text, category))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Sorted, distinct category names. Derived on demand, never stored.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .quotes
            .iter()
            .map(|q| q.category.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        categories.sort();
        categories
    }

    /// The ordered subsequence selected by `filter`. `All` returns the
    /// full collection unchanged.
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<Quote> {
        match filter {
            CategoryFilter::All => self.quotes.clone(),
            CategoryFilter::Category(name) => self
                .quotes
                .iter()
                .filter(|q| &q.category == name)
                .cloned()
                .collect(),
        }
    }

    /// Append a quote built from raw input. Returns false (leaving the
    /// collection unchanged) when either field is blank after trimming.
    /// No duplicate check here; import is the only dedup point.
    pub fn add(&mut self, text: &str, category: &str) -> bool {
        match Quote::new(text, category) {
            Some(quote) => {
                self.quotes.push(quote);
                true
            }
            None => false,
        }
    }

    /// Merge imported quotes into the collection. Entries whose merge key
    /// already exists are dropped; the rest are appended in incoming
    /// order. Returns the number of quotes actually added.
    pub fn merge(&mut self, incoming: Vec<Quote>) -> usize {
        let mut seen: HashSet<String> = self.quotes.iter().map(|q| q.merge_key()).collect();
        let mut added = 0;

        for quote in incoming {
            if seen.insert(quote.merge_key()) {
                self.quotes.push(quote);
                added += 1;
            }
        }

        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str, category: &str) -> Quote {
        Quote::new(text, category).unwrap()
    }

    fn sample() -> QuoteCollection {
        QuoteCollection::new(vec![
            quote("a", "Motivation"),
            quote("b", "Inspiration"),
            quote("c", "Motivation"),
        ])
    }

    #[test]
    fn test_seed_has_four_quotes() {
        let seed = QuoteCollection::seed();
        assert_eq!(seed.len(), 4);
        assert_eq!(seed.categories(), vec!["Inspiration", "Motivation"]);
    }

    #[test]
    fn test_categories_sorted_distinct() {
        let collection = QuoteCollection::new(vec![
            quote("x", "Zen"),
            quote("y", "Art"),
            quote("z", "Zen"),
        ]);
        assert_eq!(collection.categories(), vec!["Art", "Zen"]);
    }

    #[test]
    fn test_filtered_all_is_identity() {
        let collection = sample();
        let filtered = collection.filtered(&CategoryFilter::All);
        assert_eq!(filtered, collection.quotes().to_vec());
    }

    #[test]
    fn test_filtered_preserves_order() {
        let collection = sample();
        let filter = CategoryFilter::Category("Motivation".to_string());
        let filtered = collection.filtered(&filter);
        assert_eq!(filtered, vec![quote("a", "Motivation"), quote("c", "Motivation")]);
    }

    #[test]
    fn test_filtered_unknown_category_is_empty() {
        let collection = sample();
        let filter = CategoryFilter::Category("Nothing".to_string());
        assert!(collection.filtered(&filter).is_empty());
    }

    #[test]
    fn test_add_appends() {
        let mut collection = sample();
        assert!(collection.add("d", "Wisdom"));
        assert_eq!(collection.len(), 4);
        assert_eq!(collection.quotes()[3], quote("d", "Wisdom"));
    }

    #[test]
    fn test_add_blank_text_is_noop() {
        let mut collection = sample();
        assert!(!collection.add("", "x"));
        assert!(!collection.add("   ", "x"));
        assert_eq!(collection, sample());
    }

    #[test]
    fn test_add_blank_category_is_noop() {
        let mut collection = sample();
        assert!(!collection.add("x", ""));
        assert_eq!(collection, sample());
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut collection = sample();
        assert!(collection.add("a", "Motivation"));
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn test_merge_drops_existing_keys() {
        let mut collection = sample();
        let added = collection.merge(vec![quote("a", "Motivation")]);
        assert_eq!(added, 0);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_merge_appends_new_in_order() {
        let mut collection = QuoteCollection::default();
        let added = collection.merge(vec![quote("a", "b"), quote("c", "d")]);
        assert_eq!(added, 2);
        assert_eq!(
            collection.quotes(),
            &[quote("a", "b"), quote("c", "d")]
        );
    }

    #[test]
    fn test_merge_keeps_original_before_new() {
        let mut collection = sample();
        let added = collection.merge(vec![quote("new", "Wisdom"), quote("b", "Inspiration")]);
        assert_eq!(added, 1);
        assert_eq!(collection.len(), 4);
        assert_eq!(collection.quotes()[3], quote("new", "Wisdom"));
    }

    #[test]
    fn test_merge_dedups_within_incoming() {
        let mut collection = QuoteCollection::default();
        let added = collection.merge(vec![quote("a", "b"), quote("a", "b")]);
        assert_eq!(added, 1);
    }

    #[test]
    fn test_serde_round_trip_as_array() {
        let collection = sample();
        let json = serde_json::to_string_pretty(&collection).unwrap();
        assert!(json.trim_start().starts_with('['));
        let back: QuoteCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, collection);
    }
}
