use std::collections::HashMap;
use tracing::debug;

use crate::{AuthorAggregate, Record};

mod parser;
pub use parser::{align_authors, derive_country, split_affiliations, split_authors};

/// Aggregate state for every author seen with an aligned affiliation, kept in
/// first-seen order.
#[derive(Debug, Default)]
pub struct AuthorTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, AuthorAggregate)>,
}

impl AuthorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the entry on first sight, then overwrites affiliation and
    /// country and bumps the degree.
    pub fn upsert(&mut self, author: &str, affiliation: &str) {
        let idx = match self.index.get(author) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries
                    .push((author.to_string(), AuthorAggregate::default()));
                self.index.insert(author.to_string(), idx);
                idx
            }
        };

        let aggregate = &mut self.entries[idx].1;
        aggregate.affiliation = Some(affiliation.to_string());
        aggregate.country = Some(derive_country(affiliation).to_string());
        aggregate.degree += 1;
    }

    pub fn get(&self, author: &str) -> Option<&AuthorAggregate> {
        self.index.get(author).map(|&idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AuthorAggregate)> {
        self.entries
            .iter()
            .map(|(name, aggregate)| (name.as_str(), aggregate))
    }

    pub fn into_entries(self) -> Vec<(String, AuthorAggregate)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Updates the table for every aligned author in the record and returns
/// those authors in order.
pub fn extract_authors(record: &Record, table: &mut AuthorTable) -> Vec<String> {
    let aligned = align_authors(record);

    let mut valid_authors = Vec::with_capacity(aligned.len());
    for (author, affiliation) in aligned {
        table.upsert(author, affiliation);
        valid_authors.push(author.to_string());
    }

    let listed = split_authors(&record.authors).len();
    if listed > valid_authors.len() {
        debug!(
            year = %record.year,
            skipped = listed - valid_authors.len(),
            "Authors without an aligned affiliation"
        );
    }

    valid_authors
}
