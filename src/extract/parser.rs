use crate::Record;

pub const AUTHOR_SEPARATOR: &str = ", ";
pub const AFFILIATION_SEPARATOR: &str = "; ";

pub fn split_authors(field: &str) -> Vec<&str> {
    field.split(AUTHOR_SEPARATOR).collect()
}

pub fn split_affiliations(field: &str) -> Vec<&str> {
    field.split(AFFILIATION_SEPARATOR).collect()
}

/// Last comma-separated segment of the affiliation, trimmed. Affiliations
/// without a comma yield the whole string.
pub fn derive_country(affiliation: &str) -> &str {
    affiliation.rsplit(',').next().unwrap_or_default().trim()
}

/// Pairs each author with the affiliation at the same position. Authors past
/// the end of the affiliation list are left out.
pub fn align_authors(record: &Record) -> Vec<(&str, &str)> {
    split_authors(&record.authors)
        .into_iter()
        .zip(split_affiliations(&record.affiliations))
        .collect()
}

