use serde::Deserialize;
use tracing::debug;

use crate::Record;

pub const YEAR_COLUMN: &str = "Year";
pub const AUTHORS_COLUMN: &str = "Authors";
pub const AFFILIATIONS_COLUMN: &str = "Authors with affiliations";

pub const REQUIRED_COLUMNS: [&str; 3] = [YEAR_COLUMN, AUTHORS_COLUMN, AFFILIATIONS_COLUMN];

/// One row of the export as read, before any validation. Blank cells come
/// through as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Authors", default)]
    pub authors: Option<String>,
    #[serde(rename = "Authors with affiliations", default)]
    pub affiliations: Option<String>,
}

impl RawRow {
    pub fn new(year: Option<&str>, authors: Option<&str>, affiliations: Option<&str>) -> Self {
        Self {
            year: year.map(String::from),
            authors: authors.map(String::from),
            affiliations: affiliations.map(String::from),
        }
    }

    /// Returns None unless year, authors and affiliations are all present
    pub fn into_record(self) -> Option<Record> {
        let year = self.year.filter(|s| !s.is_empty())?;
        let authors = self.authors.filter(|s| !s.is_empty())?;
        let affiliations = self.affiliations.filter(|s| !s.is_empty())?;
        Some(Record {
            year,
            authors,
            affiliations,
        })
    }
}

/// Drops incomplete rows and keeps count of what it saw.
#[derive(Debug, Default)]
pub struct RowFilter {
    rows_read: usize,
    rows_dropped: usize,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, row: RawRow) -> Option<Record> {
        self.rows_read += 1;
        let record = row.into_record();
        if record.is_none() {
            self.rows_dropped += 1;
            debug!(row = self.rows_read, "Dropping row with missing fields");
        }
        record
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }
}

pub fn filter_rows<I>(rows: I) -> Vec<Record>
where
    I: IntoIterator<Item = RawRow>,
{
    let mut filter = RowFilter::new();
    rows.into_iter().filter_map(|row| filter.accept(row)).collect()
}
