use serde::{Deserialize, Serialize};

pub mod build;
pub mod countries;
pub mod extract;
pub mod filter;
pub mod graph;

pub use filter::{RawRow, RowFilter};
pub use graph::GraphBuilder;

/// A publication row that survived filtering. The year is only checked for
/// presence, so it is kept as written in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub year: String,
    pub authors: String,
    pub affiliations: String,
}

/// Running per-author state. Affiliation and country always hold the values
/// from the most recently processed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorAggregate {
    pub affiliation: Option<String>,
    pub country: Option<String>,
    pub degree: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub affiliation: Option<String>,
    pub country: Option<String>,
    pub degree: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub records: usize,
    pub links: usize,
    pub nodes: usize,
    pub max_degree: usize,
}

impl GraphSummary {
    pub fn new(filter: &RowFilter, records: usize, graph: &Graph) -> Self {
        Self {
            rows_read: filter.rows_read(),
            rows_dropped: filter.rows_dropped(),
            records,
            links: graph.links.len(),
            nodes: graph.nodes.len(),
            max_degree: graph.nodes.iter().map(|n| n.degree).max().unwrap_or(0),
        }
    }
}
