use std::collections::HashSet;

use crate::extract::{extract_authors, AuthorTable};
use crate::{Graph, GraphSummary, Link, Node, RawRow, Record, RowFilter};

/// Every i < j pair of the record's valid authors, in index order.
pub fn pair_links(valid_authors: &[String]) -> Vec<Link> {
    let n = valid_authors.len();
    let mut links = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            links.push(Link {
                source: valid_authors[i].clone(),
                target: valid_authors[j].clone(),
            });
        }
    }
    links
}

/// Owns the author table and the link list for one run.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    authors: AuthorTable,
    links: Vec<Link>,
    records: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts and links a single record. Returns the record's valid authors.
    pub fn add_record(&mut self, record: &Record) -> Vec<String> {
        let valid_authors = extract_authors(record, &mut self.authors);
        self.links.extend(pair_links(&valid_authors));
        self.records += 1;
        valid_authors
    }

    pub fn authors(&self) -> &AuthorTable {
        &self.authors
    }

    pub fn records(&self) -> usize {
        self.records
    }

    /// Keeps only authors that show up in at least one link.
    pub fn finish(self) -> Graph {
        let GraphBuilder { authors, links, .. } = self;

        let nodes = {
            let used_authors: HashSet<&str> = links
                .iter()
                .flat_map(|link| [link.source.as_str(), link.target.as_str()])
                .collect();

            authors
                .into_entries()
                .into_iter()
                .filter(|(id, _)| used_authors.contains(id.as_str()))
                .map(|(id, aggregate)| Node {
                    id,
                    affiliation: aggregate.affiliation,
                    country: aggregate.country,
                    degree: aggregate.degree,
                })
                .collect()
        };

        Graph { nodes, links }
    }
}

/// Runs filter, extraction and linking over in-memory rows.
pub fn build_graph<I>(rows: I) -> (Graph, GraphSummary)
where
    I: IntoIterator<Item = RawRow>,
{
    let mut filter = RowFilter::new();
    let mut builder = GraphBuilder::new();

    for row in rows {
        if let Some(record) = filter.accept(row) {
            builder.add_record(&record);
        }
    }

    let records = builder.records();
    let graph = builder.finish();
    let summary = GraphSummary::new(&filter, records, &graph);
    (graph, summary)
}
