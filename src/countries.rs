use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::Graph;

#[derive(Args)]
pub struct CountriesArgs {
    /// Graph JSON written by `build`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of countries to report (0 = all)
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse graph from {}", path.display()))
}

/// Countries ranked by how many nodes carry them. Ties go alphabetically.
pub fn country_counts(graph: &Graph, limit: usize) -> Vec<CountryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for country in graph.nodes.iter().filter_map(|n| n.country.as_deref()) {
        *counts.entry(country).or_default() += 1;
    }

    let mut ranked: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, count)| CountryCount {
            country: country.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));

    if limit > 0 {
        ranked.truncate(limit);
    }
    ranked
}

pub fn run(args: CountriesArgs) -> Result<()> {
    let graph = load_graph(&args.input)?;
    for entry in country_counts(&graph, args.limit) {
        println!("{}", serde_json::to_string(&entry)?);
    }
    Ok(())
}
