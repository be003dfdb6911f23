use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{Graph, GraphBuilder, GraphSummary, RowFilter};

mod reader;
pub use reader::{find_csv_files, input_files, read_rows};

#[derive(Args)]
pub struct BuildArgs {
    /// Export file (.csv or .csv.gz) or a directory of them
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file for the graph JSON
    #[arg(short, long, default_value = "author_network.json")]
    pub output: PathBuf,

    /// Pretty-print the output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Reads every file in order and builds a single graph from all of them.
pub fn build_from_files(files: &[PathBuf]) -> Result<(Graph, GraphSummary)> {
    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let mut filter = RowFilter::new();
    let mut builder = GraphBuilder::new();

    for file in files {
        for row in read_rows(file)? {
            if let Some(record) = filter.accept(row?) {
                builder.add_record(&record);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let records = builder.records();
    let graph = builder.finish();
    let summary = GraphSummary::new(&filter, records, &graph);
    Ok((graph, summary))
}

pub fn write_graph<P: AsRef<Path>>(path: P, graph: &Graph, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, graph)?;
    } else {
        serde_json::to_writer(&mut writer, graph)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn run(args: BuildArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coauthor_graph=info")),
        )
        .try_init()
        .ok();

    let files = input_files(&args.input)?;
    info!("Found {} files to process", files.len());
    if files.is_empty() {
        warn!("Nothing to build from {}", args.input.display());
        return Ok(());
    }

    let (graph, summary) = build_from_files(&files)?;
    write_graph(&args.output, &graph, args.pretty)?;

    info!(
        rows_read = summary.rows_read,
        rows_dropped = summary.rows_dropped,
        records = summary.records,
        "Filtered input rows"
    );
    info!(
        "Built graph with {} nodes and {} links (max degree {})",
        summary.nodes, summary.links, summary.max_degree
    );
    info!("Output: {}", args.output.display());

    Ok(())
}
