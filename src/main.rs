use anyhow::Result;
use clap::{Parser, Subcommand};
use coauthor_graph::{build, countries};

#[derive(Parser)]
#[command(name = "coauthor-graph")]
#[command(about = "Build a co-authorship graph from a bibliographic CSV export")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build author nodes and co-authorship links from CSV exports
    Build(build::BuildArgs),
    /// Rank countries by number of authors in a built graph
    Countries(countries::CountriesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Build(args) => build::run(args),
        Commands::Countries(args) => countries::run(args),
    }
}
