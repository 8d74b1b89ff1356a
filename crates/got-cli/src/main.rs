//! Game of Thrones network CLI.
//!
//! Provides the `got` binary for inspecting the character network without
//! the dashboard: dataset statistics, neighborhoods, filtered views, and
//! importing the CSV pair into a SQLite database. Results are printed to
//! stdout as JSON; logs go to stderr.
//!
//! Uses the same loaders and session operations as the HTTP server, so
//! both entry points see identical graphs.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use got_core::{FilterUpdate, GraphSession, GraphSnapshot};
use got_data::csv_file::{read_edges, read_nodes};
use got_data::{DataError, DatasetSource, SqliteDataset};

/// Exit code for rows that fail validation.
const EXIT_INVALID_DATA: i32 = 1;
/// Exit code for unreadable sources or unwritable outputs.
const EXIT_IO: i32 = 3;

/// Game of Thrones character network tools.
#[derive(Parser)]
#[command(name = "got", about = "Game of Thrones character network tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to read the network from.
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Node table CSV (`id,gender,screentime`).
    #[arg(long, default_value = "data/got_nodes.csv")]
    nodes: PathBuf,

    /// Edge table CSV (`from,to,weight`).
    #[arg(long, default_value = "data/got_edges.csv")]
    edges: PathBuf,

    /// SQLite database; takes precedence over the CSV paths.
    #[arg(long)]
    db: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the summary table of the whole network.
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the n-hop neighborhood of a character.
    Neighborhood {
        #[command(flatten)]
        source: SourceArgs,

        /// Character id, e.g. `Jon-Snow`.
        #[arg(long)]
        node: String,

        #[arg(long, default_value_t = 1)]
        hops: u32,
    },

    /// Print the network after applying filter criteria.
    Filter {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        min_screentime: Option<f64>,

        #[arg(long)]
        min_edge_weight: Option<f64>,

        /// Gender to keep; repeat for several. Omit to keep all.
        #[arg(long = "gender")]
        genders: Vec<String>,
    },

    /// Import a CSV node/edge pair into a SQLite database.
    Import {
        #[arg(long)]
        nodes: PathBuf,

        #[arg(long)]
        edges: PathBuf,

        /// Destination database file.
        #[arg(long)]
        db: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary { source } => run_summary(&source),
        Commands::Neighborhood { source, node, hops } => run_neighborhood(&source, &node, hops),
        Commands::Filter {
            source,
            min_screentime,
            min_edge_weight,
            genders,
        } => run_filter(&source, min_screentime, min_edge_weight, genders),
        Commands::Import { nodes, edges, db } => run_import(&nodes, &edges, &db),
    };

    let exit_code = match result {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: failed to encode output: {}", e);
                EXIT_IO
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    };
    process::exit(exit_code);
}

fn exit_code_for(err: &DataError) -> i32 {
    match err {
        DataError::InvalidValue { .. }
        | DataError::ConflictingNode { .. }
        | DataError::ConflictingEdge { .. } => EXIT_INVALID_DATA,
        _ => EXIT_IO,
    }
}

fn load_whole(source: &SourceArgs) -> Result<GraphSnapshot, DataError> {
    match &source.db {
        Some(db) => SqliteDataset::open(db)?.load(),
        None => got_data::load_csv(&source.nodes, &source.edges),
    }
}

/// Execute the summary subcommand.
fn run_summary(source: &SourceArgs) -> Result<serde_json::Value, DataError> {
    let whole = load_whole(source)?;
    Ok(json!({
        "nodes": whole.node_count(),
        "edges": whole.edge_count(),
        "summary": whole.summary_table(),
    }))
}

/// Execute the neighborhood subcommand.
fn run_neighborhood(
    source: &SourceArgs,
    node: &str,
    hops: u32,
) -> Result<serde_json::Value, DataError> {
    let whole = load_whole(source)?;
    if !whole.contains_node(node) {
        tracing::warn!(node, "character not in dataset; neighborhood is empty");
    }
    let neighborhood = whole.neighborhood_around_node(node, hops);
    Ok(snapshot_json(&neighborhood))
}

/// Execute the filter subcommand.
fn run_filter(
    source: &SourceArgs,
    min_screentime: Option<f64>,
    min_edge_weight: Option<f64>,
    genders: Vec<String>,
) -> Result<serde_json::Value, DataError> {
    let mut session = GraphSession::new(load_whole(source)?);
    session.update_filter(FilterUpdate {
        min_screentime,
        min_edge_weight,
        node_types_to_include: Some(genders),
    });
    Ok(json!({
        "criteria": session.criteria(),
        "graph": snapshot_json(session.filtered()),
    }))
}

/// Execute the import subcommand.
fn run_import(
    nodes_path: &Path,
    edges_path: &Path,
    db: &str,
) -> Result<serde_json::Value, DataError> {
    let nodes = read_nodes(std::fs::File::open(nodes_path)?)?;
    let edges = read_edges(std::fs::File::open(edges_path)?)?;

    let mut store = SqliteDataset::open(db)?;
    store.save(&nodes, &edges)?;

    let stored = store.load()?;
    Ok(json!({
        "db": db,
        "nodes": stored.node_count(),
        "edges": stored.edge_count(),
    }))
}

fn snapshot_json(snapshot: &GraphSnapshot) -> serde_json::Value {
    json!({
        "nodes": snapshot.nodes(),
        "edges": snapshot.edges(),
        "summary": snapshot.display_summary_table(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(dir: &tempfile::TempDir) -> SourceArgs {
        let nodes = dir.path().join("got_nodes.csv");
        let edges = dir.path().join("got_edges.csv");
        std::fs::write(
            &nodes,
            "id,gender,screentime\nA,male,10\nB,female,20\nC,male,5\n",
        )
        .unwrap();
        std::fs::write(&edges, "from,to,weight\nA,B,3\nB,C,1\n").unwrap();
        SourceArgs {
            nodes,
            edges,
            db: None,
        }
    }

    #[test]
    fn filter_drops_low_screentime_and_dangling_edges() {
        let dir = tempfile::tempdir().unwrap();
        let source = fixture(&dir);
        let out = run_filter(&source, Some(8.0), Some(0.0), vec![]).unwrap();
        assert_eq!(out["graph"]["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(out["graph"]["edges"].as_array().unwrap().len(), 1);
        assert_eq!(out["criteria"]["node_types_to_include"], json!(["female", "male"]));
    }

    #[test]
    fn neighborhood_of_hub() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_neighborhood(&fixture(&dir), "B", 1).unwrap();
        assert_eq!(out["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(out["edges"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn unknown_character_has_empty_neighborhood() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_neighborhood(&fixture(&dir), "Ghost", 2).unwrap();
        assert!(out["nodes"].as_array().unwrap().is_empty());
        assert!(out["edges"].as_array().unwrap().is_empty());
    }

    #[test]
    fn imported_database_serves_as_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = fixture(&dir);
        let db = dir.path().join("got.db");
        let db = db.to_str().unwrap();

        let out = run_import(&source.nodes, &source.edges, db).unwrap();
        assert_eq!(out["nodes"], 3);

        let from_db = SourceArgs {
            db: Some(db.to_string()),
            ..source
        };
        let summary = run_summary(&from_db).unwrap();
        assert_eq!(summary["edges"], 2);
        assert_eq!(summary["summary"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn invalid_rows_map_to_data_exit_code() {
        let err = DataError::ConflictingNode { id: "A".into() };
        assert_eq!(exit_code_for(&err), EXIT_INVALID_DATA);
    }
}
