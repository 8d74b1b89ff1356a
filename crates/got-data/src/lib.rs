//! Dataset loading for the Game of Thrones network.
//!
//! Provides the [`DatasetSource`] trait that every backend implements, plus
//! [`CsvDataset`], [`SqliteDataset`] and [`InMemoryDataset`].
//!
//! # Modules
//!
//! - [`error`]: DataError enum with all failure modes
//! - [`traits`]: DatasetSource trait definition
//! - [`validate`]: row checks shared by all backends
//! - [`csv_file`]: CSV file pair backend
//! - [`memory`]: InMemoryDataset implementation
//! - [`schema`]: SQL schema and migration setup
//! - [`sqlite`]: SqliteDataset implementation

pub mod csv_file;
pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod validate;

use std::path::Path;

use got_core::GraphSnapshot;

// Re-export key types for ergonomic use.
pub use csv_file::CsvDataset;
pub use error::DataError;
pub use memory::InMemoryDataset;
pub use sqlite::SqliteDataset;
pub use traits::DatasetSource;

/// Loads the whole network from a node CSV and an edge CSV.
pub fn load_csv(
    nodes_path: impl AsRef<Path>,
    edges_path: impl AsRef<Path>,
) -> Result<GraphSnapshot, DataError> {
    CsvDataset::new(nodes_path.as_ref(), edges_path.as_ref()).load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_csv_reads_a_file_pair() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = dir.path().join("got_nodes.csv");
        let edges = dir.path().join("got_edges.csv");
        std::fs::write(
            &nodes,
            "id,gender,screentime\nTyrion-Lannister,male,293\nCersei-Lannister,female,184\n",
        )
        .unwrap();
        std::fs::write(
            &edges,
            "from,to,weight\nTyrion-Lannister,Cersei-Lannister,46\n",
        )
        .unwrap();

        let whole = load_csv(&nodes, &edges).unwrap();
        assert_eq!(whole.node_count(), 2);
        assert_eq!(whole.edge_count(), 1);
        assert_eq!(whole.nodes()[0].id.as_str(), "Tyrion-Lannister");
        assert_eq!(whole.edges()[0].weight, 46.0);
    }

    #[test]
    fn load_csv_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(dir.path().join("nodes.csv"), dir.path().join("edges.csv")).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }
}
