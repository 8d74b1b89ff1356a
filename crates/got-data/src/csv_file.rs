//! CSV backend: one file of nodes, one file of edges.
//!
//! Columns are matched by header name. The node file needs
//! `id,gender,screentime`, the edge file `from,to,weight`; any other columns
//! (such as a scraped image URL) are ignored.

use std::io::Read;
use std::path::{Path, PathBuf};

use got_core::{Edge, Node};
use serde::de::DeserializeOwned;

use crate::error::DataError;
use crate::traits::DatasetSource;

/// A dataset stored as a pair of CSV files.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    nodes_path: PathBuf,
    edges_path: PathBuf,
}

impl CsvDataset {
    pub fn new(nodes_path: impl Into<PathBuf>, edges_path: impl Into<PathBuf>) -> Self {
        CsvDataset {
            nodes_path: nodes_path.into(),
            edges_path: edges_path.into(),
        }
    }
}

impl DatasetSource for CsvDataset {
    fn load_tables(&self) -> Result<(Vec<Node>, Vec<Edge>), DataError> {
        tracing::debug!(
            nodes = %self.nodes_path.display(),
            edges = %self.edges_path.display(),
            "reading csv dataset"
        );
        let nodes = read_rows(csv::Reader::from_path(&self.nodes_path)?)?;
        let edges = read_rows(csv::Reader::from_path(&self.edges_path)?)?;
        Ok((nodes, edges))
    }
}

/// Reads node rows from any CSV reader.
pub fn read_nodes<R: Read>(reader: R) -> Result<Vec<Node>, DataError> {
    read_rows(csv::Reader::from_reader(reader))
}

/// Reads edge rows from any CSV reader.
pub fn read_edges<R: Read>(reader: R) -> Result<Vec<Edge>, DataError> {
    read_rows(csv::Reader::from_reader(reader))
}

fn read_rows<R: Read, T: DeserializeOwned>(mut reader: csv::Reader<R>) -> Result<Vec<T>, DataError> {
    reader
        .deserialize()
        .map(|row| row.map_err(DataError::from))
        .collect()
}

/// Writes rows back out in the column layout [`CsvDataset`] reads.
pub fn write_tables(
    nodes_path: &Path,
    edges_path: &Path,
    nodes: &[Node],
    edges: &[Edge],
) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(nodes_path)?;
    for node in nodes {
        writer.serialize(node)?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(edges_path)?;
    for edge in edges {
        writer.serialize(edge)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODES: &str = "id,gender,screentime,node_image_url\n\
        Jon-Snow,male,268.75,http://img/jon\n\
        Sansa-Stark,female,196.0,http://img/sansa\n\
        Hodor,male,12.5,\n";

    const EDGES: &str = "from,to,weight\n\
        Jon-Snow,Sansa-Stark,41\n\
        Hodor,Jon-Snow,3\n\
        Hodor,Ghost,1\n";

    #[test]
    fn reads_rows_and_ignores_extra_columns() {
        let nodes = read_nodes(NODES.as_bytes()).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], Node::new("Jon-Snow", "male", 268.75));

        let edges = read_edges(EDGES.as_bytes()).unwrap();
        assert_eq!(edges[0], Edge::new("Jon-Snow", "Sansa-Stark", 41.0));
    }

    #[test]
    fn missing_column_is_a_csv_error() {
        let err = read_nodes("id,screentime\nA,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn load_from_files_builds_consistent_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let nodes_path = dir.path().join("got_nodes.csv");
        let edges_path = dir.path().join("got_edges.csv");
        std::fs::write(&nodes_path, NODES).unwrap();
        std::fs::write(&edges_path, EDGES).unwrap();

        let snapshot = CsvDataset::new(&nodes_path, &edges_path).load().unwrap();
        assert_eq!(snapshot.node_count(), 3);
        // Hodor -> Ghost references a character with no node row.
        assert_eq!(snapshot.edge_count(), 2);
        assert!(snapshot.is_consistent());
        assert_eq!(snapshot.nodes()[0].id.as_str(), "Jon-Snow");
    }

    #[test]
    fn conflicting_edge_rows_fail_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let nodes_path = dir.path().join("got_nodes.csv");
        let edges_path = dir.path().join("got_edges.csv");
        std::fs::write(&nodes_path, "id,gender,screentime\nA,male,1\nB,female,2\n").unwrap();
        std::fs::write(&edges_path, "from,to,weight\nA,B,1\nA,B,9\n").unwrap();

        let err = CsvDataset::new(&nodes_path, &edges_path).load().unwrap_err();
        assert!(matches!(err, DataError::ConflictingEdge { .. }));
    }

    #[test]
    fn written_tables_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let nodes_path = dir.path().join("n.csv");
        let edges_path = dir.path().join("e.csv");
        let nodes = vec![Node::new("A", "female", 2.0)];
        let edges = vec![Edge::new("A", "A", 1.5)];
        write_tables(&nodes_path, &edges_path, &nodes, &edges).unwrap();

        let (n, e) = CsvDataset::new(&nodes_path, &edges_path).load_tables().unwrap();
        assert_eq!(n, nodes);
        assert_eq!(e, edges);
    }

    #[test]
    fn missing_file_fails() {
        let err = CsvDataset::new("/nonexistent/nodes.csv", "/nonexistent/edges.csv")
            .load()
            .unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }
}
