//! SQLite implementation of [`DatasetSource`].
//!
//! [`SqliteDataset`] keeps the node and edge tables in a SQLite database with
//! automatic schema migrations. [`SqliteDataset::save`] replaces both tables
//! in a single transaction.

use rusqlite::{params, Connection};

use got_core::{Edge, Node, NodeId};

use crate::error::DataError;
use crate::traits::DatasetSource;
use crate::validate::validate_tables;

/// SQLite-backed dataset.
pub struct SqliteDataset {
    conn: Connection,
}

impl SqliteDataset {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn open(path: &str) -> Result<Self, DataError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteDataset { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, DataError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteDataset { conn })
    }

    /// Replaces the stored dataset with `nodes` and `edges`.
    ///
    /// Rows are validated first; exact duplicates are stored once.
    pub fn save(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<(), DataError> {
        validate_tables(nodes, edges)?;

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM edges", [])?;
        tx.execute("DELETE FROM nodes", [])?;
        {
            let mut insert_node = tx.prepare(
                "INSERT OR IGNORE INTO nodes (id, gender, screentime) VALUES (?1, ?2, ?3)",
            )?;
            for node in nodes {
                insert_node.execute(params![node.id.as_str(), node.gender, node.screentime])?;
            }

            // Repeated (from, to) pairs are exact duplicates after validation.
            let mut insert_edge = tx.prepare(
                "INSERT OR IGNORE INTO edges (source, target, weight) VALUES (?1, ?2, ?3)",
            )?;
            for edge in edges {
                insert_edge.execute(params![edge.from.as_str(), edge.to.as_str(), edge.weight])?;
            }
        }
        tx.commit()?;

        tracing::info!(
            nodes = nodes.len(),
            edges = edges.len(),
            "dataset saved to sqlite"
        );
        Ok(())
    }
}

impl DatasetSource for SqliteDataset {
    fn load_tables(&self) -> Result<(Vec<Node>, Vec<Edge>), DataError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, gender, screentime FROM nodes ORDER BY rowid")?;
        let nodes = stmt
            .query_map([], |row| {
                Ok(Node {
                    id: NodeId(row.get(0)?),
                    gender: row.get(1)?,
                    screentime: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self
            .conn
            .prepare("SELECT source, target, weight FROM edges ORDER BY rowid")?;
        let edges = stmt
            .query_map([], |row| {
                Ok(Edge {
                    from: NodeId(row.get(0)?),
                    to: NodeId(row.get(1)?),
                    weight: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok((nodes, edges))
    }
}
