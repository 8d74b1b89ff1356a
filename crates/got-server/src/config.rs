//! Server configuration read from environment variables.
//!
//! | variable          | default               |
//! |-------------------|-----------------------|
//! | `GOT_NODES_PATH`  | `data/got_nodes.csv`  |
//! | `GOT_EDGES_PATH`  | `data/got_edges.csv`  |
//! | `GOT_DB_PATH`     | unset (use the CSVs)  |
//! | `GOT_IMAGE_DIR`   | `assets/portraits`    |
//! | `GOT_PORT`        | `8050`                |
//! | `GOT_SESSION_TTL_SECS` | `3600`           |

use std::path::PathBuf;
use std::time::Duration;

/// Where the dataset lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetLocation {
    Csv { nodes: PathBuf, edges: PathBuf },
    Sqlite { path: String },
}

/// Startup configuration of the dashboard server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub dataset: DatasetLocation,
    pub image_dir: PathBuf,
    pub port: u16,
    /// Idle time after which a dashboard session is dropped.
    pub session_ttl: Duration,
}

fn default_csv_paths() -> (PathBuf, PathBuf) {
    (
        PathBuf::from("data/got_nodes.csv"),
        PathBuf::from("data/got_edges.csv"),
    )
}

impl Default for ServerConfig {
    fn default() -> Self {
        let (nodes, edges) = default_csv_paths();
        ServerConfig {
            dataset: DatasetLocation::Csv { nodes, edges },
            image_dir: PathBuf::from("assets/portraits"),
            port: 8050,
            session_ttl: Duration::from_secs(3600),
        }
    }
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unparseable
    /// numbers fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();

        let dataset = match lookup("GOT_DB_PATH") {
            Some(path) if !path.is_empty() => DatasetLocation::Sqlite { path },
            _ => {
                let (default_nodes, default_edges) = default_csv_paths();
                DatasetLocation::Csv {
                    nodes: lookup("GOT_NODES_PATH")
                        .map(PathBuf::from)
                        .unwrap_or(default_nodes),
                    edges: lookup("GOT_EDGES_PATH")
                        .map(PathBuf::from)
                        .unwrap_or(default_edges),
                }
            }
        };

        ServerConfig {
            dataset,
            image_dir: lookup("GOT_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            port: lookup("GOT_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            session_ttl: lookup("GOT_SESSION_TTL_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_ttl),
        }
    }
}
