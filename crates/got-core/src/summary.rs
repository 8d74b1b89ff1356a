//! Summary statistics of a snapshot and their tabular form.

use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::node::Node;

/// Field names in table order. The display table shows a subset.
pub const FIELD_NUM_NODES: &str = "Number of nodes";
pub const FIELD_NUM_EDGES: &str = "Number of edges";
pub const FIELD_SCREENTIME_SUM: &str = "screentime_sum";
pub const FIELD_SCREENTIME_MEAN: &str = "screentime_mean";
pub const FIELD_SCREENTIME_MEDIAN: &str = "screentime_median";
pub const FIELD_WEIGHT_SUM: &str = "weight_sum";
pub const FIELD_WEIGHT_MEAN: &str = "weight_mean";
pub const FIELD_WEIGHT_MEDIAN: &str = "weight_median";

/// Fields shown in the dashboard statistics table.
pub const DISPLAY_FIELDS: [&str; 6] = [
    FIELD_NUM_NODES,
    FIELD_NUM_EDGES,
    FIELD_SCREENTIME_SUM,
    FIELD_SCREENTIME_MEDIAN,
    FIELD_WEIGHT_SUM,
    FIELD_WEIGHT_MEDIAN,
];

/// Sum, mean and median of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnStats {
    pub sum: f64,
    /// `None` for an empty column.
    pub mean: Option<f64>,
    /// `None` for an empty column.
    pub median: Option<f64>,
}

impl ColumnStats {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return ColumnStats::default();
        }
        let sum: f64 = values.iter().sum();
        let mean = sum / values.len() as f64;

        values.sort_by(|a, b| a.total_cmp(b));
        let mid = values.len() / 2;
        let median = if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        };

        ColumnStats {
            sum,
            mean: Some(mean),
            median: Some(median),
        }
    }
}

/// Counts and column statistics of a snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub screentime: ColumnStats,
    pub weight: ColumnStats,
}

impl GraphSummary {
    pub fn compute(nodes: &[Node], edges: &[Edge]) -> Self {
        GraphSummary {
            node_count: nodes.len(),
            edge_count: edges.len(),
            screentime: ColumnStats::from_values(nodes.iter().map(|n| n.screentime)),
            weight: ColumnStats::from_values(edges.iter().map(|e| e.weight)),
        }
    }

    /// All eight rows in table order.
    pub fn rows(&self) -> Vec<SummaryRow> {
        vec![
            SummaryRow::count(FIELD_NUM_NODES, self.node_count),
            SummaryRow::count(FIELD_NUM_EDGES, self.edge_count),
            SummaryRow::number(FIELD_SCREENTIME_SUM, Some(self.screentime.sum)),
            SummaryRow::number(FIELD_SCREENTIME_MEAN, self.screentime.mean),
            SummaryRow::number(FIELD_SCREENTIME_MEDIAN, self.screentime.median),
            SummaryRow::number(FIELD_WEIGHT_SUM, Some(self.weight.sum)),
            SummaryRow::number(FIELD_WEIGHT_MEAN, self.weight.mean),
            SummaryRow::number(FIELD_WEIGHT_MEDIAN, self.weight.median),
        ]
    }

    /// The subset of rows named in [`DISPLAY_FIELDS`], in that order.
    pub fn display_rows(&self) -> Vec<SummaryRow> {
        let rows = self.rows();
        DISPLAY_FIELDS
            .iter()
            .filter_map(|field| rows.iter().find(|r| r.field == *field).cloned())
            .collect()
    }
}

/// Value cell of a summary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Count(usize),
    Number(f64),
    /// Statistic undefined for an empty column. Serializes as `null`.
    Missing,
}

/// One `{Field Description, Value}` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Field Description")]
    pub field: String,
    #[serde(rename = "Value")]
    pub value: SummaryValue,
}

impl SummaryRow {
    fn count(field: &str, n: usize) -> Self {
        SummaryRow {
            field: field.to_string(),
            value: SummaryValue::Count(n),
        }
    }

    fn number(field: &str, v: Option<f64>) -> Self {
        SummaryRow {
            field: field.to_string(),
            value: v.map_or(SummaryValue::Missing, SummaryValue::Number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_even_and_odd_columns() {
        assert_eq!(ColumnStats::from_values([3.0, 1.0, 2.0]).median, Some(2.0));
        assert_eq!(ColumnStats::from_values([4.0, 1.0, 3.0, 2.0]).median, Some(2.5));
    }

    #[test]
    fn empty_column_has_zero_sum_and_no_mean() {
        let stats = ColumnStats::from_values(std::iter::empty());
        assert_eq!(stats.sum, 0.0);
        assert_eq!(stats.mean, None);
        assert_eq!(stats.median, None);
    }

    #[test]
    fn display_rows_follow_display_fields() {
        let nodes = vec![Node::new("A", "male", 10.0), Node::new("B", "female", 20.0)];
        let edges = vec![Edge::new("A", "B", 3.0)];
        let summary = GraphSummary::compute(&nodes, &edges);

        let fields: Vec<_> = summary.display_rows().into_iter().map(|r| r.field).collect();
        assert_eq!(fields, DISPLAY_FIELDS.to_vec());
        assert_eq!(summary.rows().len(), 8);
    }

    #[test]
    fn rows_serialize_with_table_headers() {
        let summary = GraphSummary::compute(&[], &[]);
        let json = serde_json::to_value(summary.rows()).unwrap();
        assert_eq!(json[0]["Field Description"], "Number of nodes");
        assert_eq!(json[0]["Value"], 0);
        assert!(json[3]["Value"].is_null());
    }
}
