//! Filter criteria and their incremental update rule.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Thresholds and categories that narrow the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_screentime: f64,
    pub min_edge_weight: f64,
    /// Genders to keep, in first-appearance order.
    pub node_types_to_include: IndexSet<String>,
}

impl FilterCriteria {
    pub fn new(
        min_screentime: f64,
        min_edge_weight: f64,
        node_types_to_include: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        FilterCriteria {
            min_screentime,
            min_edge_weight,
            node_types_to_include: node_types_to_include.into_iter().map(Into::into).collect(),
        }
    }

    /// Criteria that keep every node and edge of a dataset with `genders`.
    pub fn permit_all(genders: impl IntoIterator<Item = impl Into<String>>) -> Self {
        FilterCriteria::new(0.0, 0.0, genders)
    }

    pub fn includes_gender(&self, gender: &str) -> bool {
        self.node_types_to_include.contains(gender)
    }

    /// Merges `update` into these criteria.
    ///
    /// Unset fields keep their value. An empty gender list is not "include
    /// nothing": it resets to `all_genders`.
    pub fn apply_update<I, S>(&mut self, update: FilterUpdate, all_genders: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(v) = update.min_screentime {
            self.min_screentime = v;
        }
        if let Some(v) = update.min_edge_weight {
            self.min_edge_weight = v;
        }
        if let Some(types) = update.node_types_to_include {
            self.node_types_to_include = if types.is_empty() {
                all_genders.into_iter().map(Into::into).collect()
            } else {
                types.into_iter().collect()
            };
        }
    }
}

/// A partial criteria update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterUpdate {
    #[serde(default)]
    pub min_screentime: Option<f64>,
    #[serde(default)]
    pub min_edge_weight: Option<f64>,
    #[serde(default)]
    pub node_types_to_include: Option<Vec<String>>,
}

impl FilterUpdate {
    pub fn min_screentime(mut self, v: f64) -> Self {
        self.min_screentime = Some(v);
        self
    }

    pub fn min_edge_weight(mut self, v: f64) -> Self {
        self.min_edge_weight = Some(v);
        self
    }

    pub fn node_types(mut self, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.node_types_to_include = Some(types.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 2] = ["male", "female"];

    #[test]
    fn unset_fields_are_preserved() {
        let mut c = FilterCriteria::new(5.0, 2.0, ["female"]);
        c.apply_update(FilterUpdate::default().min_edge_weight(7.0), ALL);
        assert_eq!(c.min_screentime, 5.0);
        assert_eq!(c.min_edge_weight, 7.0);
        assert!(c.includes_gender("female"));
        assert!(!c.includes_gender("male"));
    }

    #[test]
    fn empty_gender_list_resets_to_all() {
        let mut c = FilterCriteria::new(0.0, 0.0, ["female"]);
        c.apply_update(FilterUpdate::default().node_types(Vec::<String>::new()), ALL);
        assert!(c.includes_gender("male"));
        assert!(c.includes_gender("female"));
    }

    #[test]
    fn update_deserializes_with_missing_fields() {
        let update: FilterUpdate = serde_json::from_str(r#"{"min_screentime": 3.5}"#).unwrap();
        assert_eq!(update.min_screentime, Some(3.5));
        assert_eq!(update.min_edge_weight, None);
        assert_eq!(update.node_types_to_include, None);
    }
}
