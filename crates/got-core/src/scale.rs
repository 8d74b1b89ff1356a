//! Linear scaling of screentime and edge weight onto visual sizes.
//!
//! A [`ScaleBounds`] is the observed `[min, max]` domain of an attribute in a
//! snapshot; a [`SizeRange`] is the target range in renderer units.

use serde::{Deserialize, Serialize};

/// Default node size range: screentime min maps to 20, max to 50.
pub const NODE_SIZE_RANGE: SizeRange = SizeRange { min: 20.0, max: 50.0 };

/// Default edge width range: weight min maps to 2, max to 15.
pub const EDGE_WIDTH_RANGE: SizeRange = SizeRange { min: 2.0, max: 15.0 };

/// Target range of a linear scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Observed domain of an attribute. Both ends are zero for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl ScaleBounds {
    pub fn new(min: f64, max: f64) -> Self {
        ScaleBounds { min, max }
    }

    /// Computes bounds over `values`, or zero bounds if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return ScaleBounds::default();
        };
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        ScaleBounds { min, max }
    }

    /// Returns `true` when the domain has no width and cannot be scaled.
    pub fn is_degenerate(&self) -> bool {
        let width = self.max - self.min;
        width == 0.0 || !width.is_finite()
    }

    /// Maps `value` linearly so that `min -> range.min` and `max -> range.max`.
    ///
    /// Values outside the domain extrapolate along the same line. A
    /// degenerate domain maps everything to the midpoint of `range`.
    pub fn scale(&self, value: f64, range: SizeRange) -> f64 {
        if self.is_degenerate() {
            return range.midpoint();
        }
        let t = (value - self.min) / (self.max - self.min);
        range.min + t * (range.max - range.min)
    }
}

/// Screentime and edge-weight bounds of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphBounds {
    pub screentime: ScaleBounds,
    pub edge_weight: ScaleBounds,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_values_give_zero_bounds() {
        let b = ScaleBounds::from_values(Vec::<f64>::new());
        assert_eq!(b, ScaleBounds::new(0.0, 0.0));
    }

    #[test]
    fn bounds_track_min_and_max() {
        let b = ScaleBounds::from_values([5.0, 20.0, 10.0]);
        assert_eq!(b, ScaleBounds::new(5.0, 20.0));
    }

    #[test]
    fn endpoints_map_exactly() {
        let b = ScaleBounds::new(5.0, 20.0);
        assert_eq!(b.scale(5.0, NODE_SIZE_RANGE), 20.0);
        assert_eq!(b.scale(20.0, NODE_SIZE_RANGE), 50.0);
        assert_eq!(b.scale(12.5, NODE_SIZE_RANGE), 35.0);
    }

    #[test]
    fn degenerate_domain_returns_midpoint() {
        let b = ScaleBounds::new(7.0, 7.0);
        assert!(b.is_degenerate());
        assert_eq!(b.scale(7.0, EDGE_WIDTH_RANGE), 8.5);
        assert_eq!(ScaleBounds::default().scale(0.0, NODE_SIZE_RANGE), 35.0);
    }

    proptest! {
        #[test]
        fn scale_is_monotone(
            lo in 0.0f64..1000.0,
            width in 0.001f64..1000.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let bounds = ScaleBounds::new(lo, lo + width);
            let (x, y) = if a <= b { (a, b) } else { (b, a) };
            let vx = lo + x * width;
            let vy = lo + y * width;
            prop_assert!(bounds.scale(vx, NODE_SIZE_RANGE) <= bounds.scale(vy, NODE_SIZE_RANGE));
        }

        #[test]
        fn scale_hits_range_ends(lo in 0.0f64..1000.0, width in 0.001f64..1000.0) {
            let bounds = ScaleBounds::new(lo, lo + width);
            prop_assert_eq!(bounds.scale(bounds.min, EDGE_WIDTH_RANGE), EDGE_WIDTH_RANGE.min);
            prop_assert_eq!(bounds.scale(bounds.max, EDGE_WIDTH_RANGE), EDGE_WIDTH_RANGE.max);
        }
    }
}
