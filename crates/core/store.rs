//! Batch-grouped storage of display-eligible points.
//!
//! The data source hands the engine one point set per conference batch
//! (year). Each refresh replaces a batch wholesale; there is no partial
//! mutation of stored entries.

use rustc_hash::FxHashMap;
use scholarmap_types::point::SpatialPoint;

/// In-memory store of points, keyed by batch name.
#[derive(Debug, Default)]
pub struct PointStore {
    batches: FxHashMap<String, Vec<SpatialPoint>>,
}

impl PointStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            batches: FxHashMap::default(),
        }
    }

    /// Replace a batch's point set wholesale.
    ///
    /// Returns the previous set if the batch already existed.
    pub fn set_batch(
        &mut self,
        batch: impl Into<String>,
        points: Vec<SpatialPoint>,
    ) -> Option<Vec<SpatialPoint>> {
        self.batches.insert(batch.into(), points)
    }

    /// Get the points of a batch, if loaded.
    pub fn batch(&self, batch: &str) -> Option<&[SpatialPoint]> {
        self.batches.get(batch).map(Vec::as_slice)
    }

    /// Remove a batch entirely.
    pub fn remove_batch(&mut self, batch: &str) -> Option<Vec<SpatialPoint>> {
        self.batches.remove(batch)
    }

    /// Names of all loaded batches, sorted for stable iteration.
    pub fn batch_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.batches.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of loaded batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Total number of points across all batches.
    pub fn total_points(&self) -> usize {
        self.batches.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarmap_types::geo::Point;

    fn point(key: &str, x: f64, y: f64) -> SpatialPoint {
        SpatialPoint::new(key, Point::new(x, y), key, "")
    }

    #[test]
    fn test_set_and_get_batch() {
        let mut store = PointStore::new();
        store.set_batch("2016", vec![point("a", 0.0, 0.0), point("b", 1.0, 1.0)]);

        assert_eq!(store.batch_count(), 1);
        assert_eq!(store.batch("2016").map(<[_]>::len), Some(2));
        assert!(store.batch("2015").is_none());
    }

    #[test]
    fn test_set_batch_replaces_wholesale() {
        let mut store = PointStore::new();
        store.set_batch("2016", vec![point("a", 0.0, 0.0)]);
        let previous = store.set_batch("2016", vec![point("b", 1.0, 1.0), point("c", 2.0, 2.0)]);

        assert_eq!(previous.map(|p| p.len()), Some(1));
        let current = store.batch("2016").unwrap();
        assert_eq!(current.len(), 2);
        assert!(current.iter().all(|p| p.key != "a"));
    }

    #[test]
    fn test_batch_names_sorted() {
        let mut store = PointStore::new();
        store.set_batch("2016", vec![]);
        store.set_batch("2011", vec![point("a", 0.0, 0.0)]);
        store.set_batch("2014", vec![]);

        assert_eq!(store.batch_names(), vec!["2011", "2014", "2016"]);
        assert_eq!(store.total_points(), 1);
    }

    #[test]
    fn test_remove_batch() {
        let mut store = PointStore::new();
        store.set_batch("2016", vec![point("a", 0.0, 0.0)]);
        assert!(store.remove_batch("2016").is_some());
        assert!(store.remove_batch("2016").is_none());
        assert_eq!(store.batch_count(), 0);
    }
}
