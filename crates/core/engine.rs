//! Owning coordinator for the clustering pipeline.
//!
//! `ScholarMap` wires the batch store, the quadtree index, the cluster
//! resolver, and the annotation reconciler together, and owns the
//! previously displayed item set between viewport events. The index sits
//! behind an `RwLock` so a rebuild triggered by a data refresh and a query
//! triggered by a viewport event serialize regardless of which thread the
//! callbacks arrive on.

use crate::config::Config;
use crate::error::{Result, ScholarMapError};
use crate::reconcile::{AnnotationDiff, reconcile};
use crate::spatial::cluster::{DisplayableItem, resolve};
use crate::spatial::quadtree::{QuadTree, RebuildStats};
use crate::store::PointStore;
use parking_lot::RwLock;
use scholarmap_types::geo::Point;
use scholarmap_types::point::SpatialPoint;
use scholarmap_types::region::Region;

/// Counters describing the engine's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Loaded batches
    pub batches: usize,
    /// Points in the active index
    pub indexed_points: usize,
    /// Items currently on the map surface
    pub displayed_items: usize,
}

/// Clustering engine for the scholars map.
///
/// The map surface feeds viewport changes in; the engine answers with the
/// minimal add/remove sets that keep the displayed annotations in sync.
/// The data source feeds per-batch point sets in; activating a batch
/// rebuilds the index wholesale.
///
/// # Examples
///
/// ```rust
/// use scholarmap::{Point, Region, ScholarMap, SpatialPoint};
///
/// let map = ScholarMap::new();
/// map.load_batch("2016", vec![
///     SpatialPoint::new("Ada Lovelace", Point::new(-0.13, 51.51), "Ada Lovelace", "London"),
///     SpatialPoint::new("Alan Turing", Point::new(-2.24, 53.48), "Alan Turing", "Manchester"),
/// ]);
/// map.activate_batch("2016")?;
///
/// let viewport = Region::new(-5.0, 49.0, 5.0, 55.0);
/// let diff = map.viewport_changed(&viewport);
/// assert_eq!(diff.to_add.len(), 2);
///
/// // The same viewport again changes nothing.
/// assert!(map.viewport_changed(&viewport).is_empty());
/// # Ok::<(), scholarmap::ScholarMapError>(())
/// ```
pub struct ScholarMap {
    config: Config,
    store: RwLock<PointStore>,
    index: RwLock<QuadTree>,
    active_batch: RwLock<Option<String>>,
    displayed: RwLock<Vec<DisplayableItem>>,
}

impl ScholarMap {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let index = QuadTree::with_capacity(Region::world(), config.node_capacity);
        Self {
            config,
            store: RwLock::new(PointStore::new()),
            index: RwLock::new(index),
            active_batch: RwLock::new(None),
            displayed: RwLock::new(Vec::new()),
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace a batch's point set wholesale.
    ///
    /// Refreshing the currently active batch rebuilds the index so the
    /// next viewport event reflects the new data.
    pub fn load_batch(&self, batch: impl Into<String>, points: Vec<SpatialPoint>) {
        let batch = batch.into();
        self.store.write().set_batch(batch.clone(), points);

        if self.active_batch.read().as_deref() == Some(batch.as_str()) {
            let points = self
                .store
                .read()
                .batch(&batch)
                .map(<[_]>::to_vec)
                .unwrap_or_default();
            let stats = self.index.write().rebuild(Region::world(), points);
            log::debug!(
                "Refreshed active batch {batch:?}: {} points indexed",
                stats.indexed
            );
        }
    }

    /// Rebuild the index from a previously loaded batch and make it the
    /// active one.
    pub fn activate_batch(&self, batch: &str) -> Result<RebuildStats> {
        let points = self
            .store
            .read()
            .batch(batch)
            .map(<[_]>::to_vec)
            .ok_or_else(|| ScholarMapError::UnknownBatch(batch.to_string()))?;

        *self.active_batch.write() = Some(batch.to_string());
        let stats = self.index.write().rebuild(Region::world(), points);
        log::debug!(
            "Activated batch {batch:?}: {} points indexed, {} dropped",
            stats.indexed,
            stats.dropped
        );
        Ok(stats)
    }

    /// Name of the currently active batch, if any.
    pub fn active_batch(&self) -> Option<String> {
        self.active_batch.read().clone()
    }

    /// Handle a viewport change from the map surface.
    ///
    /// Resolves the displayable items for `viewport` (with the minimum
    /// non-clustered span derived from the smaller viewport span divided
    /// by the configured divisor), diffs them against what is currently
    /// displayed, retains the new set, and returns the add/remove
    /// instructions.
    pub fn viewport_changed(&self, viewport: &Region) -> AnnotationDiff {
        let items = self.resolve_viewport(viewport);

        let mut displayed = self.displayed.write();
        let diff = reconcile(&displayed, &items);
        *displayed = items;
        diff
    }

    /// Resolve the displayable items for a viewport without touching the
    /// displayed set.
    pub fn resolve_viewport(&self, viewport: &Region) -> Vec<DisplayableItem> {
        let span = viewport.lat_span().min(viewport.lon_span()) / self.config.span_divisor;
        let index = self.index.read();
        resolve(&index, viewport, span, self.config.padding_factor)
    }

    /// Up to `limit` indexed points nearest to `location`, ascending by
    /// haversine distance in meters.
    ///
    /// This is how a tapped cluster marker expands into its member pins:
    /// ask for the cluster's member count around its centroid.
    pub fn neighbours_for_location(
        &self,
        location: &Point,
        limit: usize,
    ) -> Vec<(SpatialPoint, f64)> {
        self.index.read().nearest(location, limit)
    }

    /// Current engine counters.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            batches: self.store.read().batch_count(),
            indexed_points: self.index.read().len(),
            displayed_items: self.displayed.read().len(),
        }
    }
}

impl Default for ScholarMap {
    fn default() -> Self {
        Self::new()
    }
}
