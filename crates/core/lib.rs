//! Quadtree-backed map clustering engine for the scholars directory.
//!
//! ## Features
//! - **Spatial indexing**: region quadtree over lon/lat points with pruned
//!   rectangular queries and top-k nearest-neighbour selection
//! - **Viewport clustering**: greedy merge of points closer than a
//!   zoom-derived angular span into aggregate markers
//! - **Annotation reconciliation**: minimal add/remove diffing between
//!   viewport events, so unchanged pins never flicker
//! - **Batch store**: per-conference-year point sets, replaced wholesale
//!   on refresh
//!
//! The engine renders nothing itself: a data source pushes point batches
//! in, a map surface pushes viewport changes in and applies the returned
//! add/remove sets.
//!
//! ```rust
//! use scholarmap::{Point, Region, ScholarMap, SpatialPoint};
//!
//! let map = ScholarMap::new();
//! map.load_batch("2016", vec![
//!     SpatialPoint::new("Ada Lovelace", Point::new(-0.13, 51.51), "Ada Lovelace", "London"),
//!     SpatialPoint::new("Alan Turing", Point::new(-2.24, 53.48), "Alan Turing", "Manchester"),
//! ]);
//! map.activate_batch("2016")?;
//!
//! let diff = map.viewport_changed(&Region::new(-5.0, 49.0, 5.0, 55.0));
//! assert_eq!(diff.to_add.len(), 2);
//! assert!(diff.to_remove.is_empty());
//! # Ok::<(), scholarmap::ScholarMapError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod reconcile;
pub mod spatial;
pub mod store;

pub use config::Config;
pub use engine::{EngineStats, ScholarMap};
pub use error::{Result, ScholarMapError};
pub use reconcile::{AnnotationDiff, reconcile};
pub use spatial::cluster::{ClusterAggregate, DisplayableItem, resolve};
pub use spatial::quadtree::{DEFAULT_NODE_CAPACITY, QuadTree, RebuildStats};
pub use store::PointStore;

pub use geo::Rect;
pub use scholarmap_types::geo::Point;
pub use scholarmap_types::point::SpatialPoint;
pub use scholarmap_types::region::Region;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Config, Result, ScholarMap, ScholarMapError};

    pub use crate::{AnnotationDiff, ClusterAggregate, DisplayableItem};

    pub use crate::{Point, Region, SpatialPoint};

    pub use crate::{PointStore, QuadTree, RebuildStats};
}
