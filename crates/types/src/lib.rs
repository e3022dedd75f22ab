//! # scholarmap-types
//!
//! Core geographic data types for the scholarmap clustering engine.
//!
//! This crate provides the fundamental values the engine is built from:
//!
//! - **`Point`**: a longitude/latitude coordinate with distance helpers
//! - **`Region`**: an axis-aligned lon/lat rectangle (map viewport, index
//!   bounds, query window)
//! - **`SpatialPoint`**: a single mappable directory entry (identity,
//!   coordinate, display title/subtitle)
//!
//! All types are serializable with Serde and built on top of the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use scholarmap_types::geo::Point;
//! use scholarmap_types::region::Region;
//!
//! let moscone = Point::new(-122.4011, 37.7845);
//! let bay_area = Region::new(-123.0, 37.0, -121.5, 38.5);
//! assert!(bay_area.contains_point(&moscone));
//! ```

pub mod geo;
pub mod point;
pub mod region;
