use crate::geo::Point;
use serde::{Deserialize, Serialize};

/// A single mappable directory entry.
///
/// Carries a stable identity key (e.g. the person's full name), the
/// geographic coordinate, and the title/subtitle pair a map callout
/// displays. Values are immutable; a data refresh replaces the whole set
/// rather than mutating entries in place.
///
/// # Examples
///
/// ```
/// use scholarmap_types::geo::Point;
/// use scholarmap_types::point::SpatialPoint;
///
/// let entry = SpatialPoint::new(
///     "Grace Hopper",
///     Point::new(-76.6413, 39.0458),
///     "Grace Hopper",
///     "Arlington, Virginia",
/// );
/// assert_eq!(entry.key, "Grace Hopper");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialPoint {
    /// Stable identity, unique within a batch
    pub key: String,
    /// Geographic position
    pub coordinate: Point,
    /// Callout title
    pub title: String,
    /// Callout subtitle (typically the place name)
    pub subtitle: String,
}

impl SpatialPoint {
    /// Create a new spatial point.
    pub fn new(
        key: impl Into<String>,
        coordinate: Point,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            coordinate,
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}
