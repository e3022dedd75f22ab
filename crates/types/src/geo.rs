//! Coordinate wrapper over the `geo` crate's point primitive, with the
//! distance calculations the clustering engine needs.

use serde::{Deserialize, Serialize};

/// A geographic coordinate with longitude/latitude in decimal degrees.
///
/// This wraps `geo::Point` and provides distance calculations in both the
/// ground metric (haversine, meters) and the angular metric (degrees) that
/// zoom-dependent clustering works in.
///
/// # Examples
///
/// ```
/// use scholarmap_types::geo::Point;
///
/// let sf = Point::new(-122.4194, 37.7749);
/// assert_eq!(sf.lon(), -122.4194);
/// assert_eq!(sf.lat(), 37.7749);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from x (longitude) and y (latitude) coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - Longitude in degrees (typically -180 to 180)
    /// * `y` - Latitude in degrees (typically -90 to 90)
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Get the x coordinate (longitude).
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    /// Get the y coordinate (latitude).
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Get the longitude (alias for x).
    #[inline]
    pub fn lon(&self) -> f64 {
        self.x()
    }

    /// Get the latitude (alias for y).
    #[inline]
    pub fn lat(&self) -> f64 {
        self.y()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// Whether both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Great-circle distance to another point in meters, via the haversine
    /// formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use scholarmap_types::geo::Point;
    ///
    /// let san_francisco = Point::new(-122.4194, 37.7749);
    /// let london = Point::new(-0.1276, 51.5072);
    /// let distance = san_francisco.haversine_distance(&london);
    /// assert!(distance > 8_500_000.0); // ~8,620 km
    /// ```
    #[inline]
    pub fn haversine_distance(&self, other: &Point) -> f64 {
        use geo::Distance;
        geo::Haversine.distance(self.inner, other.inner)
    }

    /// Angular separation to another point, in degrees.
    ///
    /// This is the straight-line distance in coordinate space, not a ground
    /// distance. Zoom-dependent clustering compares it against a span
    /// threshold derived from the visible map region.
    ///
    /// # Examples
    ///
    /// ```
    /// use scholarmap_types::geo::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.angular_distance(&b), 5.0);
    /// ```
    #[inline]
    pub fn angular_distance(&self, other: &Point) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x(), point.y())
    }
}
