use crate::geo::Point;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned longitude/latitude rectangle.
///
/// Regions describe map viewports, index bounds, and query windows. This is
/// a wrapper around `geo::Rect` with additional functionality.
///
/// Zero-width or zero-height regions are legal; containment is inclusive on
/// all edges, so a degenerate region still matches exactly-coincident
/// points.
///
/// # Panics
///
/// Constructors panic when a minimum exceeds the corresponding maximum or a
/// span is negative or non-finite. A malformed region is a programmer
/// error, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl Region {
    /// Create a new region from minimum and maximum coordinates.
    ///
    /// # Arguments
    ///
    /// * `min_x` - Minimum longitude/x coordinate
    /// * `min_y` - Minimum latitude/y coordinate
    /// * `max_x` - Maximum longitude/x coordinate
    /// * `max_y` - Maximum latitude/y coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use scholarmap_types::region::Region;
    ///
    /// let bay_area = Region::new(-123.0, 37.0, -121.5, 38.5);
    /// assert_eq!(bay_area.width(), 1.5);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        assert!(
            min_x <= max_x && min_y <= max_y,
            "Region minimum must not exceed maximum ({min_x}, {min_y}) .. ({max_x}, {max_y})"
        );
        Self {
            rect: Rect::new(
                geo::coord! { x: min_x, y: min_y },
                geo::coord! { x: max_x, y: max_y },
            ),
        }
    }

    /// Create a region from a center point and longitude/latitude spans.
    ///
    /// This is the shape viewport-change events arrive in from a map
    /// surface.
    ///
    /// # Examples
    ///
    /// ```
    /// use scholarmap_types::geo::Point;
    /// use scholarmap_types::region::Region;
    ///
    /// let viewport = Region::with_center_span(Point::new(-122.0, 37.5), 2.0, 1.0);
    /// assert_eq!(viewport.min_x(), -123.0);
    /// assert_eq!(viewport.max_y(), 38.0);
    /// ```
    pub fn with_center_span(center: Point, lon_span: f64, lat_span: f64) -> Self {
        assert!(
            lon_span >= 0.0 && lat_span >= 0.0 && lon_span.is_finite() && lat_span.is_finite(),
            "Region spans must be finite and non-negative"
        );
        Self::new(
            center.x() - lon_span / 2.0,
            center.y() - lat_span / 2.0,
            center.x() + lon_span / 2.0,
            center.y() + lat_span / 2.0,
        )
    }

    /// Create a region from a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// The whole-world region in decimal degrees.
    pub fn world() -> Self {
        Self::new(-180.0, -90.0, 180.0, 90.0)
    }

    /// Get the minimum x coordinate.
    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    /// Get the minimum y coordinate.
    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    /// Get the maximum x coordinate.
    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    /// Get the maximum y coordinate.
    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    /// Get the center point of the region.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x() + self.max_x()) / 2.0,
            (self.min_y() + self.max_y()) / 2.0,
        )
    }

    /// Get the width (longitude span) of the region.
    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    /// Get the height (latitude span) of the region.
    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    /// Longitude span (alias for width).
    pub fn lon_span(&self) -> f64 {
        self.width()
    }

    /// Latitude span (alias for height).
    pub fn lat_span(&self) -> f64 {
        self.height()
    }

    /// Check if a point is contained within this region.
    ///
    /// Containment is inclusive on all four edges.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x() >= self.min_x()
            && point.x() <= self.max_x()
            && point.y() >= self.min_y()
            && point.y() <= self.max_y()
    }

    /// Check if this region intersects with another.
    pub fn intersects(&self, other: &Region) -> bool {
        !(self.max_x() < other.min_x()
            || self.min_x() > other.max_x()
            || self.max_y() < other.min_y()
            || self.min_y() > other.max_y())
    }

    /// Expand the region on every side by a fraction of its own span.
    ///
    /// A factor of 1.0 grows each side by the full span, tripling the
    /// covered width and height. A degenerate region pads to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use scholarmap_types::region::Region;
    ///
    /// let region = Region::new(0.0, 0.0, 10.0, 10.0);
    /// let padded = region.padded(0.5);
    /// assert_eq!(padded.min_x(), -5.0);
    /// assert_eq!(padded.max_y(), 15.0);
    /// ```
    pub fn padded(&self, factor: f64) -> Self {
        assert!(
            factor >= 0.0 && factor.is_finite(),
            "Padding factor must be finite and non-negative"
        );
        let dx = self.width() * factor;
        let dy = self.height() * factor;
        Self::new(
            self.min_x() - dx,
            self.min_y() - dy,
            self.max_x() + dx,
            self.max_y() + dy,
        )
    }
}
