//! Region quadtree over display points.
//!
//! Provides the spatial index behind viewport clustering: bulk rebuild,
//! rectangular-region queries with subtree pruning, and heap-based top-k
//! nearest-neighbour selection.
//!
//! The index is rebuilt wholesale on every data refresh; it has no
//! incremental deletion. Every indexed point lives in exactly one node.
//! A node splits into four equal quadrants once its point count exceeds
//! the capacity threshold; points that cannot be pushed down (on a
//! region's closing edge, duplicate coordinates, or a node too small to
//! halve meaningfully) are retained at the node itself, so degenerate
//! inputs terminate.

use scholarmap_types::geo::Point;
use scholarmap_types::point::SpatialPoint;
use scholarmap_types::region::Region;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Number of points a node holds before it subdivides, unless overridden
/// via [`QuadTree::with_capacity`].
pub const DEFAULT_NODE_CAPACITY: usize = 4;

/// Spans at or below this are not worth halving; nodes this small hold
/// their points regardless of capacity.
const MIN_SUBDIVIDE_SPAN: f64 = 1e-9;

const NW: usize = 0;
const NE: usize = 1;
const SW: usize = 2;
const SE: usize = 3;

/// Outcome of a bulk [`QuadTree::rebuild`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildStats {
    /// Points placed in the index
    pub indexed: usize,
    /// Points outside the root bounds or with non-finite coordinates
    pub dropped: usize,
}

#[derive(Debug)]
struct QuadNode {
    region: Region,
    points: SmallVec<[SpatialPoint; DEFAULT_NODE_CAPACITY]>,
    children: Option<Box<[QuadNode; 4]>>,
}

impl QuadNode {
    fn new(region: Region) -> Self {
        Self {
            region,
            points: SmallVec::new(),
            children: None,
        }
    }

    /// Quadrant index for a coordinate known to lie inside this node.
    ///
    /// East/north halves are half-open; a point on the closing edge of the
    /// region belongs to no quadrant and stays at this node.
    fn quadrant(&self, point: &Point) -> Option<usize> {
        let center = self.region.center();
        let east = if point.x() < center.x() {
            false
        } else if point.x() < self.region.max_x() {
            true
        } else {
            return None;
        };
        let north = if point.y() < center.y() {
            false
        } else if point.y() < self.region.max_y() {
            true
        } else {
            return None;
        };
        Some(match (north, east) {
            (true, false) => NW,
            (true, true) => NE,
            (false, false) => SW,
            (false, true) => SE,
        })
    }

    fn insert(&mut self, point: SpatialPoint, capacity: usize) {
        if self.children.is_some() {
            match self.quadrant(&point.coordinate) {
                Some(index) => {
                    if let Some(children) = self.children.as_deref_mut() {
                        children[index].insert(point, capacity);
                    }
                }
                None => self.points.push(point),
            }
            return;
        }

        self.points.push(point);
        if self.points.len() > capacity && self.can_subdivide() {
            self.subdivide(capacity);
        }
    }

    fn can_subdivide(&self) -> bool {
        self.region.width() > MIN_SUBDIVIDE_SPAN
            && self.region.height() > MIN_SUBDIVIDE_SPAN
            // Duplicate coordinates can never be separated by subdividing.
            && !self
                .points
                .windows(2)
                .all(|pair| pair[0].coordinate == pair[1].coordinate)
    }

    fn subdivide(&mut self, capacity: usize) {
        let center = self.region.center();
        let (cx, cy) = (center.x(), center.y());
        let region = &self.region;
        self.children = Some(Box::new([
            QuadNode::new(Region::new(region.min_x(), cy, cx, region.max_y())),
            QuadNode::new(Region::new(cx, cy, region.max_x(), region.max_y())),
            QuadNode::new(Region::new(region.min_x(), region.min_y(), cx, cy)),
            QuadNode::new(Region::new(cx, region.min_y(), region.max_x(), cy)),
        ]));

        // Re-route through the internal-node path; stragglers stay here.
        let points = std::mem::take(&mut self.points);
        for point in points {
            self.insert(point, capacity);
        }
    }

    fn query_region(&self, query: &Region, out: &mut Vec<SpatialPoint>) {
        if !self.region.intersects(query) {
            return;
        }
        for point in &self.points {
            if query.contains_point(&point.coordinate) {
                out.push(point.clone());
            }
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.query_region(query, out);
            }
        }
    }

    fn for_each_point<'a>(&'a self, f: &mut impl FnMut(&'a SpatialPoint)) {
        for point in &self.points {
            f(point);
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.for_each_point(f);
            }
        }
    }

    fn depth(&self) -> usize {
        match self.children.as_deref() {
            Some(children) => 1 + children.iter().map(QuadNode::depth).max().unwrap_or(0),
            None => 1,
        }
    }
}

/// Helper struct for heap-based top-k selection (max-heap by distance)
struct NearCandidate {
    point: SpatialPoint,
    distance: f64,
}

impl PartialEq for NearCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}
impl Eq for NearCandidate {}
impl PartialOrd for NearCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for NearCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: larger distances have higher priority (so we can pop the worst)
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Region quadtree index over [`SpatialPoint`]s.
///
/// Query order is deterministic: a node's own points in insertion order,
/// then the NW, NE, SW, SE subtrees. Resolving the same region twice
/// against an unchanged index therefore yields identical output.
///
/// # Examples
///
/// ```
/// use scholarmap::{QuadTree, Region, SpatialPoint};
/// use scholarmap::Point;
///
/// let mut tree = QuadTree::new(Region::world());
/// tree.rebuild(
///     Region::world(),
///     vec![SpatialPoint::new("a", Point::new(10.0, 20.0), "a", "")],
/// );
/// let hits = tree.query_region(&Region::new(0.0, 0.0, 30.0, 30.0));
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug)]
pub struct QuadTree {
    root: QuadNode,
    capacity: usize,
    len: usize,
}

impl QuadTree {
    /// Create an empty index rooted at `bounds` with the default node
    /// capacity.
    pub fn new(bounds: Region) -> Self {
        Self::with_capacity(bounds, DEFAULT_NODE_CAPACITY)
    }

    /// Create an empty index with a custom node capacity.
    pub fn with_capacity(bounds: Region, capacity: usize) -> Self {
        assert!(capacity > 0, "Node capacity must be greater than zero");
        Self {
            root: QuadNode::new(bounds),
            capacity,
            len: 0,
        }
    }

    /// The root bounds every indexed point lies within.
    pub fn bounds(&self) -> &Region {
        &self.root.region
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree in nodes (1 for a bare root).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Insert a single point.
    ///
    /// Returns `false` without touching the index when the coordinate is
    /// non-finite or lies outside the root bounds; such points are simply
    /// never indexed.
    pub fn insert(&mut self, point: SpatialPoint) -> bool {
        if !point.coordinate.is_finite() {
            log::warn!("Rejecting point {:?} with non-finite coordinates", point.key);
            return false;
        }
        if !self.root.region.contains_point(&point.coordinate) {
            log::debug!("Point {:?} lies outside the index bounds, not indexed", point.key);
            return false;
        }
        self.root.insert(point, self.capacity);
        self.len += 1;
        true
    }

    /// Discard all state and re-index `points` under fresh `bounds`.
    ///
    /// Out-of-bounds points are counted, warn-logged, and otherwise
    /// dropped; removal of individual points is achieved by rebuilding
    /// without them.
    pub fn rebuild(
        &mut self,
        bounds: Region,
        points: impl IntoIterator<Item = SpatialPoint>,
    ) -> RebuildStats {
        self.root = QuadNode::new(bounds);
        self.len = 0;

        let mut stats = RebuildStats::default();
        for point in points {
            if self.insert(point) {
                stats.indexed += 1;
            } else {
                stats.dropped += 1;
            }
        }
        if stats.dropped > 0 {
            log::warn!(
                "Dropped {} of {} points during index rebuild",
                stats.dropped,
                stats.indexed + stats.dropped
            );
        }
        stats
    }

    /// All points whose coordinate falls within `region`.
    ///
    /// Subtrees whose bounds do not intersect the query are pruned. A
    /// zero-area region is legal and matches only coincident points.
    pub fn query_region(&self, region: &Region) -> Vec<SpatialPoint> {
        let mut out = Vec::new();
        self.root.query_region(region, &mut out);
        out
    }

    /// Up to `k` points nearest to `location`, ascending by haversine
    /// distance in meters.
    pub fn nearest(&self, location: &Point, k: usize) -> Vec<(SpatialPoint, f64)> {
        if k == 0 {
            return Vec::new();
        }

        let mut heap = BinaryHeap::with_capacity(k);
        self.root.for_each_point(&mut |point| {
            let distance = location.haversine_distance(&point.coordinate);
            if !distance.is_finite() {
                return;
            }
            if heap.len() < k {
                heap.push(NearCandidate {
                    point: point.clone(),
                    distance,
                });
            } else if let Some(worst) = heap.peek()
                && distance < worst.distance
            {
                heap.pop();
                heap.push(NearCandidate {
                    point: point.clone(),
                    distance,
                });
            }
        });

        // Convert heap to sorted vector (ascending distance)
        let mut results = Vec::with_capacity(heap.len());
        while let Some(candidate) = heap.pop() {
            results.push((candidate.point, candidate.distance));
        }
        results.reverse();
        results
    }
}
