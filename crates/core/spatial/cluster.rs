//! Greedy viewport clustering over quadtree query results.
//!
//! Decides which points render as individual pins and which merge into
//! aggregate markers for a given viewport and zoom-derived span. The
//! clustering is a single greedy pass in index order: cluster shape
//! depends on traversal order, which the index keeps deterministic, but
//! it is not a globally optimal partition.

use crate::spatial::quadtree::QuadTree;
use scholarmap_types::geo::Point;
use scholarmap_types::point::SpatialPoint;
use scholarmap_types::region::Region;

/// A group of nearby points rendered as one marker.
///
/// Derived fresh on every resolve; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAggregate {
    /// Mean coordinate of all members
    pub centroid: Point,
    /// The merged points
    pub members: Vec<SpatialPoint>,
}

impl ClusterAggregate {
    /// Number of merged points.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Identity keys of the merged points.
    pub fn member_keys(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|member| member.key.as_str())
    }
}

/// One renderable unit of resolver output.
///
/// Either a single pin, an aggregate marker, or the fixed sentinel for the
/// device owner's own location (which the engine never emits but a map
/// surface's annotation list may carry).
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayableItem {
    /// An individual pin
    Single(SpatialPoint),
    /// An aggregate marker
    Cluster(ClusterAggregate),
    /// The viewer's own location
    Viewer,
}

impl DisplayableItem {
    /// Number of store points this item represents.
    pub fn point_count(&self) -> usize {
        match self {
            DisplayableItem::Single(_) => 1,
            DisplayableItem::Cluster(cluster) => cluster.count(),
            DisplayableItem::Viewer => 0,
        }
    }

    /// Coordinate the item renders at, if any.
    pub fn coordinate(&self) -> Option<Point> {
        match self {
            DisplayableItem::Single(point) => Some(point.coordinate),
            DisplayableItem::Cluster(cluster) => Some(cluster.centroid),
            DisplayableItem::Viewer => None,
        }
    }
}

/// Resolve the displayable items for a viewport.
///
/// Queries `tree` for the region padded by `padding_factor` of its own
/// span (so clusters straddling the viewport edge are not clipped), then
/// partitions the result: each still-unclustered point in index order
/// seeds a cluster, absorbing every later unclustered point whose angular
/// distance to the running centroid is below `min_non_clustered_span`.
/// The centroid is recomputed as the running mean after each absorption.
///
/// Every queried point appears in the output exactly once. A span of zero
/// never clusters; a span wider than the padded region collapses
/// everything into one cluster.
pub fn resolve(
    tree: &QuadTree,
    region: &Region,
    min_non_clustered_span: f64,
    padding_factor: f64,
) -> Vec<DisplayableItem> {
    let padded = region.padded(padding_factor);
    let points = tree.query_region(&padded);

    let mut items = Vec::new();
    let mut clustered = vec![false; points.len()];

    for seed in 0..points.len() {
        if clustered[seed] {
            continue;
        }
        clustered[seed] = true;

        let mut members = vec![points[seed].clone()];
        let mut centroid = points[seed].coordinate;

        for other in seed + 1..points.len() {
            if clustered[other] {
                continue;
            }
            if centroid.angular_distance(&points[other].coordinate) < min_non_clustered_span {
                clustered[other] = true;
                members.push(points[other].clone());
                let n = members.len() as f64;
                centroid = Point::new(
                    centroid.x() + (points[other].coordinate.x() - centroid.x()) / n,
                    centroid.y() + (points[other].coordinate.y() - centroid.y()) / n,
                );
            }
        }

        if members.len() > 1 {
            items.push(DisplayableItem::Cluster(ClusterAggregate {
                centroid,
                members,
            }));
        } else if let Some(point) = members.pop() {
            items.push(DisplayableItem::Single(point));
        }
    }

    log::debug!(
        "Resolved {} displayable items from {} points in region",
        items.len(),
        points.len()
    );
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(key: &str, x: f64, y: f64) -> SpatialPoint {
        SpatialPoint::new(key, Point::new(x, y), key, "")
    }

    fn tree_with(points: Vec<SpatialPoint>) -> QuadTree {
        let mut tree = QuadTree::new(Region::world());
        tree.rebuild(Region::world(), points);
        tree
    }

    fn total_points(items: &[DisplayableItem]) -> usize {
        items.iter().map(DisplayableItem::point_count).sum()
    }

    #[test]
    fn test_zero_span_never_clusters() {
        let tree = tree_with(vec![
            point("a", 0.0, 0.0),
            point("b", 0.0, 0.0),
            point("c", 1.0, 1.0),
        ]);
        let items = resolve(&tree, &Region::new(-5.0, -5.0, 5.0, 5.0), 0.0, 1.0);

        assert_eq!(items.len(), 3);
        assert!(items
            .iter()
            .all(|item| matches!(item, DisplayableItem::Single(_))));
    }

    #[test]
    fn test_huge_span_collapses_to_one_cluster() {
        let tree = tree_with(vec![
            point("a", -40.0, -40.0),
            point("b", 0.0, 0.0),
            point("c", 40.0, 40.0),
        ]);
        let items = resolve(&tree, &Region::new(-50.0, -50.0, 50.0, 50.0), 1000.0, 1.0);

        assert_eq!(items.len(), 1);
        match &items[0] {
            DisplayableItem::Cluster(cluster) => assert_eq!(cluster.count(), 3),
            other => panic!("expected a cluster, got {other:?}"),
        }
    }

    #[test]
    fn test_centroid_is_member_mean() {
        let tree = tree_with(vec![point("a", 0.0, 0.0), point("b", 2.0, 4.0)]);
        let items = resolve(&tree, &Region::new(-10.0, -10.0, 10.0, 10.0), 10.0, 0.0);

        assert_eq!(items.len(), 1);
        match &items[0] {
            DisplayableItem::Cluster(cluster) => {
                assert!((cluster.centroid.x() - 1.0).abs() < 1e-12);
                assert!((cluster.centroid.y() - 2.0).abs() < 1e-12);
            }
            other => panic!("expected a cluster, got {other:?}"),
        }
    }

    #[test]
    fn test_partition_is_complete() {
        let points: Vec<SpatialPoint> = (0..40)
            .map(|i| point(&format!("p{i}"), (i % 8) as f64, (i / 8) as f64))
            .collect();
        let tree = tree_with(points);
        let region = Region::new(-1.0, -1.0, 9.0, 9.0);

        for span in [0.0, 0.5, 1.5, 4.0, 100.0] {
            let items = resolve(&tree, &region, span, 1.0);
            assert_eq!(total_points(&items), 40, "span {span}");

            let mut keys: Vec<String> = items
                .iter()
                .flat_map(|item| match item {
                    DisplayableItem::Single(p) => vec![p.key.clone()],
                    DisplayableItem::Cluster(c) => {
                        c.member_keys().map(str::to_owned).collect()
                    }
                    DisplayableItem::Viewer => vec![],
                })
                .collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), 40, "span {span}");
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let points: Vec<SpatialPoint> = (0..25)
            .map(|i| point(&format!("p{i}"), (i * 7 % 13) as f64, (i * 5 % 11) as f64))
            .collect();
        let tree = tree_with(points);
        let region = Region::new(0.0, 0.0, 13.0, 11.0);

        let first = resolve(&tree, &region, 2.0, 1.0);
        let second = resolve(&tree, &region, 2.0, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_padding_pulls_in_edge_neighbours() {
        let tree = tree_with(vec![point("inside", 9.0, 9.0), point("edge", 12.0, 9.0)]);
        let viewport = Region::new(0.0, 0.0, 10.0, 10.0);

        let unpadded = resolve(&tree, &viewport, 0.0, 0.0);
        assert_eq!(total_points(&unpadded), 1);

        let padded = resolve(&tree, &viewport, 0.0, 1.0);
        assert_eq!(total_points(&padded), 2);
    }
}
