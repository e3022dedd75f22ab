//! Minimal add/remove diffing of displayable items across viewport events.
//!
//! A naive map surface would clear and re-add every annotation on each
//! viewport change, making every pin flicker. The reconciler instead
//! compares the previously displayed items with the freshly resolved set
//! and emits only what actually changed.

use crate::spatial::cluster::DisplayableItem;
use rustc_hash::FxHashSet;

/// Add/remove instruction sets for the map surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationDiff {
    /// Items to add to the map
    pub to_add: Vec<DisplayableItem>,
    /// Items to remove from the map
    pub to_remove: Vec<DisplayableItem>,
}

impl AnnotationDiff {
    /// Whether the viewport change requires no annotation churn at all.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Stable identity of a displayable item across resolve calls.
///
/// A single pin is identified by its point key; a cluster by its centroid
/// coordinate bits plus the sorted member keys, so an identical cluster
/// re-derived on the next viewport event compares equal. The viewer
/// sentinel has no identity and is never reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ItemIdentity {
    Point(String),
    Cluster {
        centroid_bits: (u64, u64),
        member_keys: Vec<String>,
    },
}

fn identity(item: &DisplayableItem) -> Option<ItemIdentity> {
    match item {
        DisplayableItem::Single(point) => Some(ItemIdentity::Point(point.key.clone())),
        DisplayableItem::Cluster(cluster) => {
            let mut member_keys: Vec<String> =
                cluster.member_keys().map(str::to_owned).collect();
            member_keys.sort_unstable();
            Some(ItemIdentity::Cluster {
                centroid_bits: (
                    cluster.centroid.x().to_bits(),
                    cluster.centroid.y().to_bits(),
                ),
                member_keys,
            })
        }
        DisplayableItem::Viewer => None,
    }
}

/// Diff `previous` against `current`.
///
/// `to_remove` holds previous items with no equal counterpart in current;
/// `to_add` holds current items with no equal counterpart in previous.
/// Items present unchanged on both sides appear in neither, and the
/// viewer-location sentinel is excluded from both.
pub fn reconcile(previous: &[DisplayableItem], current: &[DisplayableItem]) -> AnnotationDiff {
    let previous_ids: FxHashSet<ItemIdentity> =
        previous.iter().filter_map(identity).collect();
    let current_ids: FxHashSet<ItemIdentity> = current.iter().filter_map(identity).collect();

    let to_remove = previous
        .iter()
        .filter(|item| {
            identity(item).is_some_and(|id| !current_ids.contains(&id))
        })
        .cloned()
        .collect();
    let to_add = current
        .iter()
        .filter(|item| {
            identity(item).is_some_and(|id| !previous_ids.contains(&id))
        })
        .cloned()
        .collect();

    AnnotationDiff { to_add, to_remove }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::cluster::ClusterAggregate;
    use scholarmap_types::geo::Point;
    use scholarmap_types::point::SpatialPoint;

    fn single(key: &str, x: f64, y: f64) -> DisplayableItem {
        DisplayableItem::Single(SpatialPoint::new(key, Point::new(x, y), key, ""))
    }

    fn cluster(keys: &[&str], cx: f64, cy: f64) -> DisplayableItem {
        DisplayableItem::Cluster(ClusterAggregate {
            centroid: Point::new(cx, cy),
            members: keys
                .iter()
                .map(|key| SpatialPoint::new(*key, Point::new(cx, cy), *key, ""))
                .collect(),
        })
    }

    #[test]
    fn test_reconcile_identical_sets_is_empty() {
        let items = vec![single("a", 0.0, 0.0), cluster(&["b", "c"], 1.0, 1.0)];
        assert!(reconcile(&items, &items).is_empty());
    }

    #[test]
    fn test_reconcile_add_and_remove() {
        let previous = vec![single("a", 0.0, 0.0), single("b", 1.0, 1.0)];
        let current = vec![single("b", 1.0, 1.0), single("c", 2.0, 2.0)];

        let diff = reconcile(&previous, &current);
        assert_eq!(diff.to_remove, vec![single("a", 0.0, 0.0)]);
        assert_eq!(diff.to_add, vec![single("c", 2.0, 2.0)]);
    }

    #[test]
    fn test_equal_cluster_rebuilt_across_calls_is_not_churned() {
        // Separately constructed but identical aggregates compare equal.
        let previous = vec![cluster(&["a", "b"], 1.0, 1.0)];
        let current = vec![cluster(&["b", "a"], 1.0, 1.0)];
        assert!(reconcile(&previous, &current).is_empty());
    }

    #[test]
    fn test_changed_cluster_membership_churns() {
        let previous = vec![cluster(&["a", "b"], 1.0, 1.0)];
        let current = vec![cluster(&["a", "b", "c"], 1.0, 1.0)];

        let diff = reconcile(&previous, &current);
        assert_eq!(diff.to_remove.len(), 1);
        assert_eq!(diff.to_add.len(), 1);
    }

    #[test]
    fn test_moved_cluster_centroid_churns() {
        let previous = vec![cluster(&["a", "b"], 1.0, 1.0)];
        let current = vec![cluster(&["a", "b"], 1.5, 1.0)];
        assert!(!reconcile(&previous, &current).is_empty());
    }

    #[test]
    fn test_viewer_sentinel_is_never_touched() {
        let previous = vec![DisplayableItem::Viewer, single("a", 0.0, 0.0)];
        let current = vec![single("b", 1.0, 1.0)];

        let diff = reconcile(&previous, &current);
        assert_eq!(diff.to_remove, vec![single("a", 0.0, 0.0)]);
        assert_eq!(diff.to_add, vec![single("b", 1.0, 1.0)]);
        assert!(!diff.to_remove.contains(&DisplayableItem::Viewer));

        let diff = reconcile(&[], &[DisplayableItem::Viewer]);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_reconcile_empty_sides() {
        let items = vec![single("a", 0.0, 0.0)];
        let diff = reconcile(&[], &items);
        assert_eq!(diff.to_add.len(), 1);
        assert!(diff.to_remove.is_empty());

        let diff = reconcile(&items, &[]);
        assert_eq!(diff.to_remove.len(), 1);
        assert!(diff.to_add.is_empty());
    }
}
