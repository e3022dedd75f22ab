pub mod cluster;
pub use cluster::{ClusterAggregate, DisplayableItem, resolve};

pub mod quadtree;
pub use quadtree::{DEFAULT_NODE_CAPACITY, QuadTree, RebuildStats};
