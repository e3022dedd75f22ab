//! Minimal end-to-end tour: load a batch, activate it, drive two viewport
//! events, and expand a cluster into its members.

use scholarmap::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let map = ScholarMap::new();
    map.load_batch(
        "2016",
        vec![
            SpatialPoint::new("Ada Lovelace", Point::new(-0.13, 51.51), "Ada Lovelace", "London"),
            SpatialPoint::new("Alan Turing", Point::new(-2.24, 53.48), "Alan Turing", "Manchester"),
            SpatialPoint::new("Grace Hopper", Point::new(-76.64, 39.05), "Grace Hopper", "Arlington"),
        ],
    );
    let stats = map.activate_batch("2016")?;
    println!("indexed {} scholars", stats.indexed);

    // Zoomed out over the Atlantic: the two UK scholars merge.
    let atlantic = Region::new(-90.0, 20.0, 10.0, 60.0);
    let diff = map.viewport_changed(&atlantic);
    println!("world view: +{} / -{}", diff.to_add.len(), diff.to_remove.len());

    for item in &diff.to_add {
        if let DisplayableItem::Cluster(cluster) = item {
            let members = map.neighbours_for_location(&cluster.centroid, cluster.count());
            for (member, meters) in members {
                println!("  cluster member {} ({meters:.0} m from centroid)", member.key);
            }
        }
    }

    // Zooming into the UK splits the cluster into individual pins.
    let uk = Region::new(-6.0, 49.0, 2.0, 56.0);
    let diff = map.viewport_changed(&uk);
    println!("uk view: +{} / -{}", diff.to_add.len(), diff.to_remove.len());

    Ok(())
}
