// Nearest-region locator.
//
// `SafePositionFinder` answers "where is the closest safe spot in any of
// these regions?". For every candidate region it asks the world for the
// region's nearest column within the search radius, refines that column
// through the safe-volume search (`placement.rs`), and keeps the refined
// placement closest to the origin, measured from the centre of the
// placement's cell. Regions are visited in the order given and a later
// region must be strictly closer to win, so the first listed region takes
// equidistant ties.
//
// Regions whose nearest point cannot be refined (nothing fits and the
// fallback lies outside the border) simply drop out; if every region drops
// out the answer is `None`. Only malformed calls are errors (`LocateError`).
//
// See also: `placement.rs` for the per-point refinement, `respawn.rs` for
// the caller that picks the regions and origin.
//
// **Critical constraint: determinism.** Fixed iteration order, strict
// comparisons, no hashing.

use crate::config::{RefugeConfig, SafeVolumeParams};
use crate::error::LocateError;
use crate::placement::{Placement, find_safe_placement};
use crate::query::RegionQuery;
use crate::types::VoxelCoord;
use log::debug;

/// Column sampling step used for region lookups unless configured otherwise.
pub const DEFAULT_REGION_GRANULARITY: u32 = 1;

/// Locates safe placements near candidate regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafePositionFinder {
    pub params: SafeVolumeParams,
    pub granularity: u32,
}

impl Default for SafePositionFinder {
    fn default() -> Self {
        Self {
            params: SafeVolumeParams::default(),
            granularity: DEFAULT_REGION_GRANULARITY,
        }
    }
}

impl SafePositionFinder {
    pub fn new(params: SafeVolumeParams, granularity: u32) -> Self {
        Self {
            params,
            granularity,
        }
    }

    pub fn from_config(config: &RefugeConfig) -> Self {
        Self::new(config.safe_volume.clone(), config.region_search_granularity)
    }

    /// Safe-volume search around a single point with this finder's
    /// parameters.
    pub fn find_safe_volume<Q: RegionQuery + ?Sized>(
        &self,
        world: &Q,
        near: VoxelCoord,
    ) -> Option<Placement> {
        find_safe_placement(world, near, &self.params)
    }

    /// Closest refined placement over all `regions`, measured from `origin`.
    pub fn locate_nearest_region<Q: RegionQuery + ?Sized>(
        &self,
        world: &Q,
        regions: &[Q::Region],
        origin: VoxelCoord,
        radius: u32,
    ) -> Result<Option<Placement>, LocateError> {
        if regions.is_empty() {
            return Err(LocateError::NoRegions);
        }
        let world_height = world.world_height();
        if world_height <= 0 {
            return Err(LocateError::InvalidWorldHeight(world_height));
        }

        let mut nearest: Option<(i64, Placement)> = None;
        for (index, region) in regions.iter().enumerate() {
            let Some(point) = world.nearest_region_point(region, origin, radius, self.granularity)
            else {
                debug!("region #{index} has no column within {radius} of {origin}");
                continue;
            };
            let Some(placement) = self.find_safe_volume(world, point) else {
                debug!("region #{index} point {point} has no safe placement");
                continue;
            };
            let dist = placement.pos.centre_dist_sqr_x4(origin);
            if nearest.is_none_or(|(best, _)| dist < best) {
                nearest = Some((dist, placement));
            }
        }
        Ok(nearest.map(|(_, placement)| placement))
    }
}

/// Locator with the stock parameters, returning just the position.
pub fn locate_nearest_region<Q: RegionQuery + ?Sized>(
    world: &Q,
    regions: &[Q::Region],
    origin: VoxelCoord,
    radius: u32,
) -> Result<Option<VoxelCoord>, LocateError> {
    SafePositionFinder::default()
        .locate_nearest_region(world, regions, origin, radius)
        .map(|found| found.map(|placement| placement.pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::PlacementClass;
    use crate::types::{Biome, VoxelType};
    use crate::world::{VoxelWorld, WorldBorder};

    fn flat_world() -> VoxelWorld {
        let mut world = VoxelWorld::centered(64, 128, 64);
        world.fill_layers(64, VoxelType::Netherrack);
        world
    }

    #[test]
    fn empty_region_list_is_rejected() {
        let world = flat_world();
        assert_eq!(
            locate_nearest_region(&world, &[], VoxelCoord::new(0, 64, 0), 16),
            Err(LocateError::NoRegions)
        );
    }

    #[test]
    fn zero_height_world_is_rejected() {
        let world = VoxelWorld::centered(8, 0, 8);
        assert_eq!(
            locate_nearest_region(&world, &[Biome::NetherWastes], VoxelCoord::new(0, 0, 0), 4),
            Err(LocateError::InvalidWorldHeight(0))
        );
    }

    #[test]
    fn region_absent_within_radius_is_none() {
        let mut world = flat_world();
        world.set_biome(30, 0, Biome::CrimsonForest);
        let found = locate_nearest_region(
            &world,
            &[Biome::CrimsonForest, Biome::WarpedForest],
            VoxelCoord::new(0, 64, 0),
            10,
        );
        assert_eq!(found, Ok(None));
    }

    #[test]
    fn region_point_is_refined_to_safe_volume() {
        let mut world = flat_world();
        world.set_biome(5, 0, Biome::CrimsonForest);
        let found = SafePositionFinder::default()
            .locate_nearest_region(&world, &[Biome::CrimsonForest], VoxelCoord::new(0, 64, 0), 32)
            .unwrap()
            .unwrap();
        assert_eq!(found.pos, VoxelCoord::new(5, 65, 0));
        assert_eq!(found.class, PlacementClass::Open);
    }

    #[test]
    fn equidistant_regions_keep_first_listed() {
        let mut world = flat_world();
        // Measured from each placement's cell centre, x = 5 and x = -6 are
        // both 5.5 columns out.
        world.set_biome(5, 0, Biome::CrimsonForest);
        world.set_biome(-6, 0, Biome::WarpedForest);
        let origin = VoxelCoord::new(0, 64, 0);

        let crimson_first =
            locate_nearest_region(&world, &[Biome::CrimsonForest, Biome::WarpedForest], origin, 32);
        assert_eq!(crimson_first, Ok(Some(VoxelCoord::new(5, 65, 0))));

        let warped_first =
            locate_nearest_region(&world, &[Biome::WarpedForest, Biome::CrimsonForest], origin, 32);
        assert_eq!(warped_first, Ok(Some(VoxelCoord::new(-6, 65, 0))));
    }

    #[test]
    fn region_distance_is_taken_from_the_placement_centre() {
        let mut world = flat_world();
        // Plain integer distance would call x = -5 and x = 5 a tie. From the
        // placement's cell centre, x = -5 is 4.5 out and x = 5 is 5.5.
        world.set_biome(5, 0, Biome::CrimsonForest);
        world.set_biome(-5, 0, Biome::WarpedForest);
        let found = locate_nearest_region(
            &world,
            &[Biome::CrimsonForest, Biome::WarpedForest],
            VoxelCoord::new(0, 64, 0),
            32,
        );
        assert_eq!(found, Ok(Some(VoxelCoord::new(-5, 65, 0))));
    }

    #[test]
    fn closer_region_wins_regardless_of_order() {
        let mut world = flat_world();
        world.set_biome(12, 0, Biome::CrimsonForest);
        world.set_biome(-3, 0, Biome::GlowstoneCanyon);
        let found = locate_nearest_region(
            &world,
            &[Biome::CrimsonForest, Biome::GlowstoneCanyon],
            VoxelCoord::new(0, 64, 0),
            32,
        );
        assert_eq!(found, Ok(Some(VoxelCoord::new(-3, 65, 0))));
    }

    #[test]
    fn unrefinable_closer_region_loses_to_farther_one() {
        // Everything solid, and a narrow border that only covers x >= -20.
        let mut world = VoxelWorld::centered(128, 128, 128);
        world.fill_layers(127, VoxelType::Netherrack);
        world.border = WorldBorder::new(-20, -64, 64, 64);

        // Region A lies outside the border, 15 columns from the origin.
        world.set_biome(-25, 0, Biome::CrimsonForest);
        // Region B is 40 columns away, next to an open cavern.
        world.set_biome(30, 0, Biome::WarpedForest);
        world.fill_box(
            VoxelCoord::new(24, 60, -6),
            VoxelCoord::new(36, 70, 6),
            VoxelType::Air,
        );

        let origin = VoxelCoord::new(-10, 64, 0);
        let finder = SafePositionFinder::default();
        let regions = [Biome::CrimsonForest, Biome::WarpedForest];

        // A alone: nothing fits near it and its fallback is off the border.
        assert_eq!(
            finder.locate_nearest_region(&world, &regions[..1], origin, 64),
            Ok(None)
        );

        let found = finder
            .locate_nearest_region(&world, &regions, origin, 64)
            .unwrap()
            .unwrap();
        assert_eq!(found.class, PlacementClass::Open);
        assert_eq!(found.pos, VoxelCoord::new(30, 60, 0));
    }

    #[test]
    fn finder_uses_configured_spiral_radius() {
        let mut config = RefugeConfig::default();
        config.safe_volume.spiral_radius = 2;
        let finder = SafePositionFinder::from_config(&config);
        assert_eq!(finder.params.spiral_radius, 2);
        assert_eq!(finder.granularity, 1);

        let mut world = VoxelWorld::centered(64, 128, 64);
        world.fill_layers(127, VoxelType::Netherrack);
        world.fill_box(
            VoxelCoord::new(4, 60, 0),
            VoxelCoord::new(5, 63, 0),
            VoxelType::Air,
        );
        let near = VoxelCoord::new(0, 64, 0);
        let narrow = finder.find_safe_volume(&world, near).unwrap();
        assert_eq!(narrow.class, PlacementClass::Fallback);
        let stock = SafePositionFinder::default().find_safe_volume(&world, near).unwrap();
        assert_eq!(stock.class, PlacementClass::Fitting);
        assert_eq!(stock.pos, VoxelCoord::new(5, 60, 0));
    }
}
