// nether_refuge_sim: safe-placement search for nether refuge respawns.
//
// This crate finds where a player can be placed safely near a set of target
// regions (biomes) in a voxel world, and plans the "send new or homeless
// players to a nether refuge" relocation built on top of it. It has no game
// engine dependencies: the host engine plugs in through the `RegionQuery`
// trait and can be tested, benchmarked, and run headless.
//
// Module overview:
// - `types.rs`:     VoxelCoord, Direction (with clockwise rotation), VoxelType, Biome.
// - `spiral.rs`:    Clockwise square spiral of columns around a point.
// - `query.rs`:     RegionQuery (read-only world seam) + RefugeWorld (planner writes).
// - `world.rs`:     Dense in-memory VoxelWorld with biomes and a WorldBorder.
// - `placement.rs`: Safe-volume search (open / fitting / fallback placements).
// - `locate.rs`:    SafePositionFinder, nearest refined placement over regions.
// - `respawn.rs`:   Trigger rules, cross-dimension origin, ground fix-up.
// - `config.rs`:    RefugeConfig + SafeVolumeParams, all tunables, JSON-loadable.
// - `error.rs`:     LocateError for rejected locator calls.
//
// **Critical constraint: determinism.** The search is a pure function of the
// world's answers and its inputs. No randomness, no `HashMap`, strict
// comparisons with a fixed iteration order for every tie.

pub mod config;
pub mod error;
pub mod locate;
pub mod placement;
pub mod query;
pub mod respawn;
pub mod spiral;
pub mod types;
pub mod world;

pub use error::LocateError;
pub use locate::{SafePositionFinder, locate_nearest_region};
pub use placement::{Placement, PlacementClass, find_safe_placement, find_safe_volume};
pub use query::{RefugeWorld, RegionQuery};
pub use types::{Biome, Direction, VoxelCoord, VoxelType};
pub use world::{VoxelWorld, WorldBorder};
