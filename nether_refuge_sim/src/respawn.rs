// Refuge respawn planner.
//
// Decides whether a player should be relocated into the nether refuge and,
// if so, where. Two lifecycle triggers feed it:
// - `FirstLogin`: only players with no recorded play time are relocated.
// - `Respawn`: only players without a home point are relocated.
//
// The search origin is the player's overworld position with x/z divided by
// the coordinate scale, clamped to stay `border_inset` inside the nether
// border and within the absolute coordinate limit, then floored to voxels.
// The configured refuge biomes the world actually knows are handed to the
// locator in config order. When a destination is found, unstable ground
// directly beneath it (gravel, lava) is replaced with the configured stable
// material; moving the player there is left to the caller.
//
// Every "not relocated" path is logged at info level with the player's name
// and the reason. None of them are errors.
//
// See also: `locate.rs` for the search, `query.rs` for `RefugeWorld`,
// `config.rs` for the tunables.

use crate::config::RefugeConfig;
use crate::locate::SafePositionFinder;
use crate::query::RefugeWorld;
use crate::types::{Biome, VoxelCoord};
use crate::world::WorldBorder;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Lifecycle event that may relocate a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnTrigger {
    FirstLogin,
    Respawn,
}

/// The slice of player state the planner reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    /// Overworld position `[x, y, z]`.
    pub position: [f64; 3],
    pub play_time_ticks: u64,
    pub has_home_point: bool,
    pub is_passenger: bool,
}

/// Why a relocation was not attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The trigger does not apply to this player.
    NotApplicable,
    NetherDisabled,
    /// Riding another entity.
    Passenger,
    /// None of the configured refuge biomes exist in this world.
    NoKnownRegions,
}

/// What the planner decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnOutcome {
    /// Move the player to `destination`.
    Relocated {
        destination: VoxelCoord,
        /// Unstable ground below the destination was replaced.
        ground_replaced: bool,
    },
    Skipped(SkipReason),
    /// The search ran and found nothing.
    NoRefuge,
}

/// Whether `trigger` applies to `player`.
pub fn should_relocate(trigger: RespawnTrigger, player: &PlayerState) -> bool {
    match trigger {
        RespawnTrigger::FirstLogin => player.play_time_ticks == 0,
        RespawnTrigger::Respawn => !player.has_home_point,
    }
}

/// Map an overworld position to the nether search origin.
pub fn nether_origin(position: [f64; 3], config: &RefugeConfig, border: WorldBorder) -> VoxelCoord {
    let [x, y, z] = position;
    let (x, z) = border.clamp_inset(
        x / config.coordinate_scale,
        z / config.coordinate_scale,
        config.border_inset,
        config.coordinate_limit,
    );
    VoxelCoord::new(to_voxel(x), to_voxel(y), to_voxel(z))
}

/// Run the whole relocation decision for one player.
pub fn relocate_to_refuge<W: RefugeWorld<Region = Biome>>(
    world: &mut W,
    player: &PlayerState,
    trigger: RespawnTrigger,
    config: &RefugeConfig,
) -> RespawnOutcome {
    if !should_relocate(trigger, player) {
        return RespawnOutcome::Skipped(SkipReason::NotApplicable);
    }
    if !config.nether_enabled {
        info!("couldn't send {} to the nether refuge: nether is disabled", player.name);
        return RespawnOutcome::Skipped(SkipReason::NetherDisabled);
    }
    if player.is_passenger {
        info!("couldn't send {} to the nether refuge: player is a passenger", player.name);
        return RespawnOutcome::Skipped(SkipReason::Passenger);
    }

    let mut regions = Vec::with_capacity(config.refuge_biomes.len());
    for biome in &config.refuge_biomes {
        if world.knows_region(biome) {
            regions.push(*biome);
        } else {
            info!("refuge biome {biome:?} is not present in this world, skipping it");
        }
    }
    if regions.is_empty() {
        info!("couldn't send {} to the nether refuge: no refuge biome exists", player.name);
        return RespawnOutcome::Skipped(SkipReason::NoKnownRegions);
    }

    let origin = nether_origin(player.position, config, world.border());
    debug!("searching nether refuge for {} around {origin}", player.name);

    let finder = SafePositionFinder::from_config(config);
    let found = match finder.locate_nearest_region(
        &*world,
        &regions[..],
        origin,
        config.region_search_radius,
    ) {
        Ok(found) => found,
        Err(e) => {
            warn!("nether refuge search for {} rejected: {e}", player.name);
            return RespawnOutcome::NoRefuge;
        }
    };
    let Some(placement) = found else {
        info!("couldn't send {} to the nether refuge: no safe position", player.name);
        return RespawnOutcome::NoRefuge;
    };

    let destination = placement.pos;
    let ground = destination.below();
    let ground_replaced = world.is_unstable_ground(ground);
    if ground_replaced {
        world.replace_ground(ground, config.stable_ground);
    }
    info!(
        "sending {} to nether refuge at {destination} ({:?})",
        player.name, placement.class
    );
    RespawnOutcome::Relocated {
        destination,
        ground_replaced,
    }
}

/// Floor to the containing voxel, saturating at the `i32` range.
fn to_voxel(v: f64) -> i32 {
    v.floor() as i32
}
