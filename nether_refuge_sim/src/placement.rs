// Safe-volume search: where around a point can a player stand?
//
// `find_safe_placement()` walks a clockwise column spiral (see `spiral.rs`)
// around the requested position. In each column it scans downward from the
// motion-blocking surface and, for every air pocket it meets, considers the
// pocket's floor as a candidate. A candidate must:
//
// 1. leave `headroom` cells below the world ceiling (`floor + 4 <= h - 1`);
// 2. come from a pocket whose depth (entry height minus floor) is 0 or at
//    least 3 (1 or 2 deep pockets are skipped);
// 3. "fit": a 2-wide (along east) by 2-tall air volume standing on solid
//    footing, see `fits_region()`.
//
// A fitting candidate whose two lateral neighbours (one step north and one
// step south) also fit is "open". The closest open candidate wins outright;
// fitting-only candidates are tracked only until the first open one shows
// up. Distances are squared and taken from the centre of the requested cell
// (`VoxelCoord::centre_dist_sqr_x4`). A candidate must be strictly closer to
// replace the current best, so the spiral order breaks ties.
//
// If nothing fits anywhere, the requested position itself is returned with
// its y clamped into `[70, h - 10]`, unless that falls outside the border,
// in which case there is no placement.
//
// See also: `locate.rs` which refines region points through this search,
// `config.rs` for `SafeVolumeParams`.
//
// **Critical constraint: determinism.** Pure function of the query answers
// and the inputs. Never mutates the world.

use crate::config::SafeVolumeParams;
use crate::query::RegionQuery;
use crate::spiral::Spiral;
use crate::types::{Direction, VoxelCoord};
use log::debug;
use serde::{Deserialize, Serialize};

/// How a placement was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementClass {
    /// Fits, and so do both lateral neighbours.
    Open,
    /// Fits, but at least one flank is blocked.
    Fitting,
    /// Nothing fit; the requested position with a clamped height. Not
    /// guaranteed to be free.
    Fallback,
}

/// A chosen position and how it was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pos: VoxelCoord,
    pub class: PlacementClass,
}

/// The heading the footprint is laid out along. Its clockwise partner gives
/// the lateral axis.
const PRIMARY: Direction = Direction::East;

/// Safe-volume search with the stock parameters, without the class.
pub fn find_safe_volume<Q: RegionQuery + ?Sized>(world: &Q, near: VoxelCoord) -> Option<VoxelCoord> {
    find_safe_placement(world, near, &SafeVolumeParams::default()).map(|p| p.pos)
}

/// Find the best placement around `near`. Returns `None` only when nothing
/// fits and the fallback position is outside the border.
pub fn find_safe_placement<Q: RegionQuery + ?Sized>(
    world: &Q,
    near: VoxelCoord,
    params: &SafeVolumeParams,
) -> Option<Placement> {
    let world_height = world.world_height();
    let mut best_open: Option<(i64, VoxelCoord)> = None;
    let mut best_fit: Option<(i64, VoxelCoord)> = None;

    for column in Spiral::clockwise(near, params.spiral_radius) {
        if !world.is_within_boundary(column)
            || !world.is_within_boundary(column.moved(PRIMARY, 1))
        {
            continue;
        }

        let top = (world_height - 1).min(world.height_at(column.x, column.z));
        let mut height = top;
        while height >= 0 {
            if world.is_empty(column.with_y(height)) {
                let entry_height = height;
                while height > 0 && world.is_empty(column.with_y(height - 1)) {
                    height -= 1;
                }

                let depth = entry_height - height;
                if height.saturating_add(params.headroom) <= world_height - 1
                    && (depth <= 0 || depth >= 3)
                {
                    let candidate = column.with_y(height);
                    if fits_region(world, candidate, PRIMARY, 0) {
                        let dist = near.centre_dist_sqr_x4(candidate);
                        if fits_region(world, candidate, PRIMARY, -1)
                            && fits_region(world, candidate, PRIMARY, 1)
                            && best_open.is_none_or(|(best, _)| dist < best)
                        {
                            best_open = Some((dist, candidate));
                        }
                        if best_open.is_none() && best_fit.is_none_or(|(best, _)| dist < best) {
                            best_fit = Some((dist, candidate));
                        }
                    }
                }
            }
            height -= 1;
        }
    }

    if let Some((_, pos)) = best_open {
        return Some(Placement {
            pos,
            class: PlacementClass::Open,
        });
    }
    if let Some((_, pos)) = best_fit {
        return Some(Placement {
            pos,
            class: PlacementClass::Fitting,
        });
    }

    let fallback = near.with_y(clamp_y(
        near.y,
        params.fallback_min_y,
        world_height.saturating_sub(params.fallback_top_margin),
    ));
    if world.is_within_boundary(fallback) {
        debug!("no volume fits around {near}; falling back to {fallback}");
        Some(Placement {
            pos: fallback,
            class: PlacementClass::Fallback,
        })
    } else {
        debug!("no volume fits around {near} and {fallback} is outside the border");
        None
    }
}

/// Whether a player-sized volume fits with its floor at `base`.
///
/// The footprint is the two cells `base - primary` and `base`, shifted
/// `lateral_offset` steps along `primary.clockwise()`. Each footprint cell
/// needs solid footing directly below and air at its own height and one
/// above.
pub fn fits_region<Q: RegionQuery + ?Sized>(
    world: &Q,
    base: VoxelCoord,
    primary: Direction,
    lateral_offset: i32,
) -> bool {
    let shifted = base.moved(primary.clockwise(), lateral_offset);
    for along in -1..1 {
        let cell = shifted.moved(primary, along);
        if !world.is_solid_footing(cell.below()) {
            return false;
        }
        if !world.is_empty(cell) || !world.is_empty(cell.above()) {
            return false;
        }
    }
    true
}

/// Clamp that tolerates `lo > hi` (short worlds): values under `lo` become
/// `lo`, otherwise values over `hi` become `hi`.
fn clamp_y(y: i32, lo: i32, hi: i32) -> i32 {
    if y < lo { lo } else { y.min(hi) }
}
