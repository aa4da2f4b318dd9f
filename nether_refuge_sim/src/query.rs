// World query seams.
//
// The search never touches world storage directly. It reads terrain through
// `RegionQuery`, a small pure-query trait that a host engine implements over
// whatever chunk storage it has; `world.rs` provides the in-memory
// `VoxelWorld` implementation used by tests and benches.
//
// `RefugeWorld` extends the query with what the respawn planner needs after
// a destination is chosen: the border rectangle (for the cross-dimension
// coordinate clamp) and a single ground-replacement write. The search
// itself only ever borrows `&impl RegionQuery`.
//
// See also: `placement.rs` and `locate.rs` (the read-only consumers),
// `respawn.rs` (the only caller that mutates).

use crate::types::{VoxelCoord, VoxelType};
use crate::world::WorldBorder;

/// Read-only terrain queries used by the safe-position search.
pub trait RegionQuery {
    /// Tag identifying a locatable region, e.g. a biome.
    type Region;

    /// The cell is passable (a player can occupy it).
    fn is_empty(&self, pos: VoxelCoord) -> bool;

    /// The cell can be stood on.
    fn is_solid_footing(&self, pos: VoxelCoord) -> bool;

    /// Motion-blocking surface height of a column: one above the highest
    /// cell that blocks motion, or 0 for an open column.
    fn height_at(&self, x: i32, z: i32) -> i32;

    /// Logical height of the world. Valid y values are `0..world_height()`.
    fn world_height(&self) -> i32;

    /// The position lies inside the playable horizontal boundary.
    fn is_within_boundary(&self, pos: VoxelCoord) -> bool;

    /// Nearest column belonging to `region` within `radius` columns of
    /// `origin`, sampling every `granularity`-th column. The returned y is
    /// `origin.y`.
    fn nearest_region_point(
        &self,
        region: &Self::Region,
        origin: VoxelCoord,
        radius: u32,
        granularity: u32,
    ) -> Option<VoxelCoord>;

    /// Whether the world knows `region` at all. Unknown regions are skipped
    /// by callers that assemble candidate lists.
    fn knows_region(&self, _region: &Self::Region) -> bool {
        true
    }
}

/// Extra access the respawn planner needs on top of the pure queries.
pub trait RefugeWorld: RegionQuery {
    fn border(&self) -> WorldBorder;

    /// Ground that must be replaced before a player stands on it.
    fn is_unstable_ground(&self, pos: VoxelCoord) -> bool;

    fn replace_ground(&mut self, pos: VoxelCoord, voxel: VoxelType);
}
