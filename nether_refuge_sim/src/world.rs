// Dense 3D voxel grid with per-column biomes and a world border.
//
// The world is stored as a flat `Vec<VoxelType>` indexed by
// `lx + lz * size_x + y * size_x * size_z`, where `lx`/`lz` are offsets from
// the grid's horizontal origin. The origin may be negative so a world can be
// centred on (0, 0). Out-of-bounds reads return `Air`; out-of-bounds writes
// are no-ops.
//
// Each column also carries a `Biome`. The set of biomes ever written is
// tracked so `knows_region()` can answer without scanning columns, and so
// `nearest_region_point()` can bail out early for biomes the world lacks.
//
// `WorldBorder` is the playable horizontal rectangle. It defaults to the
// grid's extent but can be shrunk independently, which is how tests model
// positions that exist in storage yet are off limits.
//
// See also: `query.rs` for the `RegionQuery` / `RefugeWorld` traits this
// implements, `placement.rs` for the search that reads it.
//
// **Critical constraint: determinism.** No hashing, no interior mutability.
// Region lookups walk rings in a fixed order.

use crate::query::{RefugeWorld, RegionQuery};
use crate::types::{Biome, VoxelCoord, VoxelType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Playable horizontal rectangle: `min_x <= x < max_x`, `min_z <= z < max_z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldBorder {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl WorldBorder {
    pub const fn new(min_x: i32, min_z: i32, max_x: i32, max_z: i32) -> Self {
        Self {
            min_x,
            min_z,
            max_x,
            max_z,
        }
    }

    /// Height is ignored.
    pub fn contains(&self, pos: VoxelCoord) -> bool {
        pos.x >= self.min_x && pos.x < self.max_x && pos.z >= self.min_z && pos.z < self.max_z
    }

    /// Pull a horizontal position at least `inset` inside the border and
    /// within `[-hard_limit, hard_limit]`. When the allowed range is empty
    /// the lower bound wins.
    pub fn clamp_inset(&self, x: f64, z: f64, inset: f64, hard_limit: f64) -> (f64, f64) {
        let lo_x = (-hard_limit).max(f64::from(self.min_x) + inset);
        let lo_z = (-hard_limit).max(f64::from(self.min_z) + inset);
        let hi_x = hard_limit.min(f64::from(self.max_x) - inset);
        let hi_z = hard_limit.min(f64::from(self.max_z) - inset);
        (clamp_lenient(x, lo_x, hi_x), clamp_lenient(z, lo_z, hi_z))
    }
}

/// Under `lo` gives `lo`, otherwise capped at `hi`.
fn clamp_lenient(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo { lo } else { v.min(hi) }
}

/// Dense 3D voxel grid.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    /// Flat storage: index = lx + lz * size_x + y * size_x * size_z.
    voxels: Vec<VoxelType>,
    /// Column biomes: index = lx + lz * size_x.
    biomes: Vec<Biome>,
    known_biomes: BTreeSet<Biome>,
    pub origin_x: i32,
    pub origin_z: i32,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
    pub border: WorldBorder,
}

impl Default for VoxelWorld {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl VoxelWorld {
    /// Create a new world filled with `Air`, spanning `0..size` on each axis.
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> Self {
        Self::with_origin(0, 0, size_x, size_y, size_z)
    }

    /// Create a world whose horizontal extent is centred on (0, 0).
    pub fn centered(size_x: u32, size_y: u32, size_z: u32) -> Self {
        Self::with_origin(
            -((size_x / 2) as i32),
            -((size_z / 2) as i32),
            size_x,
            size_y,
            size_z,
        )
    }

    /// Create a world whose lowest-x, lowest-z column is `(origin_x, origin_z)`.
    /// Every column starts as `NetherWastes`.
    pub fn with_origin(origin_x: i32, origin_z: i32, size_x: u32, size_y: u32, size_z: u32) -> Self {
        let columns = (size_x as usize) * (size_z as usize);
        let total = columns * (size_y as usize);
        let mut known_biomes = BTreeSet::new();
        if columns > 0 {
            known_biomes.insert(Biome::default());
        }
        Self {
            voxels: vec![VoxelType::Air; total],
            biomes: vec![Biome::default(); columns],
            known_biomes,
            origin_x,
            origin_z,
            size_x,
            size_y,
            size_z,
            border: WorldBorder::new(
                origin_x,
                origin_z,
                origin_x + size_x as i32,
                origin_z + size_z as i32,
            ),
        }
    }

    fn column_index(&self, x: i32, z: i32) -> Option<usize> {
        let lx = i64::from(x) - i64::from(self.origin_x);
        let lz = i64::from(z) - i64::from(self.origin_z);
        if lx < 0 || lz < 0 || lx >= i64::from(self.size_x) || lz >= i64::from(self.size_z) {
            return None;
        }
        Some(lx as usize + lz as usize * self.size_x as usize)
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    fn index(&self, coord: VoxelCoord) -> Option<usize> {
        if coord.y < 0 || coord.y as u32 >= self.size_y {
            return None;
        }
        let column = self.column_index(coord.x, coord.z)?;
        let layer = self.size_x as usize * self.size_z as usize;
        Some(column + coord.y as usize * layer)
    }

    /// Read a voxel. Returns `Air` for out-of-bounds coordinates.
    pub fn get(&self, coord: VoxelCoord) -> VoxelType {
        self.index(coord)
            .map(|i| self.voxels[i])
            .unwrap_or(VoxelType::Air)
    }

    /// Write a voxel. No-op for out-of-bounds coordinates.
    pub fn set(&mut self, coord: VoxelCoord, voxel: VoxelType) {
        if let Some(i) = self.index(coord) {
            self.voxels[i] = voxel;
        }
    }

    /// Fill the inclusive box spanned by `a` and `b`. Cells outside the grid
    /// are skipped.
    pub fn fill_box(&mut self, a: VoxelCoord, b: VoxelCoord, voxel: VoxelType) {
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        let (z0, z1) = (a.z.min(b.z), a.z.max(b.z));
        for y in y0..=y1 {
            for z in z0..=z1 {
                for x in x0..=x1 {
                    self.set(VoxelCoord::new(x, y, z), voxel);
                }
            }
        }
    }

    /// Fill every column from y = 0 up to and including `top`.
    pub fn fill_layers(&mut self, top: i32, voxel: VoxelType) {
        if self.size_x == 0 || self.size_z == 0 {
            return;
        }
        let max_x = self.origin_x + self.size_x as i32 - 1;
        let max_z = self.origin_z + self.size_z as i32 - 1;
        self.fill_box(
            VoxelCoord::new(self.origin_x, 0, self.origin_z),
            VoxelCoord::new(max_x, top, max_z),
            voxel,
        );
    }

    /// Biome of a column, or `None` outside the grid.
    pub fn biome_at(&self, x: i32, z: i32) -> Option<Biome> {
        self.column_index(x, z).map(|i| self.biomes[i])
    }

    /// Set the biome of a column. No-op outside the grid.
    pub fn set_biome(&mut self, x: i32, z: i32, biome: Biome) {
        if let Some(i) = self.column_index(x, z) {
            self.biomes[i] = biome;
            self.known_biomes.insert(biome);
        }
    }

    /// Set the biome of every column in the inclusive rectangle.
    pub fn fill_biome(&mut self, x0: i32, z0: i32, x1: i32, z1: i32, biome: Biome) {
        for z in z0.min(z1)..=z0.max(z1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.set_biome(x, z, biome);
            }
        }
    }

    /// Largest ring around `origin` that still touches the grid.
    fn max_useful_ring(&self, origin: VoxelCoord) -> i64 {
        let min_x = i64::from(self.origin_x);
        let min_z = i64::from(self.origin_z);
        let max_x = min_x + i64::from(self.size_x) - 1;
        let max_z = min_z + i64::from(self.size_z) - 1;
        let (ox, oz) = (i64::from(origin.x), i64::from(origin.z));
        [ox - min_x, max_x - ox, oz - min_z, max_z - oz]
            .into_iter()
            .map(i64::abs)
            .max()
            .unwrap_or(0)
    }
}

impl RegionQuery for VoxelWorld {
    type Region = Biome;

    fn is_empty(&self, pos: VoxelCoord) -> bool {
        self.get(pos).is_empty()
    }

    fn is_solid_footing(&self, pos: VoxelCoord) -> bool {
        self.get(pos).is_solid()
    }

    fn height_at(&self, x: i32, z: i32) -> i32 {
        (0..self.size_y as i32)
            .rev()
            .find(|&y| self.get(VoxelCoord::new(x, y, z)).blocks_motion())
            .map_or(0, |y| y + 1)
    }

    fn world_height(&self) -> i32 {
        self.size_y as i32
    }

    fn is_within_boundary(&self, pos: VoxelCoord) -> bool {
        self.border.contains(pos)
    }

    /// Walks square rings of growing radius around `origin` (rows north to
    /// south, columns west to east within a row) and returns the first
    /// matching column.
    fn nearest_region_point(
        &self,
        region: &Biome,
        origin: VoxelCoord,
        radius: u32,
        granularity: u32,
    ) -> Option<VoxelCoord> {
        if !self.known_biomes.contains(region) {
            return None;
        }
        let step = i64::from(granularity.max(1));
        let last_ring = i64::from(radius).min(self.max_useful_ring(origin));
        let matches = |dx: i64, dz: i64| -> Option<VoxelCoord> {
            let x = i32::try_from(i64::from(origin.x) + dx).ok()?;
            let z = i32::try_from(i64::from(origin.z) + dz).ok()?;
            (self.biome_at(x, z) == Some(*region)).then_some(VoxelCoord::new(x, origin.y, z))
        };

        let mut ring = 0;
        while ring <= last_ring {
            let mut dz = -ring;
            while dz <= ring {
                if dz.abs() == ring {
                    let mut dx = -ring;
                    while dx <= ring {
                        if let Some(found) = matches(dx, dz) {
                            return Some(found);
                        }
                        dx += step;
                    }
                } else {
                    // Interior rows only contribute their two edge cells.
                    for dx in [-ring, ring] {
                        if let Some(found) = matches(dx, dz) {
                            return Some(found);
                        }
                    }
                }
                dz += step;
            }
            ring += step;
        }
        None
    }

    fn knows_region(&self, region: &Biome) -> bool {
        self.known_biomes.contains(region)
    }
}

impl RefugeWorld for VoxelWorld {
    fn border(&self) -> WorldBorder {
        self.border
    }

    fn is_unstable_ground(&self, pos: VoxelCoord) -> bool {
        self.get(pos).is_unstable()
    }

    fn replace_ground(&mut self, pos: VoxelCoord, voxel: VoxelType) {
        self.set(pos, voxel);
    }
}
