// Core types shared across the refuge search.
//
// Defines spatial coordinates (`VoxelCoord`), the six axis-aligned
// `Direction`s with their horizontal clockwise rotation, voxel materials
// (`VoxelType`) and the biome tags (`Biome`) used as candidate regions. All
// types derive `Serialize` and `Deserialize` so configs and test fixtures can
// be written as JSON.
//
// **Critical constraint: determinism.** Every type here is a plain value with
// a total order where one is needed. Distances are exact integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the 3D voxel grid. Each component is in voxel units.
///
/// The coordinate system uses right-handed conventions:
/// - X: east  (positive) / west  (negative)
/// - Y: up    (positive) / down  (negative)
/// - Z: south (positive) / north (negative)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// This coordinate shifted by `(dx, dy, dz)`.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// This coordinate moved `n` steps in `direction`.
    pub const fn moved(self, direction: Direction, n: i32) -> Self {
        let (dx, dy, dz) = direction.step();
        self.offset(dx * n, dy * n, dz * n)
    }

    pub const fn below(self) -> Self {
        self.moved(Direction::Down, 1)
    }

    pub const fn above(self) -> Self {
        self.moved(Direction::Up, 1)
    }

    /// Same column, different height.
    pub const fn with_y(self, y: i32) -> Self {
        Self::new(self.x, y, self.z)
    }

    /// Squared distance from the centre of this cell to the minimum corner
    /// of `other`, times four: `sum((2 * self + 1 - 2 * other)^2)`.
    ///
    /// Not symmetric. Offsets of 0 and +1 along an axis score the same, as
    /// do -1 and +2. Kept in doubled integer units so comparisons are exact,
    /// and in `i64` so coordinates near the world limit cannot overflow.
    pub fn centre_dist_sqr_x4(self, other: Self) -> i64 {
        let axis = |a: i32, b: i32| {
            let d = 2 * i64::from(a) + 1 - 2 * i64::from(b);
            d * d
        };
        axis(self.x, other.x) + axis(self.y, other.y) + axis(self.z, other.z)
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the three grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// An axis-aligned unit direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit step `(dx, dy, dz)`.
    pub const fn step(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Quarter turn clockwise about the vertical axis, seen from above:
    /// north → east → south → west → north. Up and down are fixed points.
    pub const fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::Down => Direction::Down,
            Direction::Up => Direction::Up,
        }
    }
}

// ---------------------------------------------------------------------------
// Voxel materials
// ---------------------------------------------------------------------------

/// The material of a single voxel in the world grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoxelType {
    #[default]
    Air,
    Netherrack,
    Basalt,
    Blackstone,
    Bedrock,
    Nylium,
    SoulSand,
    Gravel,
    Lava,
}

impl VoxelType {
    /// Passable: a player can occupy this cell.
    pub fn is_empty(self) -> bool {
        self == VoxelType::Air
    }

    /// Can be stood on. Lava blocks movement but is not footing.
    pub fn is_solid(self) -> bool {
        !matches!(self, VoxelType::Air | VoxelType::Lava)
    }

    /// Counts toward the motion-blocking heightmap (fluids included).
    pub fn blocks_motion(self) -> bool {
        self != VoxelType::Air
    }

    /// Ground that falls or burns away and must be replaced before a player
    /// is placed on it.
    pub fn is_unstable(self) -> bool {
        matches!(self, VoxelType::Gravel | VoxelType::Lava)
    }
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// Biome tag attached to every world column. Biomes are the candidate
/// regions the locator searches for.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Biome {
    #[default]
    NetherWastes,
    CrimsonForest,
    WarpedForest,
    SoulSandValley,
    BasaltDeltas,
    GlowstoneCanyon,
}
