// Square spiral enumeration of grid columns.
//
// `Spiral` walks every column of the `(2r + 1)²` square centred on a
// position exactly once, ring by ring. The walk is a sequence of straight
// legs: leg `k` is `k / 2 + 1` steps long and heads along
// `[rotation, expansion, -rotation, -expansion][k % 4]`. With rotation east
// and expansion south the first ring reads east, south-east, south,
// south-west, west, north-west, north, north-east (clockwise seen from
// above). The walk stops after leg `4r`.
//
// The y component of every yielded coordinate is the centre's y.
//
// See also: `placement.rs`, which scans the columns in this order and
// relies on it for tie-breaking between equidistant candidates.

use crate::types::{Axis, Direction, VoxelCoord};

/// Iterator over the columns of a square spiral.
#[derive(Clone, Debug)]
pub struct Spiral {
    legs_dirs: [Direction; 4],
    /// Last yielded position (or the pre-start cursor).
    cursor: VoxelCoord,
    last_leg: i32,
    leg: i32,
    leg_len: i32,
    leg_step: i32,
    remaining: usize,
}

impl Spiral {
    /// Spiral around `center` out to Chebyshev distance `radius`.
    ///
    /// `rotation` and `expansion` must be horizontal and on different axes.
    pub fn new(center: VoxelCoord, radius: u32, rotation: Direction, expansion: Direction) -> Self {
        assert!(
            rotation.axis() != Axis::Y && expansion.axis() != Axis::Y,
            "spiral directions must be horizontal"
        );
        assert!(
            rotation.axis() != expansion.axis(),
            "spiral directions must lie on different axes"
        );
        let radius = radius.min(i32::MAX as u32 / 8) as i32;
        let side = 2 * radius as usize + 1;
        Self {
            legs_dirs: [
                rotation,
                expansion,
                rotation.opposite(),
                expansion.opposite(),
            ],
            // The first step undoes this offset and lands on the centre.
            cursor: center.moved(expansion, 1),
            last_leg: 4 * radius,
            leg: -1,
            leg_len: 0,
            leg_step: 0,
            remaining: side * side,
        }
    }

    /// Clockwise spiral: rotating east, expanding south.
    pub fn clockwise(center: VoxelCoord, radius: u32) -> Self {
        Self::new(center, radius, Direction::East, Direction::South)
    }
}

impl Iterator for Spiral {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<VoxelCoord> {
        if self.remaining == 0 {
            return None;
        }
        // The step that opens a new leg still travels along the previous
        // leg's heading; the turn shows up on the step after.
        let heading = self.legs_dirs[self.leg.rem_euclid(4) as usize];
        let next = self.cursor.moved(heading, 1);
        if self.leg_step >= self.leg_len {
            if self.leg >= self.last_leg {
                self.remaining = 0;
                return None;
            }
            self.leg += 1;
            self.leg_step = 0;
            self.leg_len = self.leg / 2 + 1;
        }
        self.leg_step += 1;
        self.cursor = next;
        self.remaining -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Spiral {}
