/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A square on (or off) the board, addressed by file (`x`) and rank (`y`).
///
/// Coordinates are signed so that offset arithmetic near the board edge never
/// wraps; whether a [`Coord`] actually lies on the board is decided by
/// [`Board::contains`](crate::Board::contains).
///
/// # Example
/// ```
/// # use tabula_types::Coord;
/// let e2 = Coord::new(4, 1);
/// assert_eq!(e2 + Coord::new(0, 2), Coord::new(4, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Creates a new [`Coord`] from a file and a rank.
    #[inline(always)]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance to `other`.
    #[inline(always)]
    pub const fn chebyshev(self, other: Coord) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }

    /// The unit step from `self` toward `other`, component-wise signum.
    ///
    /// Only meaningful when the two squares share a rank, file, or diagonal.
    #[inline(always)]
    pub const fn step_toward(self, other: Coord) -> Coord {
        Coord::new((other.x - self.x).signum(), (other.y - self.y).signum())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline(always)]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Coord) {
        *self = *self + rhs;
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline(always)]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Coord::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline(always)]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit directions a Rook slides along.
pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

/// Unit directions a Bishop slides along.
pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

/// Unit directions a Queen slides along (union of Rook and Bishop).
pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

/// The 8 Knight leap offsets.
pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
];

/// The 8 unit steps around a King.
pub const KING_STEPS: [Coord; 8] = [
    Coord { x: -1, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: -1, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 0, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: 1, y: 0 },
    Coord { x: 1, y: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_arithmetic() {
        let a = Coord::new(3, 5);
        let b = Coord::new(-1, 2);
        assert_eq!(a + b, Coord::new(2, 7));
        assert_eq!(a - b, Coord::new(4, 3));
        assert_eq!(-b, Coord::new(1, -2));
        assert_eq!(b * 3, Coord::new(-3, 6));
    }

    #[test]
    fn test_step_toward_is_a_unit_step() {
        let from = Coord::new(2, 2);
        assert_eq!(from.step_toward(Coord::new(7, 7)), Coord::new(1, 1));
        assert_eq!(from.step_toward(Coord::new(2, 0)), Coord::new(0, -1));
        assert_eq!(from.step_toward(Coord::new(0, 2)), Coord::new(-1, 0));
    }

    #[test]
    fn test_offset_tables_are_disjoint_from_origin() {
        for delta in KNIGHT_DELTAS.iter().chain(&KING_STEPS) {
            assert_ne!(*delta, Coord::new(0, 0));
        }
        assert_eq!(QUEEN_DIRS.len(), ROOK_DIRS.len() + BISHOP_DIRS.len());
    }
}
