/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{Color, Coord};

/// The geometry of a rectangular board: `width` files by `height` ranks.
///
/// Playable squares are `[0, width) × [0, height)`. Geometry is fixed for the
/// lifetime of a game; every bounds decision in the engine goes through
/// [`Board::contains`].
///
/// # Example
/// ```
/// # use tabula_types::{Board, Coord};
/// let board = Board::default();
/// assert!(board.contains(Coord::new(7, 7)));
/// assert!(!board.contains(Coord::new(8, 0)));
/// assert!(!board.contains(Coord::new(0, -1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    /// Creates a board of the given dimensions.
    ///
    /// # Panics
    /// Panics if either dimension is less than 1.
    #[inline(always)]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "board dimensions must be at least 1x1, got {width}x{height}"
        );
        Self { width, height }
    }

    /// Number of files on this board.
    #[inline(always)]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of ranks on this board.
    #[inline(always)]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` if `at` is a playable square.
    #[inline(always)]
    pub const fn contains(&self, at: Coord) -> bool {
        at.x >= 0 && at.x < self.width && at.y >= 0 && at.y < self.height
    }

    /// The rank on which `color`'s pawns promote: the farthest rank from that
    /// color's own side.
    #[inline(always)]
    pub const fn promotion_rank(&self, color: Color) -> i32 {
        match color {
            Color::White => self.height - 1,
            Color::Black => 0,
        }
    }
}

impl Default for Board {
    /// A classical 8×8 board.
    #[inline(always)]
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
