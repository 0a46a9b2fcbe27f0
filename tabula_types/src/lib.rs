/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

/// Rectangular board geometry and bounds testing.
mod board;
/// Board coordinates and the direction/offset tables used by piece rules.
mod coord;
/// Enums for piece kinds, colors, and a struct for a chess piece.
mod piece;

pub use board::*;
pub use coord::*;
pub use piece::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::board::*;
    pub use crate::coord::*;
    pub use crate::piece::*;
}
