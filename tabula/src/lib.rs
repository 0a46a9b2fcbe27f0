/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

pub use tabula_types::*;

/// Errors surfaced at game construction and move application.
mod error;
/// High-level abstraction of a game: legality-checked moves, mate and stalemate queries.
mod game;
/// All code related to generating moves (legal and pseudo-legal) and detecting attacks.
mod movegen;
/// Structs for modeling the movement of a piece on the board.
mod moves;
/// Utility function for correctness and performance testing.
mod perft;
/// The authoritative game state: piece lists, side to move, and move application.
mod position;

pub use error::*;
pub use game::*;
pub use movegen::*;
pub use moves::*;
pub use perft::*;
pub use position::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::error::*;
    pub use crate::game::*;
    pub use crate::movegen::*;
    pub use crate::moves::*;
    pub use crate::perft::*;
    pub use crate::position::*;
    pub use tabula_types::*;
}
