/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use super::{Board, Color, Coord, Move};

/// Rules an initial position can violate.
///
/// Raised only at game creation, never during play. Piece-kind validity is
/// not represented here because [`PieceKind`](crate::PieceKind) is a closed
/// enum; an illegal kind cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A piece was placed outside the board.
    #[error("piece at {at} lies outside the {board} board")]
    OutOfBounds { at: Coord, board: Board },

    /// Two pieces (of either side) were placed on the same square.
    #[error("two pieces share the square {at}")]
    OccupiedSquare { at: Coord },

    /// A side does not have exactly one king.
    #[error("{color} has {count} kings, exactly one is required")]
    KingCount { color: Color, count: usize },

    /// A piece was supplied in the wrong side's list.
    #[error("piece at {at} was supplied in {expected}'s list but belongs to the other side")]
    ColorMismatch { expected: Color, at: Coord },
}

/// The caller asked to play a move that is not in the current legal set.
///
/// Recoverable: re-query [`Game::legal_moves`](crate::Game::legal_moves) and
/// pick a member. Stale moves held across a successful
/// [`Game::make_move`](crate::Game::make_move) land here, since piece ids are
/// only meaningful for the position they were generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("move {0} is not legal in the current position")]
pub struct IllegalMoveError(pub Move);
