/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{Color, Coord, PieceKind};

/// Identifies a piece by its slot in the game state.
///
/// Identity is positional, not structural: two pieces with identical fields
/// are still different pieces. An id is only meaningful for the position it
/// was generated from; after a move is applied, previously issued ids may
/// refer to different pieces (captures shift the opponent's slots), which is
/// why [`Game::make_move`](crate::Game::make_move) validates moves against
/// the *current* legal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    /// Which side's piece list the piece lives in.
    pub color: Color,

    /// Index into that side's piece list.
    pub index: usize,
}

/// What shape of move is being made, beyond "this piece goes there".
///
/// A closed enum so the executor's dispatch is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A move to an empty square.
    Quiet,

    /// Captures the opponent piece on the destination square.
    Capture,

    /// A pawn's initial two-square advance. Makes the pawn capturable en
    /// passant for the opponent's next move.
    DoublePush,

    /// Captures an opponent pawn en passant. The victim stands behind the
    /// destination square, on the moving pawn's starting rank.
    EnPassant,

    /// Castling. The payload identifies the rook taking part.
    Castle(PieceId),

    /// A pawn reaches the farthest rank and becomes `kind`.
    Promotion { kind: PieceKind, capture: bool },
}

impl MoveKind {
    /// Returns `true` if this move removes an opponent piece from the board.
    #[inline(always)]
    pub const fn is_capture(&self) -> bool {
        matches!(
            self,
            Self::Capture | Self::EnPassant | Self::Promotion { capture: true, .. }
        )
    }

    /// The kind the moving pawn becomes, if this is a promotion.
    #[inline(always)]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self {
            Self::Promotion { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if this is a castling move.
    #[inline(always)]
    pub const fn is_castle(&self) -> bool {
        matches!(self, Self::Castle(_))
    }

    /// Returns `true` if this is an en passant capture.
    #[inline(always)]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self, Self::EnPassant)
    }
}

/// A proposed move. Has no effect on any state until executed.
///
/// Produced by move generation; consumed by
/// [`Game::make_move`](crate::Game::make_move) or
/// [`Position::apply`](crate::Position::apply). Equality compares piece
/// identity, origin, destination, and move shape, which is exactly the
/// membership test legality checking needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The piece being moved.
    pub piece: PieceId,

    /// Where it moves from.
    pub from: Coord,

    /// Where it moves to.
    pub to: Coord,

    /// The shape of the move.
    pub kind: MoveKind,
}

impl Move {
    /// Creates a new [`Move`].
    #[inline(always)]
    pub const fn new(piece: PieceId, from: Coord, to: Coord, kind: MoveKind) -> Self {
        Self {
            piece,
            from,
            to,
            kind,
        }
    }

    /// Returns `true` if this move removes an opponent piece from the board.
    #[inline(always)]
    pub const fn is_capture(&self) -> bool {
        self.kind.is_capture()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connector = if self.is_capture() { "x" } else { "->" };
        write!(f, "{} {connector} {}", self.from, self.to)?;
        match self.kind {
            MoveKind::EnPassant => write!(f, " (en passant)"),
            MoveKind::Castle(_) => write!(f, " (castles)"),
            MoveKind::Promotion { kind, .. } => write!(f, " (promotes to {kind})"),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_shapes() {
        assert!(MoveKind::Capture.is_capture());
        assert!(MoveKind::EnPassant.is_capture());
        assert!(MoveKind::Promotion {
            kind: PieceKind::Queen,
            capture: true
        }
        .is_capture());
        assert!(!MoveKind::Quiet.is_capture());
        assert!(!MoveKind::DoublePush.is_capture());
        assert!(!MoveKind::Promotion {
            kind: PieceKind::Queen,
            capture: false
        }
        .is_capture());
    }

    #[test]
    fn test_move_display() {
        let id = PieceId {
            color: Color::White,
            index: 0,
        };
        let quiet = Move::new(id, Coord::new(4, 1), Coord::new(4, 3), MoveKind::DoublePush);
        assert_eq!(quiet.to_string(), "(4, 1) -> (4, 3)");

        let promo = Move::new(
            id,
            Coord::new(0, 6),
            Coord::new(1, 7),
            MoveKind::Promotion {
                kind: PieceKind::Queen,
                capture: true,
            },
        );
        assert_eq!(promo.to_string(), "(0, 6) x (1, 7) (promotes to queen)");
    }
}
