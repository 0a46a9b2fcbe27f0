/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;
use std::fmt;

use super::{Board, Color, ConstructionError, Coord, Move, MoveKind, Piece, PieceId, PieceKind};

/// What a square holds, seen from one side's perspective.
///
/// Centralizes bounds checking: piece rules ask this question instead of
/// indexing anything, so they can never reach off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    /// On the board and unoccupied.
    Empty,

    /// Occupied by a piece of the querying side.
    Own,

    /// Occupied by a piece of the other side.
    Opponent,

    /// Outside the board.
    OffBoard,
}

/// The authoritative state of a game: board geometry, both sides' pieces, and
/// whose turn it is.
///
/// Mutated in place by [`Position::apply`] on each accepted move. Cloning
/// produces a fully independent deep copy (the piece lists are owned), which
/// is what the legality filter simulates candidate moves on.
///
/// Invariants, established at construction and preserved by `apply`:
/// * every piece's position is within bounds,
/// * no two pieces (of either side) share a square,
/// * each side has exactly one king.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// The board geometry. Immutable for the lifetime of the game.
    board: Board,

    /// Piece lists, indexed by [`Color::index`]. A [`PieceId`] is a slot in
    /// one of these.
    pieces: [Vec<Piece>; Color::COUNT],

    /// The side whose turn it is.
    side_to_move: Color,
}

impl Position {
    /// Creates a new [`Position`] from validated initial placements.
    ///
    /// # Example
    /// ```
    /// # use tabula::*;
    /// let white = vec![Piece::new(PieceKind::King, Color::White, Coord::new(0, 0))];
    /// let black = vec![Piece::new(PieceKind::King, Color::Black, Coord::new(2, 2))];
    /// let pos = Position::new(Board::new(3, 3), white, black, Color::White).unwrap();
    /// assert_eq!(pos.side_to_move(), Color::White);
    /// ```
    pub fn new(
        board: Board,
        white: Vec<Piece>,
        black: Vec<Piece>,
        side_to_move: Color,
    ) -> Result<Self, ConstructionError> {
        let mut occupied = HashSet::new();

        for (expected, list) in [(Color::White, &white), (Color::Black, &black)] {
            let mut kings = 0;

            for piece in list {
                let at = piece.position;
                if piece.color != expected {
                    return Err(ConstructionError::ColorMismatch { expected, at });
                }
                if !board.contains(at) {
                    return Err(ConstructionError::OutOfBounds { at, board });
                }
                if !occupied.insert(at) {
                    return Err(ConstructionError::OccupiedSquare { at });
                }
                kings += usize::from(piece.is_king());
            }

            if kings != 1 {
                return Err(ConstructionError::KingCount {
                    color: expected,
                    count: kings,
                });
            }
        }

        Ok(Self {
            board,
            pieces: [white, black],
            side_to_move,
        })
    }

    /// The board geometry.
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// All of `color`'s pieces, in slot order.
    #[inline(always)]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    /// The piece in the slot `id`.
    ///
    /// # Panics
    /// Panics if `id` does not name a live slot. Ids are only meaningful for
    /// the position that issued them.
    #[inline(always)]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.color.index()][id.index]
    }

    #[inline(always)]
    fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.color.index()][id.index]
    }

    /// The piece standing on `at`, if any.
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.pieces
            .iter()
            .flatten()
            .find(|piece| piece.position == at)
    }

    /// The slot of the piece standing on `at`, if any.
    pub fn piece_id_at(&self, at: Coord) -> Option<PieceId> {
        for color in [Color::White, Color::Black] {
            if let Some(index) = self.pieces(color).iter().position(|p| p.position == at) {
                return Some(PieceId { color, index });
            }
        }
        None
    }

    /// What `at` holds, from `perspective`'s point of view.
    ///
    /// # Example
    /// ```
    /// # use tabula::*;
    /// let game = Game::standard();
    /// assert_eq!(game.occupancy(Coord::new(4, 4), Color::White), Occupancy::Empty);
    /// assert_eq!(game.occupancy(Coord::new(4, 1), Color::White), Occupancy::Own);
    /// assert_eq!(game.occupancy(Coord::new(4, 6), Color::White), Occupancy::Opponent);
    /// assert_eq!(game.occupancy(Coord::new(8, 4), Color::White), Occupancy::OffBoard);
    /// ```
    pub fn occupancy(&self, at: Coord, perspective: Color) -> Occupancy {
        if !self.board.contains(at) {
            return Occupancy::OffBoard;
        }
        match self.piece_at(at) {
            None => Occupancy::Empty,
            Some(piece) if piece.color == perspective => Occupancy::Own,
            Some(_) => Occupancy::Opponent,
        }
    }

    /// `color`'s king.
    ///
    /// # Panics
    /// Panics if `color` has no king. Unreachable through any public sequence
    /// of valid calls; a missing king means the state is corrupted.
    pub fn king(&self, color: Color) -> &Piece {
        self.pieces(color)
            .iter()
            .find(|piece| piece.is_king())
            .expect("state invariant broken: side has no king")
    }

    /// Applies `mv` to this position in place and advances the turn.
    ///
    /// Never fails for a move generated from this same position. Applying a
    /// move that is inconsistent with the current state is a programming
    /// error and panics.
    pub fn apply(&mut self, mv: Move) {
        let mover = mv.piece.color;
        debug_assert_eq!(mover, self.side_to_move, "move applied out of turn");
        debug_assert_eq!(self.piece(mv.piece).position, mv.from, "stale move");

        // The mover's own en passant eligibility expires now: it was granted
        // on this side's previous move and the opponent has since replied.
        for piece in self.pieces[mover.index()].iter_mut() {
            piece.ep_capturable = false;
        }

        match mv.kind {
            MoveKind::EnPassant => {
                // The victim stands behind the destination, on the moving
                // pawn's starting rank.
                let victim_at = Coord::new(mv.to.x, mv.from.y);
                let victim = self.remove_at(mover.opponent(), victim_at);
                debug_assert!(victim.is_pawn() && victim.ep_capturable);

                let pawn = self.piece_mut(mv.piece);
                pawn.position = mv.to;
                pawn.times_moved += 1;
            }

            MoveKind::Castle(rook_id) => {
                // The rook ends up adjacent to the king's new square, on the
                // side it came from.
                let side = (self.piece(rook_id).position.x - mv.from.x).signum();

                let king = self.piece_mut(mv.piece);
                king.position = mv.to;
                king.times_moved += 1;

                let rook = self.piece_mut(rook_id);
                rook.position = Coord::new(mv.to.x - side, mv.to.y);
                rook.times_moved += 1;
            }

            _ => {
                if mv.kind.is_capture() {
                    self.remove_at(mover.opponent(), mv.to);
                }

                let piece = self.piece_mut(mv.piece);
                piece.position = mv.to;
                piece.times_moved += 1;

                if let Some(kind) = mv.kind.promotion() {
                    piece.kind = kind;
                } else if mv.kind == MoveKind::DoublePush {
                    piece.ep_capturable = true;
                }
            }
        }

        self.side_to_move = self.side_to_move.opponent();
    }

    /// Copies `self` and returns the [`Position`] after `mv` has been applied.
    #[inline(always)]
    pub fn with_move_applied(&self, mv: Move) -> Self {
        let mut copied = self.clone();
        copied.apply(mv);
        copied
    }

    /// Removes and returns `color`'s piece at `at`.
    ///
    /// Removal preserves the slot order of the remaining pieces. Only ever
    /// called on the opponent of the currently moving side, so the mover's
    /// own slot index stays valid throughout `apply`.
    fn remove_at(&mut self, color: Color, at: Coord) -> Piece {
        let list = &mut self.pieces[color.index()];
        let index = list
            .iter()
            .position(|piece| piece.position == at)
            .unwrap_or_else(|| panic!("no {color} piece to capture at {at}"));
        list.remove(index)
    }
}

impl fmt::Display for Position {
    /// Renders the board as a rank-by-rank grid, highest rank first, with
    /// uppercase letters for White and lowercase for Black.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.board.height()).rev() {
            write!(f, "{y:2}| ")?;
            for x in 0..self.board.width() {
                let symbol = match self.piece_at(Coord::new(x, y)) {
                    Some(piece) => {
                        let c = match piece.kind {
                            PieceKind::Pawn => 'p',
                            PieceKind::Knight => 'n',
                            PieceKind::Bishop => 'b',
                            PieceKind::Rook => 'r',
                            PieceKind::Queen => 'q',
                            PieceKind::King => 'k',
                        };
                        match piece.color {
                            Color::White => c.to_ascii_uppercase(),
                            Color::Black => c,
                        }
                    }
                    None => '.',
                };
                write!(f, "{symbol} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "     {} to move", self.side_to_move)
    }
}
