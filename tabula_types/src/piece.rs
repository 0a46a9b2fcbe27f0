/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::Not;

use crate::Coord;

/// The two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 2;

    /// Index for array lookups: White = 0, Black = 1.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The other side.
    #[inline(always)]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The rank direction this color's pawns advance in: `+1` for White,
    /// `-1` for Black.
    #[inline(always)]
    pub const fn forward(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

impl Not for Color {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// The six piece kinds.
///
/// A closed enum so that every piece rule is dispatched through exhaustive
/// pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds, in generation order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// The kinds a pawn may promote to, strongest first.
    pub const PROMOTIONS: [Self; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    /// Index for array lookups: Pawn = 0 .. King = 5.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        };
        write!(f, "{name}")
    }
}

/// A piece on the board.
///
/// Carries its own position plus the two per-piece counters the rules need:
/// how many times it has moved (castling and pawn double-step eligibility)
/// and whether it can currently be captured en passant.
///
/// Two pieces with identical fields are still distinct pieces; the engine
/// identifies pieces by their slot in the game state, never by field
/// equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// What kind of piece this is. Changes only on promotion.
    pub kind: PieceKind,

    /// Which side it belongs to.
    pub color: Color,

    /// Where it stands. Always within board bounds.
    pub position: Coord,

    /// How many times it has moved. `0` means it has never moved.
    pub times_moved: u32,

    /// Set on a pawn immediately after a double step; cleared when its side
    /// next moves. While set, the pawn may be captured en passant.
    pub ep_capturable: bool,
}

impl Piece {
    /// Creates a new, unmoved [`Piece`].
    ///
    /// # Example
    /// ```
    /// # use tabula_types::{Color, Coord, Piece, PieceKind};
    /// let knight = Piece::new(PieceKind::Knight, Color::White, Coord::new(1, 0));
    /// assert_eq!(knight.times_moved, 0);
    /// assert!(!knight.ep_capturable);
    /// ```
    #[inline(always)]
    pub const fn new(kind: PieceKind, color: Color, position: Coord) -> Self {
        Self {
            kind,
            color,
            position,
            times_moved: 0,
            ep_capturable: false,
        }
    }

    /// Returns `true` if this piece has never moved.
    #[inline(always)]
    pub const fn is_unmoved(&self) -> bool {
        self.times_moved == 0
    }

    /// Returns `true` if this piece is a pawn.
    #[inline(always)]
    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    /// Returns `true` if this piece is a king.
    #[inline(always)]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.position)
    }
}
