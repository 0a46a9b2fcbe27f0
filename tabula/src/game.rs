/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::Deref;

use super::{
    in_check, legal_moves, Board, Color, ConstructionError, Coord, IllegalMoveError, Move,
    MoveList, Piece, PieceKind, Position,
};

/// A game of chess: a [`Position`] that only changes through legal moves.
///
/// This is the intended entry point of the crate. Construct one with
/// [`Game::new`] or [`Game::standard`], query [`Game::legal_moves`], and play
/// with [`Game::make_move`], which rejects anything outside the current legal
/// set. Read-only [`Position`] methods are available directly on a [`Game`]
/// through [`Deref`].
///
/// # Example
/// ```
/// # use tabula::*;
/// let mut game = Game::standard();
///
/// let mv = game.legal_moves()[0];
/// game.make_move(mv).unwrap();
///
/// // The move is stale now, so replaying it fails.
/// assert!(game.make_move(mv).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
}

impl Game {
    /// Creates a [`Game`] from explicit piece placements.
    ///
    /// Fails if any piece lies outside `board`, two pieces share a square,
    /// a piece appears in the wrong side's list, or either side does not
    /// have exactly one king.
    pub fn new(
        board: Board,
        white: Vec<Piece>,
        black: Vec<Piece>,
        side_to_move: Color,
    ) -> Result<Self, ConstructionError> {
        let position = Position::new(board, white, black, side_to_move)?;
        Ok(Self { position })
    }

    /// Creates a [`Game`] in the standard starting position: an 8×8 board
    /// with the classical back ranks and pawn rows, White to move.
    ///
    /// # Example
    /// ```
    /// # use tabula::*;
    /// let game = Game::standard();
    /// assert_eq!(game.legal_moves().len(), 20);
    /// ```
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut white = Vec::with_capacity(16);
        let mut black = Vec::with_capacity(16);
        for (x, &kind) in BACK_RANK.iter().enumerate() {
            let x = x as i32;
            white.push(Piece::new(kind, Color::White, Coord::new(x, 0)));
            white.push(Piece::new(PieceKind::Pawn, Color::White, Coord::new(x, 1)));
            black.push(Piece::new(kind, Color::Black, Coord::new(x, 7)));
            black.push(Piece::new(PieceKind::Pawn, Color::Black, Coord::new(x, 6)));
        }

        // Safe unwrap: the standard setup satisfies every construction rule.
        Self::new(Board::default(), white, black, Color::White).unwrap()
    }

    /// The current position.
    #[inline(always)]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    /// All legal moves for the side to move.
    ///
    /// Empty exactly when the game is over: checkmate if the side to move is
    /// in check, stalemate otherwise.
    #[inline(always)]
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.position)
    }

    /// Plays `mv` if it is legal in the current position.
    ///
    /// On success the position is updated and the turn passes to the
    /// opponent. On failure the game is untouched and the move is returned
    /// inside the error.
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        if !self.legal_moves().contains(&mv) {
            return Err(IllegalMoveError(mv));
        }
        self.position.apply(mv);
        Ok(())
    }

    /// Copies `self` and returns the [`Game`] after `mv` has been applied,
    /// without checking legality.
    ///
    /// For callers that walk move trees over already-generated legal moves,
    /// such as [`perft`](crate::perft), where re-validating each move would
    /// double the work.
    #[inline(always)]
    pub fn with_move_made(&self, mv: Move) -> Self {
        Self {
            position: self.position.with_move_applied(mv),
        }
    }

    /// Returns `true` if `color`'s king is currently attacked.
    #[inline(always)]
    pub fn in_check(&self, color: Color) -> bool {
        in_check(&self.position, color)
    }

    /// Returns `true` if the side to move is in check and has no legal moves.
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move()) && self.legal_moves().is_empty()
    }

    /// Returns `true` if the side to move is *not* in check yet has no legal
    /// moves.
    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move()) && self.legal_moves().is_empty()
    }
}

impl Deref for Game {
    type Target = Position;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.position
    }
}

impl Default for Game {
    /// The standard starting position.
    #[inline(always)]
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveKind, PieceId};

    fn find_move(game: &Game, from: Coord, to: Coord) -> Move {
        game.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .unwrap_or_else(|| panic!("no legal move {from} -> {to}"))
    }

    #[test]
    fn test_standard_opening_moves() {
        let game = Game::standard();
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 20);

        // 16 pawn moves and 4 knight moves, nothing else.
        assert_eq!(
            moves
                .iter()
                .filter(|mv| game.piece(mv.piece).is_pawn())
                .count(),
            16
        );
        assert!(moves.iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn test_make_move_rejects_off_book_moves() {
        let mut game = Game::standard();

        // Lifting the king's pawn three squares is not a thing.
        let bogus = Move::new(
            game.piece_id_at(Coord::new(4, 1)).unwrap(),
            Coord::new(4, 1),
            Coord::new(4, 4),
            MoveKind::Quiet,
        );
        let err = game.make_move(bogus).unwrap_err();
        assert_eq!(err, IllegalMoveError(bogus));
        assert_eq!(game, Game::standard());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::standard();
        assert_eq!(game.side_to_move(), Color::White);

        game.make_move(find_move(&game, Coord::new(4, 1), Coord::new(4, 3)))
            .unwrap();
        assert_eq!(game.side_to_move(), Color::Black);

        game.make_move(find_move(&game, Coord::new(4, 6), Coord::new(4, 4)))
            .unwrap();
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::standard();
        game.make_move(find_move(&game, Coord::new(5, 1), Coord::new(5, 2)))
            .unwrap();
        game.make_move(find_move(&game, Coord::new(4, 6), Coord::new(4, 4)))
            .unwrap();
        game.make_move(find_move(&game, Coord::new(6, 1), Coord::new(6, 3)))
            .unwrap();

        // Qh4#
        game.make_move(find_move(&game, Coord::new(3, 7), Coord::new(7, 3)))
            .unwrap();

        assert!(game.in_check(Color::White));
        assert!(game.is_checkmate());
        assert!(!game.is_stalemate());
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_stalemate() {
        // Black king cornered on (0, 7); every flight square is covered but
        // the king itself is not attacked.
        let white = vec![
            Piece::new(PieceKind::King, Color::White, Coord::new(2, 5)),
            Piece::new(PieceKind::Queen, Color::White, Coord::new(2, 6)),
        ];
        let black = vec![Piece::new(PieceKind::King, Color::Black, Coord::new(0, 7))];
        let game = Game::new(Board::default(), white, black, Color::Black).unwrap();

        assert!(!game.in_check(Color::Black));
        assert!(game.is_stalemate());
        assert!(!game.is_checkmate());
    }

    #[test]
    fn test_back_rank_mate() {
        let white = vec![
            Piece::new(PieceKind::King, Color::White, Coord::new(6, 0)),
            Piece::new(PieceKind::Rook, Color::White, Coord::new(0, 7)),
        ];
        let black = vec![
            Piece::new(PieceKind::King, Color::Black, Coord::new(6, 7)),
            Piece::new(PieceKind::Pawn, Color::Black, Coord::new(5, 6)),
            Piece::new(PieceKind::Pawn, Color::Black, Coord::new(6, 6)),
            Piece::new(PieceKind::Pawn, Color::Black, Coord::new(7, 6)),
        ];
        let game = Game::new(Board::default(), white, black, Color::Black).unwrap();
        assert!(game.is_checkmate());
    }

    #[test]
    fn test_nonsquare_board() {
        // Two kings on a narrow 3x12 board.
        let board = Board::new(3, 12);
        let white = vec![Piece::new(PieceKind::King, Color::White, Coord::new(1, 0))];
        let black = vec![Piece::new(PieceKind::King, Color::Black, Coord::new(1, 11))];
        let game = Game::new(board, white, black, Color::White).unwrap();

        // 5 king steps; the bottom rank clips the other 3.
        assert_eq!(game.legal_moves().len(), 5);
    }

    #[test]
    fn test_deref_exposes_position_queries() {
        let game = Game::standard();
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.piece_at(Coord::new(4, 0)).is_some_and(Piece::is_king));
    }

    #[test]
    fn test_castling_end_to_end() {
        let mut game = Game::new(
            Board::default(),
            vec![
                Piece::new(PieceKind::King, Color::White, Coord::new(4, 0)),
                Piece::new(PieceKind::Rook, Color::White, Coord::new(7, 0)),
            ],
            vec![Piece::new(PieceKind::King, Color::Black, Coord::new(4, 7))],
            Color::White,
        )
        .unwrap();

        let castle = game
            .legal_moves()
            .into_iter()
            .find(|mv| mv.kind.is_castle())
            .unwrap();
        game.make_move(castle).unwrap();

        assert!(game.piece_at(Coord::new(6, 0)).is_some_and(Piece::is_king));
        assert_eq!(
            game.piece_at(Coord::new(5, 0)).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
    }

    #[test]
    fn test_promotion_choice_is_respected() {
        let mut game = Game::new(
            Board::default(),
            vec![
                Piece::new(PieceKind::King, Color::White, Coord::new(4, 0)),
                Piece::new(PieceKind::Pawn, Color::White, Coord::new(0, 6)),
            ],
            vec![Piece::new(PieceKind::King, Color::Black, Coord::new(7, 7))],
            Color::White,
        )
        .unwrap();

        let underpromotion = game
            .legal_moves()
            .into_iter()
            .find(|mv| mv.kind.promotion() == Some(PieceKind::Knight))
            .unwrap();
        game.make_move(underpromotion).unwrap();

        assert_eq!(
            game.piece_at(Coord::new(0, 7)).map(|p| p.kind),
            Some(PieceKind::Knight)
        );
    }

    #[test]
    fn test_display_renders_the_grid() {
        let game = Game::standard();
        let rendered = game.to_string();
        assert!(rendered.contains("R N B Q K B N R"));
        assert!(rendered.contains("r n b q k b n r"));
        assert!(rendered.contains("white to move"));
    }

    #[test]
    fn test_move_identity_includes_the_slot() {
        // PieceId equality is part of move equality; a move referencing the
        // wrong slot is rejected even when from/to/kind all line up.
        let mut game = Game::standard();
        let real = find_move(&game, Coord::new(4, 1), Coord::new(4, 3));
        let forged = Move::new(
            PieceId {
                color: real.piece.color,
                index: real.piece.index + 1,
            },
            real.from,
            real.to,
            real.kind,
        );
        assert!(game.make_move(forged).is_err());
    }
}
