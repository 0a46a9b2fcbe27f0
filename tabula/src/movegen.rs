/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{
    Color, Coord, Move, MoveKind, Occupancy, Piece, PieceId, PieceKind, Position, BISHOP_DIRS,
    KING_STEPS, KNIGHT_DELTAS, QUEEN_DIRS, ROOK_DIRS,
};

/// A list of [`Move`]s.
pub type MoveList = Vec<Move>;

/// Generates every legal move for the side to move in `position`.
///
/// A pseudo-legal move is legal iff playing it does not leave the mover's own
/// king attacked. Each candidate is tested by applying it to a copy of the
/// position, which uniformly covers pins, moving into check, and capturing a
/// defended checker; castling additionally pre-filters on the attack rules in
/// [`castle_moves`].
///
/// # Example
/// ```
/// # use tabula::*;
/// let game = Game::standard();
/// assert_eq!(legal_moves(game.position()).len(), 20);
/// ```
pub fn legal_moves(position: &Position) -> MoveList {
    let mover = position.side_to_move();
    pseudo_legal_moves(position)
        .into_iter()
        .filter(|&mv| !in_check(&position.with_move_applied(mv), mover))
        .collect()
}

/// Generates every pseudo-legal move for the side to move in `position`.
///
/// Pseudo-legal means the move obeys its piece's movement rules but has not
/// been checked for leaving the mover's king attacked.
pub fn pseudo_legal_moves(position: &Position) -> MoveList {
    let color = position.side_to_move();
    let mut moves = MoveList::new();

    for (index, piece) in position.pieces(color).iter().enumerate() {
        let id = PieceId { color, index };
        match piece.kind {
            PieceKind::Pawn => pawn_moves(position, id, piece, &mut moves),
            PieceKind::Knight => leaper_moves(position, id, piece, &KNIGHT_DELTAS, &mut moves),
            PieceKind::Bishop => slider_moves(position, id, piece, &BISHOP_DIRS, &mut moves),
            PieceKind::Rook => slider_moves(position, id, piece, &ROOK_DIRS, &mut moves),
            PieceKind::Queen => slider_moves(position, id, piece, &QUEEN_DIRS, &mut moves),
            PieceKind::King => {
                leaper_moves(position, id, piece, &KING_STEPS, &mut moves);
                castle_moves(position, id, piece, &mut moves);
            }
        }
    }

    moves
}

/// Walks each ray in `dirs` from the slider's square, stopping at the first
/// blocker or the board edge.
fn slider_moves(
    position: &Position,
    id: PieceId,
    piece: &Piece,
    dirs: &[Coord],
    moves: &mut MoveList,
) {
    for &dir in dirs {
        let mut to = piece.position + dir;
        loop {
            match position.occupancy(to, piece.color) {
                Occupancy::Empty => moves.push(Move::new(id, piece.position, to, MoveKind::Quiet)),
                Occupancy::Opponent => {
                    moves.push(Move::new(id, piece.position, to, MoveKind::Capture));
                    break;
                }
                Occupancy::Own | Occupancy::OffBoard => break,
            }
            to += dir;
        }
    }
}

/// One candidate square per offset, for Knights and the King's single steps.
fn leaper_moves(
    position: &Position,
    id: PieceId,
    piece: &Piece,
    offsets: &[Coord],
    moves: &mut MoveList,
) {
    for &offset in offsets {
        let to = piece.position + offset;
        match position.occupancy(to, piece.color) {
            Occupancy::Empty => moves.push(Move::new(id, piece.position, to, MoveKind::Quiet)),
            Occupancy::Opponent => moves.push(Move::new(id, piece.position, to, MoveKind::Capture)),
            Occupancy::Own | Occupancy::OffBoard => {}
        }
    }
}

/// Pawn pushes, diagonal captures, and en passant.
///
/// Every destination goes through [`push_pawn_move`], so any pawn move that
/// lands on the farthest rank is expanded into the four promotions.
fn pawn_moves(position: &Position, id: PieceId, piece: &Piece, moves: &mut MoveList) {
    let forward = Coord::new(0, piece.color.forward());
    let from = piece.position;

    let single = from + forward;
    if position.occupancy(single, piece.color) == Occupancy::Empty {
        push_pawn_move(position, id, piece, single, MoveKind::Quiet, moves);

        let double = single + forward;
        if piece.is_unmoved() && position.occupancy(double, piece.color) == Occupancy::Empty {
            push_pawn_move(position, id, piece, double, MoveKind::DoublePush, moves);
        }
    }

    for dx in [-1, 1] {
        let to = from + forward + Coord::new(dx, 0);
        if position.occupancy(to, piece.color) == Occupancy::Opponent {
            push_pawn_move(position, id, piece, to, MoveKind::Capture, moves);
        }

        // En passant: an opponent pawn beside us just double-stepped, and the
        // square diagonally behind it is free to land on.
        let beside = from + Coord::new(dx, 0);
        let passed = position
            .piece_at(beside)
            .is_some_and(|p| p.color != piece.color && p.is_pawn() && p.ep_capturable);
        if passed && position.occupancy(to, piece.color) == Occupancy::Empty {
            moves.push(Move::new(id, from, to, MoveKind::EnPassant));
        }
    }
}

/// Records a pawn move, expanding it into the four promotion choices when the
/// destination is the pawn's farthest rank.
fn push_pawn_move(
    position: &Position,
    id: PieceId,
    piece: &Piece,
    to: Coord,
    kind: MoveKind,
    moves: &mut MoveList,
) {
    if to.y == position.board().promotion_rank(piece.color) {
        let capture = kind.is_capture();
        for target in PieceKind::PROMOTIONS {
            moves.push(Move::new(
                id,
                piece.position,
                to,
                MoveKind::Promotion {
                    kind: target,
                    capture,
                },
            ));
        }
    } else {
        moves.push(Move::new(id, piece.position, to, kind));
    }
}

/// Castling candidates for the King.
///
/// The King pairs with each of its own unmoved Rooks on the same rank at
/// least two files away. All squares strictly between the two must be empty,
/// and the King's start, transit, and destination squares must not be
/// attacked. The King always ends two files toward the Rook, and the Rook
/// lands on the square the King crossed.
fn castle_moves(position: &Position, id: PieceId, king: &Piece, moves: &mut MoveList) {
    if !king.is_unmoved() {
        return;
    }
    let from = king.position;
    let opponent = king.color.opponent();

    'rooks: for (index, rook) in position.pieces(king.color).iter().enumerate() {
        let offset = rook.position.x - from.x;
        if rook.kind != PieceKind::Rook
            || !rook.is_unmoved()
            || rook.position.y != from.y
            || offset.abs() < 2
        {
            continue;
        }

        let side = offset.signum();
        for x in 1..offset.abs() {
            let between = Coord::new(from.x + side * x, from.y);
            if position.piece_at(between).is_some() {
                continue 'rooks;
            }
        }

        let to = Coord::new(from.x + side * 2, from.y);
        for square in [from, Coord::new(from.x + side, from.y), to] {
            if is_attacked(position, square, opponent) {
                continue 'rooks;
            }
        }

        let rook_id = PieceId {
            color: king.color,
            index,
        };
        moves.push(Move::new(id, from, to, MoveKind::Castle(rook_id)));
    }
}

/// Returns `true` if any of `by`'s pieces attacks the square `at`.
///
/// Considers plain piece movement only: castling cannot capture, pawn pushes
/// do not attack, and en passant state is irrelevant to whether a square is
/// covered. A piece standing on `at` itself does not attack it.
pub fn is_attacked(position: &Position, at: Coord, by: Color) -> bool {
    position.pieces(by).iter().any(|piece| {
        let from = piece.position;
        if from == at {
            return false;
        }
        let delta = at - from;
        match piece.kind {
            PieceKind::Pawn => delta.y == by.forward() && delta.x.abs() == 1,
            PieceKind::Knight => KNIGHT_DELTAS.contains(&delta),
            PieceKind::King => from.chebyshev(at) == 1,
            PieceKind::Rook => {
                (delta.x == 0 || delta.y == 0) && ray_clear(position, from, at)
            }
            PieceKind::Bishop => delta.x.abs() == delta.y.abs() && ray_clear(position, from, at),
            PieceKind::Queen => {
                (delta.x == 0 || delta.y == 0 || delta.x.abs() == delta.y.abs())
                    && ray_clear(position, from, at)
            }
        }
    })
}

/// Returns `true` if the squares strictly between `from` and `to` are empty.
///
/// Callers guarantee the two squares share a rank, file, or diagonal.
fn ray_clear(position: &Position, from: Coord, to: Coord) -> bool {
    let step = from.step_toward(to);
    let mut square = from + step;
    while square != to {
        if position.piece_at(square).is_some() {
            return false;
        }
        square += step;
    }
    true
}

/// Returns `true` if `color`'s king is attacked in `position`.
///
/// # Example
/// ```
/// # use tabula::*;
/// let game = Game::standard();
/// assert!(!in_check(game.position(), Color::White));
/// ```
#[inline(always)]
pub fn in_check(position: &Position, color: Color) -> bool {
    is_attacked(position, position.king(color).position, color.opponent())
}
