/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::Game;

/// Counts the number of positions reachable from `game` in exactly `depth`
/// legal moves.
///
/// The standard correctness yardstick for a move generator: the totals from
/// the classical starting position are well known, so a single wrong rule
/// anywhere shows up as a wrong count.
///
/// # Example
/// ```
/// # use tabula::*;
/// let game = Game::standard();
/// assert_eq!(perft(&game, 2), 400);
/// ```
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&game.with_move_made(mv), depth - 1))
        .sum()
}

/// Like [`perft`], but prints the node count under each root move before
/// returning the total.
///
/// Useful when a [`perft`] total disagrees with a reference value: comparing
/// per-move counts narrows the wrong rule down to one branch.
pub fn splitperft(game: &Game, depth: usize) -> u64 {
    let mut total = 0;

    for mv in game.legal_moves() {
        let nodes = if depth > 1 {
            perft(&game.with_move_made(mv), depth - 1)
        } else {
            1
        };
        println!("{mv}: {nodes}");
        total += nodes;
    }

    total
}
