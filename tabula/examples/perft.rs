/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::time::Instant;

use clap::Parser;

use tabula::{perft, splitperft, Game};

/// Compute total number of states reachable from the standard starting
/// position, given a depth.
#[derive(Debug, Parser)]
struct Cli {
    /// Depth to run the perft.
    depth: usize,

    /// If set, perform a splitperft, displaying the number of nodes reachable after each move available from the root.
    #[arg(short, long, default_value = "false")]
    split: bool,
}

fn main() {
    let args = Cli::parse();
    let game = Game::standard();

    println!(
        "Computing PERFT({}) of the following position:\n{game}\n",
        args.depth
    );

    let now = Instant::now();
    let total_nodes = if args.split {
        let nodes = splitperft(&game, args.depth);
        println!();
        nodes
    } else {
        perft(&game, args.depth)
    };
    let elapsed = now.elapsed();

    let nps = total_nodes as f64 / elapsed.as_secs_f64();
    println!("Elapsed Time:          {elapsed:.1?}");
    println!("Total Nodes:           {total_nodes}");
    println!("Nodes / Sec:           {nps:.0}");
}
