//! meander — find a contiguous path of N unblocked cells in an NxM grid.

mod cli;

use clap::Parser;
use meander_core::Grid;
use meander_search::{SearchMode, search};
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::parse();
    let blocked = args.validated_blocked_cells()?;

    println!("--- meander: path finder initializing ---");
    println!("grid dimensions: {} rows, {} cols", args.rows, args.cols);
    println!("target path length: {}", args.path_length);
    if !blocked.is_empty() {
        println!("blocked cells provided: {}", blocked.len());
    }
    if args.parallel {
        println!("mode: parallel ({} workers)", args.workers);
    } else {
        println!("mode: single-threaded");
    }
    println!("-----------------------------------------");

    let mut grid = Grid::new(args.rows, args.cols);
    grid.block_cells(&blocked);

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mode = if args.parallel {
        SearchMode::Parallel {
            workers: args.workers,
        }
    } else {
        SearchMode::Single
    };

    println!("searching (seed {seed})...");
    match search(&grid, args.path_length, mode, seed) {
        Some(path) => {
            println!("\n--- path found ---");
            print!("{path}");
        }
        None => println!("\n--- no valid path found ---"),
    }
    Ok(())
}
