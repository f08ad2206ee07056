use anyhow::Result;
use clap::Parser;

use knight_paths::find_optimal_path;

/// Fixed move budget of this front end; the library accepts any bound.
const MAX_MOVES: i32 = 3;

#[derive(Parser, Debug)]
#[command(about = "Shortest knight path between two squares of a chessboard")]
struct Args {
    /// Starting square, e.g. A1
    start: String,
    /// Target square, e.g. B1
    target: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let path = find_optimal_path(&args.start, &args.target, MAX_MOVES)?;
    if path.is_empty() {
        println!("No path found between {} and {}", args.start, args.target);
        return Ok(());
    }
    println!("Found a path between those 2 positions, the path is:");
    println!("{}", path.join("->"));
    Ok(())
}
