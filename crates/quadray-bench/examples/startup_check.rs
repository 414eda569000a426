//! Startup routine example.
//!
//! Demonstrates: install a tracing subscriber → run the geometric
//! self-check → print the report → search a seeded board.
//!
//! Run with `RUST_LOG=debug` to see search diagnostics.

use quadray_bench::reference_board;
use quadray_lattice::{cell_type, key};
use quadray_search::PathFinder;
use quadray_verify::{verify_geometric_identities, VerifyConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Quadray Startup Check ===\n");

    let report = verify_geometric_identities(&VerifyConfig::default());
    println!("{}\n", report.summary());
    if !report.all_passed() {
        tracing::warn!("continuing with a failed geometric self-check");
    }

    let board = reference_board(42);
    println!(
        "Board: {}⁴ lattice, {} walls",
        board.lattice.size(),
        board.walls.len()
    );

    let finder = PathFinder::new(&board.lattice);
    match finder.bfs(board.start(), board.goal(), |c| board.is_walkable(c)) {
        Some(path) => {
            println!("BFS: {} steps", path.steps());
            for cell in path.cells() {
                println!("  {} ({})", key(*cell), cell_type(*cell));
            }
        }
        None => println!("BFS: goal unreachable"),
    }

    let reach = finder.flood_fill(board.start(), |c| board.is_walkable(c), None);
    println!(
        "\nReachable from start: {} of {} cells",
        reach.len(),
        board.lattice.cell_count()
    );
}
