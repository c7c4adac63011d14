use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail, ensure};
use board_core::{BoardConfig, Field, GeneratedBoard, WallStrategy, generate_board, verify_document};
use clap::Parser;
use log::debug;
use tools::cli::BoardArgs;

/// Runs both wall strategies over consecutive seeds and compares their output.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 100)]
    runs: u64,

    /// First seed; run `n` uses `seed + n`
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    #[command(flatten)]
    board: BoardArgs,
}

#[derive(Default)]
struct Tally {
    boards: u64,
    walls: usize,
    oracle_queries: usize,
    elapsed: Duration,
}

impl Tally {
    fn average(&self, total: usize) -> f64 {
        if self.boards == 0 { 0.0 } else { total as f64 / self.boards as f64 }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tools::logging::init(args.debug);

    let mut base = args.board.resolve()?;
    base.walls = true;
    println!(
        "Comparing wall strategies on {}x{} boards over {} seeds starting at {}...",
        base.width, base.height, args.runs, args.seed
    );

    for strategy in [WallStrategy::Budgeted, WallStrategy::PerCell] {
        let config = BoardConfig { wall_strategy: strategy, ..base.clone() };
        let mut tally = Tally::default();

        for run in 0..args.runs {
            let seed = args.seed.wrapping_add(run);
            let started = Instant::now();
            let board = generate_board(&config, seed)
                .with_context(|| format!("{strategy:?} generation failed for seed {seed}"))?;
            tally.elapsed += started.elapsed();

            check_invariants(&config, &board).with_context(|| format!("{strategy:?} seed {seed}"))?;
            debug!("{strategy:?} seed {seed}: {} walls", board.document.walls.len());
            tally.boards += 1;
            tally.walls += board.document.walls.len();
            tally.oracle_queries += board.stats.oracle_queries;
        }

        println!("{strategy:?}:");
        println!("  Avg walls per board: {:.2}", tally.average(tally.walls));
        println!("  Avg oracle queries: {:.2}", tally.average(tally.oracle_queries));
        println!("  Total elapsed: {:?}", tally.elapsed);
    }

    Ok(())
}

fn check_invariants(config: &BoardConfig, board: &GeneratedBoard) -> Result<()> {
    let eyes = board.grid.count_matching(|field| matches!(field, Field::Eye { .. }));
    ensure!(eyes == 1, "Invariant failed: {eyes} eyes on the board");

    let rivers = board.document.river_fields.len();
    let occupied = board.grid.cell_count() - board.grid.free_count() - rivers;
    ensure!(
        occupied + board.stats.holes_skipped == config.required_occupied(),
        "Invariant failed: {occupied} occupied cells for {} required",
        config.required_occupied()
    );

    if let Some(budget) = board.stats.wall_budget {
        ensure!(
            board.document.walls.len() <= budget,
            "Invariant failed: {} walls over budget {budget}",
            board.document.walls.len()
        );
    }

    let feasibility = verify_document(&board.document, config.hole_policy, config.search_mode)?;
    if !feasibility.ok {
        bail!("Invariant failed: a landmark is cut off from the hub");
    }
    Ok(())
}
