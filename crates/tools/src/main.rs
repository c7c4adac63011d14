use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use board_core::{BoardDocument, BoardGenerator, GeneratedBoard, verify_document};
use clap::{Parser, Subcommand};
use log::info;
use tools::cli::{BoardArgs, HoleArg, SearchArg};
use tools::print::render_grid;
use tools::seed::SeedChoice;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a board and write its JSON document
    Generate {
        #[command(flatten)]
        board: BoardArgs,

        /// Seed for the generator; derived from the clock when omitted
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path of the JSON document to write instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the board as a text grid on stderr
        #[arg(short, long, default_value_t = false)]
        print: bool,
    },
    /// Check that every landmark of a board document still reaches the hub
    Verify {
        /// Path to the board JSON document
        file: PathBuf,

        #[arg(value_enum, long, default_value_t = HoleArg::Passable)]
        hole_policy: HoleArg,

        #[arg(value_enum, long, default_value_t = SearchArg::Heuristic)]
        search: SearchArg,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    tools::logging::init(cli.debug);

    match cli.command {
        Command::Generate { board, seed, output, print } => {
            generate(&board, SeedChoice::resolve(seed), output, print)
        }
        Command::Verify { file, hole_policy, search } => verify(&file, hole_policy, search),
    }
}

fn generate(
    board_args: &BoardArgs,
    seed: SeedChoice,
    output: Option<PathBuf>,
    print: bool,
) -> Result<ExitCode> {
    let config = board_args.resolve()?;
    let board = BoardGenerator::new(config, seed.value())
        .generate()
        .context("Board generation failed")?;

    let json = board.document.to_json_pretty().context("Failed to serialize board document")?;
    match &output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write board file: {}", path.display()))?;
            info!("board written to {}", path.display());
        }
        None => println!("{json}"),
    }

    if print {
        eprint!("{}", render_grid(&board.grid));
    }
    report(&board, seed);
    Ok(ExitCode::SUCCESS)
}

fn report(board: &GeneratedBoard, seed: SeedChoice) {
    let origin = match seed {
        SeedChoice::Cli(_) => "from --seed",
        SeedChoice::Generated(_) => "generated",
    };
    let stats = &board.stats;
    eprintln!("Seed: {} ({origin})", seed.value());
    eprintln!("Fingerprint: {:016x}", board.document.fingerprint());
    if let (Some(budget), Some(target)) = (stats.wall_budget, stats.wall_target) {
        eprintln!("Wall budget: {budget} (target {target})");
    }
    eprintln!(
        "Walls: {} committed, {} rejected, {} attempts",
        stats.walls_committed, stats.walls_rejected, stats.wall_attempts
    );
    eprintln!("Oracle queries: {}", stats.oracle_queries);
    eprintln!("River tiles: {} in {} runs", stats.river_tiles, stats.river_runs);
    if stats.holes_skipped > 0 {
        eprintln!("Holes skipped: {}", stats.holes_skipped);
    }
}

fn verify(file: &Path, hole_policy: HoleArg, search: SearchArg) -> Result<ExitCode> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read board file: {}", file.display()))?;
    let document = BoardDocument::from_json(&source)
        .with_context(|| format!("Failed to parse board document: {}", file.display()))?;

    let feasibility = verify_document(&document, hole_policy.into(), search.into())
        .context("Board document is malformed")?;
    println!("Board: {}", document.name);
    println!("Queries: {}", feasibility.queries_run);
    if feasibility.ok {
        println!("Every landmark reaches the hub.");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("A landmark is cut off from the hub.");
        Ok(ExitCode::FAILURE)
    }
}
