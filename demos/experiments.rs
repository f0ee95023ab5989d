//! Compare DFS, BFS and A* on random mazes.
//!
//! Run: cargo run --bin experiments -- --trials 30 --show

use clap::Parser;
use mazer_core::{Grid, MazeConfig};
use mazer_demos::{DemoError, classroom_maze, run_experiment};
use mazer_paths::Algorithm;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "experiments", about = "Compare DFS, BFS and A* on random mazes")]
struct Args {
    /// Number of random mazes to try
    #[arg(long, default_value_t = 30)]
    trials: usize,

    /// Smallest row/column count
    #[arg(long, default_value_t = 5)]
    min_size: usize,

    /// Largest row/column count
    #[arg(long, default_value_t = 10)]
    max_size: usize,

    /// Proportion of cells to block, in [0, 1]
    #[arg(long, default_value_t = 0.2)]
    prop_blocked: f64,

    /// RNG seed; a random one is drawn and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print each maze with every algorithm's path marked
    #[arg(long)]
    show: bool,

    /// Print one JSON report per line instead of text
    #[arg(long)]
    json: bool,

    /// Solve the fixed 10x10 classroom maze instead of random ones
    #[arg(long)]
    classroom: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let result = if args.classroom {
        solve_classroom()
    } else {
        run_trials(&args)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn solve_classroom() -> Result<(), DemoError> {
    let maze = classroom_maze()?;
    println!("{maze}\n");

    for algorithm in Algorithm::ALL {
        let mut copy = maze.clone();
        match algorithm.run(&copy)? {
            Some(outcome) => {
                outcome.mark_on(&mut copy);
                println!(
                    "{algorithm}: {} cells, {} expansions",
                    outcome.path_length(),
                    outcome.expansions()
                );
                println!("{copy}\n");
            }
            None => println!("No solution using {algorithm}\n"),
        }
    }
    Ok(())
}

fn run_trials(args: &Args) -> Result<(), DemoError> {
    if args.min_size == 0 || args.min_size > args.max_size {
        return Err(DemoError::SizeRange {
            min: args.min_size,
            max: args.max_size,
        });
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("running {} trials with seed {seed}", args.trials);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut solved = 0usize;
    let mut mismatched = Vec::new();

    for trial in 0..args.trials {
        let rows = rng.random_range(args.min_size..=args.max_size);
        let cols = rng.random_range(args.min_size..=args.max_size);
        let config = MazeConfig::square_corners(rows, cols, args.prop_blocked);
        let maze = Grid::random(&config, &mut rng)?;

        let Some(report) = run_experiment(&maze)? else {
            if !args.json {
                println!("NO MAZE SOLUTION\n");
            }
            continue;
        };

        solved += 1;
        if !report.bfs_astar_same_length {
            mismatched.push(trial);
        }

        if args.json {
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }
        println!("{report}");
        if args.show {
            for run in &report.runs {
                println!("\n{}:\n{}", run.algorithm, run.grid);
            }
        }
        println!();
    }

    log::info!("{solved} of {} mazes solved", args.trials);
    if !mismatched.is_empty() {
        log::warn!("BFS and A* path lengths differ in trials {mismatched:?}");
    }
    Ok(())
}
