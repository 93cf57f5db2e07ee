//! Mastermind Minimax - CLI
//!
//! Code-breaking solver driven by worst-case minimax search over the full
//! candidate space.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_minimax::{
    commands::{
        SolveConfig, analyze_guess, print_exhaustive_statistics, run_benchmark, run_exhaustive,
        run_interactive, solve_secret,
    },
    core::{GameParams, Sequence},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind_minimax",
    about = "Mastermind code breaker using Knuth-style worst-case minimax search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors on the board
    #[arg(short, long, global = true, default_value_t = 8)]
    colors: u16,

    /// Number of pegs per code
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Attempt budget before the game is lost
    #[arg(short, long, global = true, default_value_t = 8)]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor mode (default): you score, the solver guesses
    Simple,

    /// Crack a specific secret, or a random one when omitted
    Solve {
        /// The secret code, e.g. "0,0,1,2,3"
        secret: Option<String>,

        /// Show per-round candidate counts and search progress
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the worst-case profile of a specific guess
    Analyze {
        /// Guess to analyze, e.g. "0,0,1,2,3"
        guess: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,
    },

    /// Test the solver on every possible secret
    TestAll {
        /// Limit the number of secrets to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let params = GameParams::new(cli.colors, cli.length, cli.attempts)?;

    // Default to the interactive advisor if no command is given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_interactive(params).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { secret, verbose } => run_solve_command(params, secret.as_deref(), verbose),
        Commands::Analyze { guess } => run_analyze_command(params, &guess),
        Commands::Benchmark { count } => {
            let result = run_benchmark(params, count)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!(
                "Testing all {} secrets of the {}x{} board...",
                params.space_size().min(limit.unwrap_or(usize::MAX)),
                params.colors(),
                params.length()
            );
            let stats = run_exhaustive(params, limit)?;
            print_exhaustive_statistics(&stats);
            Ok(())
        }
    }
}

fn run_solve_command(params: GameParams, secret: Option<&str>, verbose: bool) -> Result<()> {
    let secret = secret.map(str::parse::<Sequence>).transpose()?;

    let config = SolveConfig { secret, verbose };
    let result = solve_secret(params, config)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(params: GameParams, guess: &str) -> Result<()> {
    let guess: Sequence = guess.parse()?;
    let result = analyze_guess(&params, &guess)?;

    print_analysis_result(&result);
    Ok(())
}
