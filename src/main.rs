//! Wordle Testbench - CLI
//!
//! Runs a Wordle solver against a word list, or answers a single query with
//! the built-in letter-frequency solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_testbench::{
    commands::{SolveConfig, run_test_all, solve_query},
    config::HarnessConfig,
    core::{ProtocolTriple, Word},
    harness::{ExternalSolver, Scheduler, SolverCommand},
    output::print_test_all_statistics,
    solver::StrategyType,
    wordlists::{DEFAULT_WORD_LIST, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_testbench",
    about = "Wordle solver testbench with a letter-frequency reference solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short = 'w', long = "list", global = true, env = "WORDLE_LIST")]
    list: Option<PathBuf>,

    /// Maximum solver processes running at once (default: logical cores)
    #[arg(short = 'j', long, global = true, env = "WORDLE_THREADS")]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run SOLVER against WORDS, or against every word in the word list
    ///
    /// SOLVER is a shell command; the three constraint tokens are appended
    /// to it each round. Explicit WORDS show every round in color.
    Test {
        /// Solver command line, e.g. './solver' or 'node solve.js'
        solver: String,

        /// Target words (default: the whole word list)
        words: Vec<String>,
    },

    /// Print the next guess for the given constraints
    Solve {
        /// Confirmed letters by position, '.' for unknown (e.g. `.ra.e`)
        #[arg(allow_hyphen_values = true)]
        place: String,

        /// Misplaced letters per position, comma separated (e.g. `-,-,-,c,-`)
        #[arg(allow_hyphen_values = true)]
        misplaced: String,

        /// Letters not in the word, '-' for none
        #[arg(allow_hyphen_values = true)]
        excluded: String,

        /// Strategy: frequency (default), first
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Test { solver, words } => {
            run_test_command(&solver, &words, cli.list, cli.threads)
        }
        Commands::Solve {
            place,
            misplaced,
            excluded,
            strategy,
        } => run_solve_command(
            ProtocolTriple::new(place, misplaced, excluded),
            &strategy,
            cli.list,
        ),
    }
}

fn run_test_command(
    solver: &str,
    words: &[String],
    list: Option<PathBuf>,
    threads: Option<usize>,
) -> Result<()> {
    let config = HarnessConfig::resolve(list, threads)?;
    let verbose = !words.is_empty();

    let targets = if verbose {
        words
            .iter()
            .map(|w| Word::new(w.as_str()).with_context(|| format!("invalid target word {w:?}")))
            .collect::<Result<Vec<_>>>()?
    } else {
        load_from_file(&config.word_list).with_context(|| {
            format!("failed to read word list {}", config.word_list.display())
        })?
    };

    if !verbose {
        eprintln!("Running with {} threads.", config.threads);
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let stats = runtime.block_on(async {
        let command = SolverCommand::new(solver).env("WORDLE_LIST", &config.word_list);
        let source = Arc::new(ExternalSolver::new(command, Scheduler::new(config.threads)));
        run_test_all(source, targets, verbose).await
    })?;

    if !verbose {
        print_test_all_statistics(&stats, &config.word_list);
    }
    Ok(())
}

fn run_solve_command(query: ProtocolTriple, strategy: &str, list: Option<PathBuf>) -> Result<()> {
    let word_list = list.unwrap_or_else(|| PathBuf::from(DEFAULT_WORD_LIST));
    let config = SolveConfig::new(word_list, StrategyType::from_name(strategy));

    if let Some(guess) = solve_query(&config, &query)? {
        println!("{guess}");
    }
    Ok(())
}
