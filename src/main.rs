//! Champdle - CLI
//!
//! Guess-the-champion game with TUI and line modes, plus self-play analysis.

use anyhow::{Context, Result};
use champdle::{
    catalog::{Catalog, loader::load_from_file},
    commands::{compare_entities, print_test_all_statistics, run_simple, run_test_all},
    core::Schema,
    game::Session,
    output::{print_comparison, print_suggestions},
    solver::{Solver, StrategyType},
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "champdle",
    about = "Guess the secret champion, attribute by attribute",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog file to load instead of the bundled champions
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for target selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Fix the first target by identifier or name
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Strategy for hints and self-play: minimax (default), first, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Compare one champion against another
    Compare {
        /// The guessed champion
        guess: String,

        /// The champion to compare against
        target: String,
    },

    /// List champions whose name starts with a prefix
    Suggest {
        /// Name prefix (case-insensitive)
        prefix: String,
    },

    /// Let the solver play against every champion
    TestAll {
        /// Limit number of targets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the bundled catalog, or a custom one from `path`
fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => load_from_file(path, Schema::champions())
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Catalog::champions().context("bundled champion catalog is invalid"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&catalog, cli.seed, cli.target.as_deref()),
        Commands::Simple => run_simple_command(&catalog, cli.seed, cli.target.as_deref()),
        Commands::Compare { guess, target } => run_compare_command(&catalog, &guess, &target),
        Commands::Suggest { prefix } => {
            print_suggestions(&catalog.suggest(prefix.trim(), &FxHashSet::default()));
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&catalog, &cli.strategy, limit);
            Ok(())
        }
    }
}

/// Build a session seeded from `--seed`, started on `--target` if given
fn build_session<'a>(
    catalog: &'a Catalog,
    seed: Option<u64>,
    target: Option<&str>,
) -> Result<Session<'a>> {
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut session = Session::new(catalog, rng);

    if let Some(query) = target {
        let entity = catalog
            .resolve(query)
            .with_context(|| format!("unknown target '{query}'"))?;
        session
            .start_with_target(entity.identifier())
            .with_context(|| format!("cannot start a game on '{query}'"))?;
    }

    Ok(session)
}

fn run_play_command(catalog: &Catalog, seed: Option<u64>, target: Option<&str>) -> Result<()> {
    use champdle::interactive::{App, run_tui};

    let session = build_session(catalog, seed, target)?;
    run_tui(App::new(session))
}

fn run_simple_command(catalog: &Catalog, seed: Option<u64>, target: Option<&str>) -> Result<()> {
    let mut session = build_session(catalog, seed, target)?;
    run_simple(&mut session).context("simple mode failed")
}

fn run_compare_command(catalog: &Catalog, guess: &str, target: &str) -> Result<()> {
    let comparison = compare_entities(catalog, guess, target)?;
    print_comparison(catalog.schema(), &comparison.result, comparison.target);
    Ok(())
}

fn run_test_all_command(catalog: &Catalog, strategy_name: &str, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Champdle Self-Play Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} champions", catalog.len());
    println!("Strategy: {strategy_name}");
    println!();

    let strategy = StrategyType::from_name(strategy_name);
    let name = strategy.name();
    let solver = Solver::new(strategy, catalog);
    let stats = run_test_all(&solver, name, limit);
    print_test_all_statistics(&stats);
}
