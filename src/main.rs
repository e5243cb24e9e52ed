//! Bulls & Cows Assistant - CLI
//!
//! Solver for bulls and cows / Mastermind style games with TUI and CLI modes.

use anyhow::Result;
use bulls_cows::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, run_benchmark, run_simple,
        run_test_all, sample_secrets, solve_code,
    },
    config::{DEFAULT_ALPHABET, DEFAULT_SQUARES, DEFAULT_TOP, SessionConfig},
    core::Code,
    logging,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Session, StrategyType},
};
use clap::{ArgAction, Parser, Subcommand, builder::PossibleValuesParser};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls & Cows / Mastermind assistant: tracks every code still possible",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Symbols that can fill each square
    #[arg(short, long, global = true, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Number of squares in the secret code
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_SQUARES)]
    squares: usize,

    /// List every candidate once at most this many remain
    #[arg(short, long, global = true, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Guess strategy
    #[arg(
        short,
        long,
        global = true,
        default_value = "fewest-symbols",
        value_parser = PossibleValuesParser::new(StrategyType::NAMES)
    )]
    strategy: String,

    /// Treat the suggestion as the guess played, so '1 2' alone scores it
    #[arg(long, global = true)]
    auto_pick: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Raise log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific secret code
    Solve {
        /// The secret to solve
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the code space
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short, long, default_value = "50")]
        count: usize,

        /// Seed for picking secrets
        #[arg(long)]
        seed: Option<u64>,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_guess: Option<String>,
    },

    /// Test solver on every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Give up on a secret after this many guesses
        #[arg(short, long, default_value = "20")]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs to a file
    let terminal_logs = !matches!(command, Commands::Play);
    logging::init(cli.verbose, cli.log_file.as_deref(), terminal_logs)?;

    let config = SessionConfig::new(&cli.alphabet, cli.squares)?
        .with_top(cli.top)
        .with_auto_pick(cli.auto_pick)
        .with_strategy(cli.strategy);
    info!(
        "config: '{}' x {} ({} codes), strategy {}",
        config.alphabet(),
        config.squares(),
        config.space_size(),
        config.strategy
    );

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&mut Session::from_config(config)),
        Commands::Solve { secret, verbose } => run_solve_command(config, secret, verbose),
        Commands::Analyze { code } => run_analyze_command(config, &code),
        Commands::Benchmark {
            count,
            seed,
            first_guess,
        } => run_benchmark_command(config, count, seed, first_guess.as_deref()),
        Commands::TestAll { limit, max_guesses } => {
            run_test_all_command(config, limit, max_guesses)
        }
    }
}

fn run_play_command(config: SessionConfig) -> Result<()> {
    use bulls_cows::interactive::{App, run_tui};

    let app = App::new(Session::from_config(config));
    run_tui(app)
}

fn run_solve_command(config: SessionConfig, secret: String, verbose: bool) -> Result<()> {
    let squares = config.squares();
    let mut session = Session::from_config(config);
    let result = solve_code(SolveConfig::new(secret), &mut session)?;

    print_solve_result(&result, squares, verbose);
    Ok(())
}

fn run_analyze_command(config: SessionConfig, code: &str) -> Result<()> {
    let squares = config.squares();
    let mut session = Session::from_config(config);
    session.start()?;

    let result = analyze_code(code, session.config(), session.candidates())?;
    print_analysis_result(&result, squares);
    Ok(())
}

fn run_benchmark_command(
    config: SessionConfig,
    count: usize,
    seed: Option<u64>,
    first_guess: Option<&str>,
) -> Result<()> {
    if let Some(guess) = first_guess {
        println!("Running benchmark on {count} random secrets with forced first guess: {guess}...");
    } else {
        println!("Running benchmark on {count} random secrets...");
    }

    let forced_first = first_guess
        .map(|text| Code::parse(text, config.alphabet(), config.squares()))
        .transpose()?;
    let secrets = sample_secrets(&config, count, seed);

    let mut session = Session::from_config(config);
    let result = run_benchmark(&mut session, &secrets, forced_first.as_ref())?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    config: SessionConfig,
    limit: Option<usize>,
    max_guesses: usize,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Bulls & Cows Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets",
        limit.map_or(config.space_size(), |l| l.min(config.space_size()))
    );
    println!("Strategy: {}", config.strategy);
    println!();

    let mut session = Session::from_config(config);
    session.start()?;

    let stats = run_test_all(&session, limit, max_guesses, true)?;
    print_test_all_statistics(&stats);
    Ok(())
}
