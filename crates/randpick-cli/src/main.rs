mod session;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use randpick::{Picker, RngPicker};
use session::{Session, TerminalEvents, drive};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "randpick")]
#[command(version)]
#[command(about = "Generate random picks from a JSON category definition")]
struct Cli {
    /// Definition file (JSON)
    file: Option<PathBuf>,

    /// Seed the random generator for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    /// Print a single report even if the definition allows regenerating
    #[arg(long)]
    once: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let Some(file) = cli.file.clone() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(file, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Reports go to stdout; keep diagnostics out of them.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn print_usage() {
    println!("{}", Cli::command().render_usage());
    println!("\nExample: randpick fantasy_adventure.json");
}

fn run(file: PathBuf, cli: &Cli) -> Result<()> {
    let definition = randpick::load(&file)?;

    let picker: Box<dyn Picker> = match cli.seed {
        Some(seed) => {
            debug!(seed, "using seeded picker");
            Box::new(RngPicker::seeded(seed))
        }
        None => Box::new(RngPicker::from_thread_rng()),
    };
    let mut session = Session::new(definition, picker);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let mut stdout = std::io::stdout();
    let result: Result<()> = runtime.block_on(async {
        // Listen for Ctrl+C before the first prompt is shown.
        let mut events = TerminalEvents::new().context("Failed to listen for Ctrl+C")?;
        drive(&mut session, &mut events, &mut stdout, cli.once)
            .await
            .context("Failed to write report")
    });

    // A pending stdin read cannot be cancelled; don't wait for it.
    runtime.shutdown_background();
    result
}
