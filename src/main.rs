//! REPL Editor
//!
//! Interactive terminal REPL with Clojure-style word completion, balanced
//! form submission and in-memory history.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! repl-editor
//!
//! # Print the effective configuration
//! repl-editor config --show
//! ```

use tracing_subscriber::EnvFilter;

use repl_editor::cli::CliInterface;
use repl_editor::error::Result;
use repl_editor::repl::{self, ReplEngine};

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or start the interactive loop
///
/// # Returns
/// * `Result<()>` - Success or error
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    cli.print_banner();

    let mut engine = ReplEngine::new(cli.config());
    repl::run(&mut engine).await?;

    if !cli.args().quiet {
        println!("Goodbye!");
    }
    Ok(())
}

/// Initialize logging system based on verbosity level
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to
/// stderr so they never mix with the redrawn input area.
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
