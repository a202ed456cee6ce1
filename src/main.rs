use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_manager::cli::{self, SessionArgs};
use finance_manager::config::{FinancePaths, Settings};
use finance_manager::reports::View;

/// Environment variable holding a tracing filter, e.g. `FINMAN_LOG=debug`
const LOG_ENV: &str = "FINMAN_LOG";

#[derive(Parser)]
#[command(
    name = "finman",
    version,
    about = "Personal finance dashboard for the terminal",
    long_about = "finman shows expense categories, budget alerts, savings goals and an \
                  investment portfolio. Every session starts from sample data (or empty) \
                  and nothing is written back to disk."
)]
struct Cli {
    /// Configuration directory (overrides the platform default)
    #[arg(long, global = true, env = "FINMAN_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one view of a fresh session
    Show {
        #[arg(value_enum)]
        view: View,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Start an interactive session
    #[command(alias = "repl")]
    Shell {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    match cli.command {
        Some(Commands::Show { view, session }) => {
            println!("{}", cli::handle_show(settings, view, &session)?);
        }
        Some(Commands::Shell { session }) => {
            let mut session = cli::build_session(settings, &session)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            cli::run_shell(&mut session, stdin.lock(), &mut stdout)?;
        }
        Some(Commands::Init) => {
            println!("{}", cli::handle_init(&paths)?);
        }
        Some(Commands::Config) => {
            print!("{}", cli::format_config(&paths, &settings)?);
        }
        None => {
            println!("finman - personal finance dashboard");
            println!();
            println!("Run 'finman --help' for usage information.");
            println!("Run 'finman shell' to start an interactive session.");
        }
    }

    Ok(())
}
