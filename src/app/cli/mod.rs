//! CLI Adapter.

mod new;
mod patch;
mod steps;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::api::ConfigSource;
use crate::app::config::ConfigOverrides;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "djboot")]
#[command(version)]
#[command(
    about = "Bootstrap a Django project skeleton and patch its generated settings",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project in the current directory
    #[clap(visible_alias = "n")]
    New {
        /// Project directory name (overrides the configured name)
        name: Option<String>,
        /// Configuration file (defaults to ./djboot.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Add an app generated with startapp (repeatable)
        #[arg(short, long = "app")]
        apps: Vec<String>,
        /// Host written to ALLOWED_HOSTS (repeatable, replaces the configured list)
        #[arg(long = "host")]
        hosts: Vec<String>,
        /// Run manage.py migrate after setup
        #[arg(long)]
        migrate: bool,
        /// Fail when a settings marker is missing
        #[arg(long)]
        strict: bool,
    },
    /// Apply the settings patch plan to an existing settings.py
    #[clap(visible_alias = "p")]
    Patch {
        /// Path to settings.py
        settings: PathBuf,
        /// Configuration file (defaults to ./djboot.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Fail when a settings marker is missing
        #[arg(long)]
        strict: bool,
        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the steps `new` would run
    #[clap(visible_alias = "s")]
    Steps {
        /// Configuration file (defaults to ./djboot.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::New { name, config, apps, hosts, migrate, strict } => {
            let overrides = ConfigOverrides { name, apps, hosts, migrate };
            new::run_new(ConfigSource { path: config, overrides }, strict)
        }
        Commands::Patch { settings, config, strict, format } => {
            let source = ConfigSource { path: config, ..Default::default() };
            patch::run_patch(&settings, source, strict, format)
        }
        Commands::Steps { config } => {
            steps::run_steps(ConfigSource { path: config, ..Default::default() })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber.
///
/// Without `-v`, `RUST_LOG` decides and defaults to warnings only.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    if let Err(err) = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
    {
        eprintln!("Warning: logging disabled: {}", err);
    }
}
