use crate::{commands::Commands, config::FilterConfig, error::CliError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "filterc", version = "0.1.0", about = "Filter query compiler")]
struct Cli {
    #[arg(short, long, global = true, help = "Log compiler decisions")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compile {
            config,
            backend,
            dialect,
            json,
            query,
        } => {
            let config = load_config(config.as_deref())?;
            let out = commands::compile(&config, &query, backend, dialect, json)?;
            println!("{out}");
        }
        Commands::Fields {
            config,
            depth,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let out = commands::fields(&config, depth, json)?;
            println!("{out}");
        }
        Commands::Tags { config, json } => {
            let config = load_config(config.as_deref())?;
            let out = commands::tags(&config, json)?;
            println!("{out}");
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<FilterConfig, CliError> {
    let path = config::resolve_path(path)?;
    FilterConfig::load(&path)
}
