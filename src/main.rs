use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use folio::config::Config;
use folio::logger::{init_file_logging, init_stderr_logging, Logger};
use folio::settings::SettingsStore;
use folio::{relay, ui};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A portfolio you browse from the terminal, plus its contact relay")]
struct Cli {
    /// Path to a configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the contact relay HTTP service
    Serve {
        /// Port to listen on, overriding the configuration
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Write a default configuration file
    InitConfig {
        /// Destination; defaults to the user config directory
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::InitConfig { path }) => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(&path)
        }
        Some(Command::Serve { port }) => {
            let config = load_config(cli.config.as_ref())?;
            init_stderr_logging(config.logging.level_filter());
            relay::serve(&config, port).await
        }
        None => {
            let config = load_config(cli.config.as_ref())?;
            // The terminal belongs to the UI, so logs only ever go to a file
            if config.logging.enabled {
                init_file_logging(Logger::get_log_file_path()?, config.logging.level_filter())?;
            }
            ui::run_app(config, SettingsStore::load_default()).await
        }
    }
}
