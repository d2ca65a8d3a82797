//! duyguctl - Azerbaijani sentiment form for the terminal
//!
//! Runs the interactive form by default; `analyze` does a single prediction.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use duygu_common::{DuyguConfig, HttpPredictionService};
use duyguctl::errors::EXIT_SUCCESS;
use duyguctl::oneshot::{self, OutputFormat};
use duyguctl::{logging, tui};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

// Version is embedded at build time
const VERSION: &str = env!("DUYGU_VERSION");

#[derive(Parser)]
#[command(name = "duyguctl")]
#[command(about = "Sentiment analysis in Azerbaijani language", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Prediction endpoint (overrides config and DUYGU_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Config file (default: ~/.config/duygu/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form (default)
    Tui,

    /// Analyze one sentence and print the score and tone
    Analyze {
        /// Sentence to analyze; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        sentence: Vec<String>,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the example sentences
    Suggestions,
}

fn load_config(cli: &Cli) -> Result<DuyguConfig> {
    let mut config = match &cli.config {
        Some(path) => DuyguConfig::load_from(path),
        None => DuyguConfig::load(),
    }
    .context("Failed to load configuration")?;

    config.apply_env_overrides();
    if let Some(endpoint) = &cli.endpoint {
        config.service.endpoint = endpoint.clone();
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let service = HttpPredictionService::from_config(&config.service)
        .context("Failed to create prediction client")?;

    match cli.command {
        None | Some(Commands::Tui) => {
            // Before raw mode: a failure only warns on stderr
            if let Some(path) = logging::init_tui_logging(&config, &mut std::io::stderr()) {
                tracing::info!("duyguctl v{} logging to {}", VERSION, path.display());
            }

            let endpoint = service.endpoint().to_string();
            tui::run(Arc::new(service), endpoint).await
        }
        Some(Commands::Analyze { sentence, json }) => {
            logging::init_stderr_logging()?;

            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text {
                    color: std::io::stdout().is_terminal(),
                }
            };

            let code = oneshot::analyze(
                &service,
                &sentence.join(" "),
                format,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            )
            .await?;

            if code != EXIT_SUCCESS {
                std::process::exit(code);
            }
            Ok(())
        }
        Some(Commands::Suggestions) => {
            oneshot::write_suggestions(&mut std::io::stdout())?;
            Ok(())
        }
    }
}
