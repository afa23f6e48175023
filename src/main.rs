use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Convert {
                base,
                target,
                amount,
            } => fxconv::AppCommand::Convert {
                base,
                target,
                amount,
            },
            Commands::Rates { base } => fxconv::AppCommand::Rates { base },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Currency to convert from, e.g. USD
        base: String,
        /// Currency to convert to, e.g. EUR
        target: String,
        /// Amount in the base currency
        amount: f64,
    },
    /// Display the latest rates table for a base currency
    Rates {
        /// Base currency for the table, e.g. USD
        base: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = fxconv::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
providers:
  exchange_rate_api:
    base_url: "https://v6.exchangerate-api.com"
    # api_key: "..."  # or export EXCHANGERATE_API_KEY
  open_exchange_rates:
    base_url: "https://openexchangerates.org"
    # app_id: "..."   # or export OPENEXCHANGERATES_APP_ID
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
