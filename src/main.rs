use anyhow::Result;
use brlx::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand};

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

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the current exchange rate against BRL
    Rate {
        /// Currency code (e.g. USD, EUR, GBP)
        code: String,
    },
    /// Display daily exchange rates against BRL
    History {
        /// Currency code (e.g. USD, EUR, GBP)
        code: String,
        /// Number of days to display
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
}

impl From<Commands> for brlx::AppCommand {
    fn from(cmd: Commands) -> brlx::AppCommand {
        match cmd {
            Commands::Rate { code } => brlx::AppCommand::Rate { code },
            Commands::History { code, days } => brlx::AppCommand::History { code, days },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => brlx::run_command(cmd.into(), cli.config_path.as_deref()).await,
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

    let path = brlx::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
api:
  base_url: "https://api-brl-exchange.actionlabs.com.br/api/1.0/open"
  api_key: "YOUR_API_KEY"

target_currency: "BRL"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
