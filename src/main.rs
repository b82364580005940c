//! @ai:module:intent CLI for syncing the product spreadsheet with Etsy listings
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listing_sync::{
    plan_row, CatalogReader, Credentials, EtsyClient, FixedDelay, ListingGateway,
    RecordingGateway, RowPlan, SyncConfig, SyncRunner,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_CONFIG: &str = "listing-sync.toml";

#[derive(Parser)]
#[command(name = "listing-sync")]
#[command(about = "Create and update Etsy listings from a hand-curated CSV")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync every row of the CSV with the shop (default)
    Run {
        /// Path to the product CSV
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Build payloads and print outcomes without calling the API
        #[arg(long)]
        dry_run: bool,

        /// Pause between rows, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Check every row builds a valid payload, without network access
    Validate {
        /// Path to the product CSV
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default configuration file
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        output: PathBuf,
    },
}

#[derive(Default)]
struct RunArgs {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    dry_run: bool,
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("listing_sync=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => run_sync(RunArgs::default()).await,
        Some(Commands::Run {
            input,
            config,
            dry_run,
            delay_ms,
        }) => {
            run_sync(RunArgs {
                input,
                config,
                dry_run,
                delay_ms,
            })
            .await
        }
        Some(Commands::Validate { input, config }) => validate(input, config),
        Some(Commands::Init { output }) => init_config(output),
    }
}

/// @ai:intent Run one sync pass over the CSV
/// @ai:effects env, fs:read, network
async fn run_sync(args: RunArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config)?;

    if let Some(input) = args.input {
        config.run.input = input;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.run.delay_ms = delay_ms;
    }
    config.run.dry_run |= args.dry_run;

    let pacer = FixedDelay::new(config.run.delay());

    if config.run.dry_run {
        tracing::info!("Running in dry-run mode, no API calls will be made");
        let gateway = Arc::new(RecordingGateway::new());
        return sync_rows(gateway, pacer, &config.run.input).await;
    }

    // Credentials are checked before the CSV is opened.
    let credentials = Credentials::from_env()?;
    tracing::info!("Syncing shop {} via {}", credentials.shop_id, config.api.base_url);

    let client = EtsyClient::new(&config.api, credentials)?;
    sync_rows(Arc::new(client), pacer, &config.run.input).await
}

/// @ai:intent Stream rows from the CSV through the runner
/// @ai:effects fs:read, network
async fn sync_rows<G: ListingGateway>(gateway: Arc<G>, pacer: FixedDelay, input: &Path) -> Result<()> {
    tracing::info!("Reading products from {}", input.display());

    let reader = CatalogReader::open(input)?;
    let runner = SyncRunner::new(gateway, pacer);
    let summary = runner.run(reader).await?;

    println!();
    println!("{}", summary);
    Ok(())
}

/// @ai:intent Plan every row and report what would be sent
/// @ai:effects fs:read
fn validate(input: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = load_or_default_config(config)?;
    let input = input.unwrap_or(config.run.input);

    let reader = CatalogReader::open(&input)?;
    let mut planned = 0;

    for row in reader {
        let row = row?;
        let plan = plan_row(&row)?;

        match &plan {
            RowPlan::Create(payload) => {
                println!("Row {}: create draft '{}'", row.number, payload.title)
            }
            RowPlan::Update { listing_id, payload } => {
                println!("Row {}: update listing {} '{}'", row.number, listing_id, payload.title)
            }
            RowPlan::Skip(reason) => println!("Row {}: {}", row.number, reason),
        }
        planned += 1;
    }

    println!();
    println!("Validation passed: {} rows in {}", planned, input.display());
    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = SyncConfig::default();
    config
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<SyncConfig> {
    match path {
        Some(p) => Ok(SyncConfig::load(&p)?),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG);

            if default_path.exists() {
                Ok(SyncConfig::load(&default_path)?)
            } else {
                Ok(SyncConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["listing-sync"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_validate_accepts_input_and_config() {
        let cli = Cli::try_parse_from([
            "listing-sync",
            "validate",
            "--input",
            "shop.csv",
            "--config",
            "shop.toml",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Validate { input, config }) => {
                assert_eq!(input, Some(PathBuf::from("shop.csv")));
                assert_eq!(config, Some(PathBuf::from("shop.toml")));
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_run_flags_parse() {
        let cli = Cli::try_parse_from(["listing-sync", "run", "--dry-run", "--delay-ms", "0"]).unwrap();

        match cli.command {
            Some(Commands::Run {
                dry_run, delay_ms, ..
            }) => {
                assert!(dry_run);
                assert_eq!(delay_ms, Some(0));
            }
            _ => panic!("expected run command"),
        }
    }
}
