mod export;
mod lookup;
mod region;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ypay_client::{ScanOptions, YpayClient};
use ypay_core::{AppConfig, RegionCatalog};

use crate::region::RegionArgs;

#[derive(Debug, Parser)]
#[command(name = "ypay")]
#[command(about = "Yongin Y-Pay card merchant lookup")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether a merchant is enrolled, by exact name
    Lookup {
        /// Merchant name (exact match)
        name: String,
        /// Also write results to CSV (defaults to `ypay_가맹점_<name>.csv`)
        #[arg(long, value_name = "PATH")]
        csv: Option<Option<PathBuf>>,
    },
    /// List merchants in a district and sub-district
    Region {
        /// District (구/읍), e.g. 처인구
        district: String,
        /// Sub-district (동/면) within the district, e.g. 김량장동
        area: String,
        /// Only show these categories; repeat for several, `전체` for all
        #[arg(long = "field", value_name = "CATEGORY")]
        fields: Vec<String>,
        /// Also write results to CSV (defaults to `ypay_가맹점_<district>_<area>.csv`)
        #[arg(long, value_name = "PATH")]
        csv: Option<Option<PathBuf>>,
    },
    /// Print the district / sub-district catalog
    Regions,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ypay_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("ypay: run `ypay --help` for available commands");
        return Ok(());
    };

    let catalog = catalog_for(&command, &config)?;

    match command {
        Commands::Lookup { name, csv } => {
            let client = YpayClient::from_config(&config)?;
            lookup::run_lookup(&client, &name, csv).await?;
        }
        Commands::Region {
            district,
            area,
            fields,
            csv,
        } => {
            let client = YpayClient::from_config(&config)?;
            region::run_region(
                &client,
                &catalog.unwrap_or_default(),
                ScanOptions::from_config(&config),
                &district,
                &area,
                RegionArgs { fields, csv },
            )
            .await?;
        }
        Commands::Regions => region::run_regions(&catalog.unwrap_or_default()),
    }

    Ok(())
}

/// Loads the region catalog for the commands that use it. `lookup` never
/// touches it, so a broken `YPAY_REGIONS_PATH` does not affect lookups.
fn catalog_for(command: &Commands, config: &AppConfig) -> anyhow::Result<Option<RegionCatalog>> {
    match command {
        Commands::Lookup { .. } => Ok(None),
        Commands::Region { .. } | Commands::Regions => load_catalog(config).map(Some),
    }
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<RegionCatalog> {
    match &config.regions_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading region catalog");
            Ok(ypay_core::load_regions(path)?)
        }
        None => Ok(RegionCatalog::default()),
    }
}
