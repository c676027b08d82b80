use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use music_catalog_server::config::{AppConfig, CliConfig, FileConfig};
use music_catalog_server::server::config::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT};
use music_catalog_server::{
    load_seed_store, run_server, CatalogStore, DeletePolicy, RequestsLoggingLevel,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory with artists.json, albums.json and songs.json seed documents.
    #[clap(long, value_parser = parse_path)]
    pub seeds_dir: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The address to bind.
    #[clap(long, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// What deleting an artist or album does to its albums and songs.
    #[clap(long, default_value = "detach")]
    pub delete_policy: DeletePolicy,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            port: self.port,
            bind_address: self.bind_address.clone(),
            seeds_dir: self.seeds_dir.clone(),
            logging_level: self.logging_level.clone(),
            delete_policy: self.delete_policy,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let catalog_store = match &config.seeds_dir {
        Some(dir) => {
            info!("Loading seed catalog from {:?}...", dir);
            load_seed_store(dir)?
        }
        None => {
            info!("No seeds directory configured, starting with an empty catalog.");
            CatalogStore::new()
        }
    }
    .with_delete_policy(config.delete_policy);
    info!("Delete policy: {}", config.delete_policy);

    run_server(catalog_store, config.server_config()).await
}
