mod file_config;

pub use file_config::FileConfig;

use crate::catalog_store::DeletePolicy;
use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub port: u16,
    pub bind_address: String,
    pub seeds_dir: Option<PathBuf>,
    pub logging_level: RequestsLoggingLevel,
    pub delete_policy: DeletePolicy,
}

impl Default for CliConfig {
    fn default() -> Self {
        let server = ServerConfig::default();
        CliConfig {
            port: server.port,
            bind_address: server.bind_address,
            seeds_dir: None,
            logging_level: server.requests_logging_level,
            delete_policy: DeletePolicy::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub bind_address: String,
    /// Directory holding the seed documents. `None` starts an empty catalog.
    pub seeds_dir: Option<PathBuf>,
    pub logging_level: RequestsLoggingLevel,
    pub delete_policy: DeletePolicy,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let seeds_dir = file
            .seeds_dir
            .map(PathBuf::from)
            .or_else(|| cli.seeds_dir.clone());

        if let Some(dir) = &seeds_dir {
            if !dir.exists() {
                bail!("Seeds directory does not exist: {:?}", dir);
            }
            if !dir.is_dir() {
                bail!("seeds_dir is not a directory: {:?}", dir);
            }
        }

        let port = file.port.unwrap_or(cli.port);
        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {}", s),
            },
            None => cli.logging_level.clone(),
        };

        let delete_policy = match file.delete_policy {
            Some(s) => match parse_delete_policy(&s) {
                Some(policy) => policy,
                None => bail!("Invalid delete_policy in config file: {}", s),
            },
            None => cli.delete_policy,
        };

        Ok(Self {
            port,
            bind_address,
            seeds_dir,
            logging_level,
            delete_policy,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            bind_address: self.bind_address.clone(),
            port: self.port,
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn parse_delete_policy(s: &str) -> Option<DeletePolicy> {
    DeletePolicy::from_str(s, true).ok()
}
