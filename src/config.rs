//! Server configuration.
//!
//! Each setting is resolved as: command-line flag, then environment variable,
//! then the built-in default.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:80";
pub const DEFAULT_BACKUP_PATH: &str = "db.json";
pub const DEFAULT_STATIC_DIR: &str = "static";

pub const ENV_BIND: &str = "SURVEY_BIND";
pub const ENV_BACKUP_PATH: &str = "SURVEY_BACKUP";
pub const ENV_STATIC_DIR: &str = "SURVEY_STATIC_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub backup_path: PathBuf,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// Resolves the configuration from `args` (program name excluded) and an
    /// environment lookup.
    pub fn parse<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = None;
        let mut backup: Option<String> = None;
        let mut static_dir: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            let slot = match args[i].as_str() {
                "--bind" => &mut bind,
                "--backup" => &mut backup,
                "--static-dir" => &mut static_dir,
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                    continue;
                }
            };
            let value = args
                .get(i + 1)
                .with_context(|| format!("{} requires a value", args[i]))?;
            *slot = Some(value.clone());
            i += 2;
        }

        let bind = bind
            .or_else(|| env(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", bind))?;

        Ok(Self {
            bind_addr,
            backup_path: backup
                .or_else(|| env(ENV_BACKUP_PATH))
                .unwrap_or_else(|| DEFAULT_BACKUP_PATH.to_string())
                .into(),
            static_dir: static_dir
                .or_else(|| env(ENV_STATIC_DIR))
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
        })
    }

    pub fn usage(program: &str) -> String {
        format!(
            "Usage: {} [--bind <addr:port>] [--backup <path>] [--static-dir <dir>]\n\
             Example: {} --bind 127.0.0.1:8080 --backup db.json --static-dir ./static",
            program, program
        )
    }
}
