use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::PathBuf;

use canary_scanners::config::EXAMPLE_CONFIG;
use canary_scanners::CanaryConfig;
use canary_server::CanaryServer;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// YAML or JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub bind: Option<String>,

    /// 2LS binary
    #[arg(long)]
    pub analyzer: Option<PathBuf>,

    #[arg(long)]
    pub timeout: Option<u64>,

    /// Built front-end bundle to serve next to the API
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Print an annotated example configuration and exit
    #[arg(long, conflicts_with = "print_config")]
    pub example_config: bool,
}

impl ServeArgs {
    pub fn load_config(&self) -> Result<CanaryConfig> {
        let mut config = match &self.config {
            Some(path) => CanaryConfig::from_file(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => CanaryConfig::default(),
        }
        .apply_env()?;

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(binary) = &self.analyzer {
            config.analyzer.binary = binary.clone();
        }
        if let Some(timeout) = self.timeout {
            config.analyzer.timeout_seconds = timeout;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = Some(dir.clone());
        }
        Ok(config)
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    if args.example_config {
        print!("{}", EXAMPLE_CONFIG.trim_start());
        return Ok(());
    }

    let config = args.load_config()?;
    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    if let Some(dir) = &config.server.static_dir {
        if !dir.join("index.html").is_file() {
            warn!("No index.html in {}; only the API will be useful", dir.display());
        }
    }

    let server = CanaryServer::from_config(&config)?;
    if let Some(addr) = server.local_addr() {
        println!(
            "{} {}",
            "🐤 Canary listening on".bright_green().bold(),
            format!("http://{}", addr).bright_blue()
        );
    }

    let shutdown = server.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
            shutdown.shutdown();
        }
    });

    server.run().await?;
    Ok(())
}
