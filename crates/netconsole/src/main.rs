//! `netconsole` - headless host for the account form.
//!
//! Replays scripted add/edit user sessions against an in-memory directory
//! and prints one JSON line per session outcome.
//!
//! ```text
//! netconsole [--settings PATH] [SCRIPT | -]
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod directory;
mod script;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use netconsole_core::HostSettings;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use directory::Directory;
use script::SessionScript;

/// Default log filter when neither `RUST_LOG` nor settings set one.
const DEFAULT_LOG_FILTER: &str = "netconsole=debug,netconsole_core=debug";

/// Replay account form sessions against an in-memory directory.
#[derive(Parser, Debug)]
#[command(name = "netconsole", version)]
struct Args {
    /// Settings file, defaults to the platform config directory.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Session script; omit or pass `-` to read stdin.
    script: Option<PathBuf>,
}

impl Args {
    /// Script file to read, `None` for stdin.
    fn script_path(&self) -> Option<&Path> {
        self.script.as_deref().filter(|path| *path != Path::new("-"))
    }
}

/// Install the subscriber with the default filter so settings loading is
/// logged. The filter can be swapped once settings are known.
fn init_logging() -> reload::Handle<EnvFilter, Registry> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let (filter, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Filter from settings, applied only when `RUST_LOG` is not set.
fn settings_filter(settings: &HostSettings, env_filter_set: bool) -> Option<&str> {
    if env_filter_set {
        None
    } else {
        settings.log_filter.as_deref()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_handle = init_logging();
    info!("Starting netconsole");

    let settings_path = args
        .settings
        .clone()
        .unwrap_or_else(HostSettings::default_path);
    let settings = HostSettings::load(&settings_path)
        .await
        .with_context(|| format!("failed to load settings from {}", settings_path.display()))?;

    let env_filter_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    if let Some(directive) = settings_filter(&settings, env_filter_set) {
        let filter = EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter in settings: {directive}"))?;
        log_handle
            .reload(filter)
            .context("failed to apply log filter from settings")?;
        debug!("Log filter set from settings: {directive}");
    }

    let contents = match args.script_path() {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read script from stdin")?;
            buf
        }
    };
    let script: SessionScript =
        serde_json::from_str(&contents).context("failed to parse session script")?;

    let directory = Directory::with_accounts(script.accounts.clone());
    if directory.is_empty() {
        debug!("Starting with an empty directory");
    } else {
        debug!("Seeded directory with {} account(s)", directory.len());
    }
    let outcomes = script::run(script, &directory, settings.networks).await;

    let mut stdout = std::io::stdout().lock();
    for outcome in &outcomes {
        serde_json::to_writer(&mut stdout, outcome)?;
        writeln!(stdout)?;
    }

    info!("Replayed {} session(s)", outcomes.len());
    Ok(())
}
