mod build;
mod config;
mod descriptor;
mod error;
mod toolchain;

use std::path::Path;

use anyhow::{Context, Result};

use config::BootstrapConfig;
use toolchain::ToolchainLocation;

const CONFIG_FILE: &str = "mvn-bootstrap.yml";
const LOG_FILE: &str = "mvn-bootstrap.log";

fn main() -> Result<()> {
    init_logging()?;

    tracing::info!("reading configuration from {CONFIG_FILE}");
    let config = BootstrapConfig::load(Path::new(CONFIG_FILE))
        .with_context(|| format!("cannot load {CONFIG_FILE}"))?;

    let failures = run_pipeline(&config, Path::new("."));
    if failures > 0 {
        tracing::error!("{failures} stage(s) failed, check {LOG_FILE}");
        std::process::exit(1);
    }
    Ok(())
}

/// Runs the four stages top-to-bottom. Stage failures after configuration
/// loading are recoverable: each is logged and the pipeline proceeds to the
/// next stage regardless. Returns the number of failed stages.
fn run_pipeline(config: &BootstrapConfig, root: &Path) -> usize {
    let mut failures = 0;

    tracing::info!("checking installed Maven");
    let location = match toolchain::resolve(root) {
        Ok(location) => location,
        Err(err) => {
            tracing::error!("toolchain resolution failed: {err}");
            failures += 1;
            // hand the executor the expected local layout anyway; it fails
            // at spawn time if provisioning really left nothing usable
            ToolchainLocation::Local(toolchain::install::script_path(root))
        }
    };

    tracing::info!("downloading {} from {}", descriptor::DESCRIPTOR_FILE, config.pom_url);
    if let Err(err) = descriptor::fetch(&config.pom_url, &root.join(descriptor::DESCRIPTOR_FILE)) {
        tracing::error!("error downloading {}: {err}", descriptor::DESCRIPTOR_FILE);
        failures += 1;
    }

    if let Err(err) = build::execute(&location, &config.mvn_args, root) {
        tracing::error!("{err}");
        failures += 1;
    }

    failures
}

fn init_logging() -> Result<()> {
    let log = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("cannot open {LOG_FILE}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mvn_bootstrap=info".parse().unwrap()),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log))
        .init();
    Ok(())
}
