mod cli;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use steering_core::{EditorKind, ProfileRegistry, SiteLayout};
use steering_engine::{run_sync, FetchSettings, LogProgressSink, ReqwestFetcher, SyncConfig};
use steering_logging::{steer_error, steer_info, steer_warn};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            steer_error!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let registry = ProfileRegistry::builtin();
    if EditorKind::from_key(&cli.editor).is_none() {
        steer_warn!(
            "Unknown editor '{}', falling back to the default profile",
            cli.editor
        );
    }
    let profile = registry.resolve(&cli.editor);
    steer_info!("Using agentic editor: {}", cli.editor);

    let output_root = output_root()?;
    let config = SyncConfig::new(SiteLayout::GITBOOK, output_root);
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    run_sync(&fetcher, &config, profile, &LogProgressSink).await?;
    Ok(())
}

/// Directory holding the `fetch-docs` executable; profile directories live below it.
fn output_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the fetch-docs executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("executable path {} has no parent directory", exe.display()))?;
    Ok(dir.to_path_buf())
}
