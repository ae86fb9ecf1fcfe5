mod catalog;
mod cli;
mod config;
mod download;
mod error;
mod install;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::BuildEnv;
use error::InstallError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(&cli)?;

    let mut env = match BuildEnv::from_env() {
        Ok(env) => env,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = install::install_toolkit(&mut env, &cli.release).await {
        tracing::error!("{:#}", e);
        // Surface the installer's own exit code where there is one
        let code = match e.downcast_ref::<InstallError>() {
            Some(InstallError::InstallerExit(code)) if *code > 0 => *code,
            _ => 1,
        };
        std::process::exit(code);
    }

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if cli.quiet {
        "error"
    } else if cli.verbose == 0 {
        "warn"
    } else if cli.verbose == 1 {
        "info"
    } else {
        "debug"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}
