mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_intel::config::Config;
use resume_intel::ResumeError;

use crate::cli::{execute, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<ResumeError>()
                .map(ResumeError::code)
                .unwrap_or("ERROR");
            error!(code, "{err:#}");
            eprintln!("{}", json!({ "error": { "code": code, "message": format!("{err:#}") } }));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_intel={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("resume-intel v{}", env!("CARGO_PKG_VERSION"));

    let output = execute(&cli.command)?;
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to render JSON output")?;

    println!("{rendered}");
    Ok(())
}
