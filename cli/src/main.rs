mod args;
mod interrupt;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use plan_core::{ClientConfig, PlanApi};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Configuration is fixed here, before the first request goes out.
    let config = args.client_config(ClientConfig::from_env().context("reading environment")?);
    let api = PlanApi::new(config).context("building HTTP client")?;
    info!(base_url = api.client().base_url(), "planning");

    let plan = api.plan(args.plan_request());
    let outcome = interrupt::plan_or_interrupt(plan, tokio::signal::ctrl_c()).await?;

    match outcome {
        Some(result) => {
            let response = result.context("plan request failed")?;
            info!(itineraries = response.itineraries().len(), "plan received");
            println!("{}", serde_json::to_string_pretty(&response.into_value())?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            warn!("canceled");
            eprintln!("canceled");
            Ok(ExitCode::from(130))
        }
    }
}
