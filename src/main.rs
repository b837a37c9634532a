//! marvin CLI entry point

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use cli::context::RunContext;
use marvin::report::{RunOutcome, RunResult, failure_annotation, write_output};
use marvin::run::run;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.is_debug());

    let outcome = match RunContext::new(&cli) {
        Ok(ctx) => run(&ctx.config, &ctx.event, ctx.platform.as_ref()).await,
        Err(e) => RunOutcome::Failed(e),
    };

    match &outcome {
        RunOutcome::Completed(report) => info!(
            pr_number = report.pr_number,
            approved = report.approved,
            labeled = ?report.labeled,
            merged = report.merge.is_some(),
            "Finished"
        ),
        RunOutcome::Stopped(stop) => info!("{stop}, exiting."),
        RunOutcome::Failed(e) => {
            error!("{e}");
            println!("{}", failure_annotation(e));
        }
    }

    if let Some(result) = outcome.result()
        && let Err(e) = emit_result(result, cli.output.as_deref())
    {
        warn!("{e:#}");
    }

    ExitCode::from(outcome.exit_code())
}

/// Initialize tracing; `RUST_LOG` overrides the runner debug flag
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn emit_result(result: RunResult, output: Option<&Path>) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string(&result).context("failed to serialize result")?
    );
    if let Some(path) = output {
        write_output(path, result)
            .with_context(|| format!("failed to write step output to {}", path.display()))?;
    }
    Ok(())
}
