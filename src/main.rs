use anyhow::Result;
use clap::Parser;
use snapup::cli::{Cli, MaintenanceCommand};
use snapup::plan::Plan;
use snapup::runner;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    match run(cli.command.unwrap_or(MaintenanceCommand::Refresh)).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(command: MaintenanceCommand) -> Result<ExitCode> {
    let plan = match command {
        MaintenanceCommand::Refresh => Plan::refresh(),
        MaintenanceCommand::Full => Plan::full(),
    };

    // The program's exit status is whatever the last external command reported.
    let exit_code = runner::run_plan(&plan).await?;
    Ok(ExitCode::from((exit_code & 0xFF) as u8))
}
