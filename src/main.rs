use anyhow::Result;
use clap::{Parser, Subcommand};
use hestia::OutageGuard;
use tracing::error;

#[derive(Parser)]
#[command(name = "hestia", version = env!("APP_VERSION"))]
#[command(about = "Outage-aware power guard for Klipper/Moonraker 3D printers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the guard daemon (default)
    Run,

    /// Single fetch-and-evaluate pass, for external schedulers
    Once,

    /// Manual pause/park/resume smoke test against the printer
    TestPause,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut guard = OutageGuard::new()
        .map_err(|e| anyhow::anyhow!("Failed to create outage guard: {}", e))?;

    let result = match cli.command.unwrap_or(Command::Run) {
        Command::Run => guard.run().await,
        Command::Once => guard.run_once().await,
        Command::TestPause => guard.test_pause_resume().await,
    };

    if let Err(e) = result {
        error!("Outage guard failed: {}", e);
        return Err(anyhow::anyhow!("{}", e));
    }
    Ok(())
}
