//! COVID CLI - fetch the county datasets and render dashboard panels headless.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "covid-cli",
    version,
    about = "County-level COVID-19 dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: covid_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    covid_cmd::run(cli.command).await
}
