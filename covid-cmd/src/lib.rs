//! Command implementations for the COVID dashboard CLI.
//!
//! Provides subcommands for mirroring the remote datasets and for running
//! the dashboard pipeline headless, printing the panels as Plotly JSON.

use clap::Subcommand;
use covid_nyt::source::RawDatasets;
use std::path::{Path, PathBuf};

pub mod fetch;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Download the case, county-location and mask-use CSVs
    Fetch {
        /// Directory to write the CSVs into (created if missing)
        #[arg(short = 'o', long)]
        out_dir: PathBuf,
    },

    /// Print the dashboard panels for one state and month as JSON
    Render {
        /// Full state name, e.g. "Illinois"
        #[arg(short = 's', long)]
        state: String,

        /// Calendar month, 1-12
        #[arg(short = 'm', long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        /// Read previously fetched CSVs instead of downloading
        #[arg(short = 'd', long)]
        data_dir: Option<PathBuf>,

        /// Only print this panel (state-chart, mask-chart or state-table)
        #[arg(short = 'p', long)]
        panel: Option<String>,
    },

    /// List the states in the month-end snapshot with their row counts
    States {
        /// Read previously fetched CSVs instead of downloading
        #[arg(short = 'd', long)]
        data_dir: Option<PathBuf>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { out_dir } => fetch::run_fetch(&out_dir).await,
        Command::Render {
            state,
            month,
            data_dir,
            panel,
        } => {
            let raw = load_datasets(data_dir.as_deref()).await?;
            render::run_render(&raw, &state, month, panel.as_deref())
        }
        Command::States { data_dir } => {
            let raw = load_datasets(data_dir.as_deref()).await?;
            render::run_states(&raw)
        }
    }
}

/// Read the datasets from `data_dir`, or download them when it is `None`.
async fn load_datasets(data_dir: Option<&Path>) -> anyhow::Result<RawDatasets> {
    match data_dir {
        Some(dir) => {
            log::info!("Reading datasets from {}", dir.display());
            RawDatasets::read_dir(dir)
        }
        None => {
            log::info!("Downloading datasets");
            RawDatasets::fetch(&fetch::client()).await
        }
    }
}
