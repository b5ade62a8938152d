//! Command implementations for the SNAP dashboard CLI.
//!
//! Provides subcommands that build the dashboard's JSON documents from the
//! upstream spreadsheets, check a data directory for quality problems, and
//! print the headline statistics.

use clap::Subcommand;

pub mod fs;
pub mod prepare;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Build monthly.json, county.json, trends.json and metadata.json from the CSVs
    Prepare {
        /// Statewide monthly CSV (Date, Household, Persons, Per Household, Per Person, Cost)
        #[arg(short = 'm', long)]
        monthly: String,

        /// County bi-annual CSV
        #[arg(short = 'c', long)]
        county: String,

        /// Output directory for the JSON documents
        #[arg(short = 'o', long, default_value = "web/data")]
        out: String,

        /// Version tag recorded in metadata.json
        #[arg(long, default_value = "2022-01")]
        data_version: String,
    },

    /// Check the JSON documents for data-quality problems
    Validate {
        /// Directory holding the four JSON documents
        #[arg(short = 'd', long, default_value = "web/data")]
        data: String,
    },

    /// Print the headline statistics as the dashboard shows them
    Summary {
        /// Directory holding the four JSON documents
        #[arg(short = 'd', long, default_value = "web/data")]
        data: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Prepare {
            monthly,
            county,
            out,
            data_version,
        } => prepare::run_prepare(&monthly, &county, &out, &data_version).await,
        Command::Validate { data } => report::run_validate(&data).await,
        Command::Summary { data } => report::run_summary(&data).await,
    }
}
