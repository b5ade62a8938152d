//! HSNAP CLI - Command line tool for the Hawaii SNAP dashboard data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hsnap-cli",
    version,
    about = "Hawaii SNAP dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hsnap_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("hsnap-cli starting");
    hsnap_cmd::run(cli.command).await
}
