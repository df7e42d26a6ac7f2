use clap::Parser;
use tracing::error;

use yad2_watch::cli::Cli;
use yad2_watch::config::Config;
use yad2_watch::service::WatchService;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::from_cli(cli);

    // Failures are reported through the log only; the process always
    // exits with a success status.
    if let Err(e) = WatchService::new(cfg).run().await {
        error!(error = %e, "Run failed");
    }
}
