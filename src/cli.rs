use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "yad2-watch", version, about = "Yad2 rental feed watcher")]
pub struct Cli {
    /// Yad2 API URL with search parameters
    /// (e.g. https://gw.yad2.co.il/realestate-feed/rent/map?city=...)
    #[arg(long)]
    pub api_url: String,

    /// Clear the seen-listings history before running
    /// (treat all current listings as new)
    #[arg(long)]
    pub clean: bool,
}
