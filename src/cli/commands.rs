use clap::Parser;

#[derive(Parser)]
#[command(name = "feedfinder")]
#[command(about = "Fetch an RSS/Atom feed and print its entries")]
#[command(version)]
pub struct Cli {
    /// Feed URL to fetch (defaults to the configured feed)
    pub url: Option<String>,

    /// Print the parsed feed as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
