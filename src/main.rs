use std::io::{self, Write};

use clap::Parser;

use feedfinder::cli::Cli;
use feedfinder::config::Config;
use feedfinder::errors::FinderResult;
use feedfinder::render::OutputFormat;
use feedfinder::services::FindService;
use feedfinder::sources::RssAtomSource;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FinderResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    let url = cli.url.unwrap_or(config.feed_url);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let source = RssAtomSource::with_timeout(config.timeout_secs);
    let service = FindService::new(source);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    service.find_feed(&url, &mut out, format)?;
    out.flush()?;

    Ok(())
}
