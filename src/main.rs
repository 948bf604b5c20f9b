mod config;
mod error;
mod fetcher;
mod logging;
mod models;
mod output;
mod parser;
mod scrape;

use anyhow::Result;
use clap::Parser;

use crate::config::Cli;
use crate::fetcher::HttpFetcher;
use crate::models::{ErrorRecord, ScrapeOutcome};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_format)?;

    let (url, selectors) = cli.resolve();
    tracing::debug!(site = ?cli.site, %url, "resolved target");

    let outcome = match HttpFetcher::new() {
        Ok(fetcher) => scrape::scrape_outcome(&fetcher, &url, &selectors),
        Err(e) => ScrapeOutcome::Error(ErrorRecord::from(&e)),
    };

    output::write_outcome(&outcome, std::io::stdout().lock())
}
