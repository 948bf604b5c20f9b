use tracing::{info, warn};

use crate::error::ScrapeError;
use crate::fetcher::Fetch;
use crate::models::{ProductRecord, ScrapeOutcome, SelectorSet};
use crate::parser;

/// One GET, one parse. No retries; any failure is terminal for the call.
pub fn scrape_product<F: Fetch>(
    fetcher: &F,
    url: &str,
    selectors: &SelectorSet,
) -> Result<ProductRecord, ScrapeError> {
    let html = fetcher.fetch_html(url)?;
    parser::parse_product(url, &html, selectors)
}

/// Like [`scrape_product`] but folds failures into an error record.
pub fn scrape_outcome<F: Fetch>(fetcher: &F, url: &str, selectors: &SelectorSet) -> ScrapeOutcome {
    info!(%url, "scraping product page");
    let result = scrape_product(fetcher, url, selectors);
    match &result {
        Ok(product) => info!(%url, name = %product.name, "scrape finished"),
        Err(e) => warn!(%url, kind = ?e.kind(), error = %e, "scrape failed"),
    }
    result.into()
}
