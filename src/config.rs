use clap::{Parser, ValueEnum};

use crate::logging::LogFormat;
use crate::models::SelectorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Site {
    /// Placeholder storefront markup.
    Generic,
    /// webscraper.io e-commerce test site.
    Webscraper,
}

impl Site {
    pub fn selectors(self) -> SelectorSet {
        match self {
            Site::Generic => SelectorSet::generic(),
            Site::Webscraper => SelectorSet::webscraper(),
        }
    }

    pub fn example_url(self) -> &'static str {
        match self {
            Site::Generic => "https://www.example.com/product/123",
            Site::Webscraper => "https://webscraper.io/test-sites/e-commerce/allinone/product/60",
        }
    }
}

/// Scrape name, price and availability/description from a product page.
#[derive(Debug, Parser)]
#[command(name = "product_scraper", version)]
pub struct Cli {
    /// Product page to fetch. Defaults to the site's example page.
    #[arg(env = "SCRAPER_URL")]
    pub url: Option<String>,

    /// Which selector set to apply.
    #[arg(long, value_enum, default_value_t = Site::Generic, env = "SCRAPER_SITE")]
    pub site: Site,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "SCRAPER_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn resolve(&self) -> (String, SelectorSet) {
        let url = self
            .url
            .clone()
            .unwrap_or_else(|| self.site.example_url().to_string());
        (url, self.site.selectors())
    }
}
