use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequestError,
    UnexpectedError,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure or a 4xx/5xx status.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("An error occurred during scraping: {0}")]
    Unexpected(String),
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Request(_) => ErrorKind::RequestError,
            ScrapeError::Unexpected(_) => ErrorKind::UnexpectedError,
        }
    }
}
