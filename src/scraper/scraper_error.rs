use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("Bad listing card: {0}")]
    Card(String),
}
