// src/scraper/client.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Anything that can hand back the HTML behind a URL.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        resp.text().map_err(|e| ScraperError::Network(e.to_string()))
    }
}
