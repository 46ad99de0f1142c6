// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

/// NDG / CDN (city code 1883), newest first.
pub const DEFAULT_SEARCH_URL: &str = "https://duproprio.com/fr/rechercher/liste?search=true&cities%5B0%5D=1883&parent=1&sort=-published_at";

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct HuntConfig {
    /// Search results URL; `pageNumber` is appended per page.
    pub search_url: String,
    /// Prefixed onto relative card links.
    pub site_origin: String,
    pub user_agent: String,
    /// Per-request timeout for search result pages.
    pub page_timeout: Duration,
    /// Hard stop for pagination.
    pub max_pages: u32,
    /// Random pause between page fetches, in seconds.
    pub page_delay_secs: (f64, f64),

    /// Harvester output (address, price_text, link).
    pub listings_path: PathBuf,
    /// Geocoder output read by the dashboard.
    pub map_data_path: PathBuf,

    pub geocoder_endpoint: String,
    pub geocoder_user_agent: String,
    pub geocoder_timeout: Duration,
    /// Minimum gap between two lookups.
    pub geocoder_min_interval: Duration,
    /// Extra attempts after a lookup error, each preceded by `geocoder_error_wait`.
    pub geocoder_max_retries: u32,
    pub geocoder_error_wait: Duration,
    /// Appended to every cleaned address on the first lookup attempt.
    pub locality_suffix: String,

    pub bind_addr: String,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            site_origin: "https://duproprio.com".to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            page_timeout: Duration::from_secs(60),
            max_pages: 20,
            page_delay_secs: (1.5, 3.0),
            listings_path: PathBuf::from("fsbo_listings.csv"),
            map_data_path: PathBuf::from("fsbo_map_data.csv"),
            geocoder_endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            geocoder_user_agent: "my_montreal_fsbo_project".to_string(),
            geocoder_timeout: Duration::from_secs(10),
            geocoder_min_interval: Duration::from_millis(1500),
            geocoder_max_retries: 2,
            geocoder_error_wait: Duration::from_secs(5),
            locality_suffix: ", Montreal, QC".to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }
}
