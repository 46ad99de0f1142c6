// Shared fixtures: a fake site, a scripted geocoder, temp paths.
use crate::config::HuntConfig;
use crate::domain::{Coordinates, Listing};
use crate::geocode::{GeocodeError, Geocoder};
use crate::scraper::{PageSource, ScraperError};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A fresh path under the temp dir; the file is not created.
pub fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("fsbo_test_{}_{nanos}_{n}_{name}", std::process::id()))
}

/// Default config with no pauses and files in the temp dir.
pub fn test_config() -> HuntConfig {
    HuntConfig {
        search_url: "https://duproprio.com/fr/rechercher/liste?search=true".to_string(),
        page_delay_secs: (0.0, 0.0),
        listings_path: temp_path("fsbo_listings.csv"),
        map_data_path: temp_path("fsbo_map_data.csv"),
        geocoder_min_interval: Duration::ZERO,
        geocoder_error_wait: Duration::ZERO,
        ..HuntConfig::default()
    }
}

pub fn listing(address: &str) -> Listing {
    Listing {
        address: address.to_string(),
        price_text: "$1".to_string(),
        link: format!(
            "https://duproprio.com/fr/a-vendre/{}",
            address.to_lowercase().replace(' ', "-")
        ),
    }
}

pub fn card_html(href: &str, price: Option<&str>, loose_text: &str) -> String {
    let price = price
        .map(|p| {
            format!(r#"<div class="search-results-listings-list__item-description__price"><span>{p}</span></div>"#)
        })
        .unwrap_or_default();
    let loose = if loose_text.is_empty() {
        String::new()
    } else {
        format!("<p>{loose_text}</p>")
    };

    format!(
        r#"<li class="search-results-listings-list__item"><a href="{href}"><img alt=""></a>{price}<div class="details"><p>Condo</p>{loose}</div></li>"#
    )
}

pub fn listing_page(cards: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><ul class="search-results-listings-list">{}</ul></body></html>"#,
        cards.concat()
    )
}

/// Serves canned pages; anything unknown is an empty results page.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    fetched: Mutex<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl PageSource for FakeSite {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.fetched.lock().unwrap().push(url.to_string());

        if self.failing.contains(url) {
            return Err(ScraperError::Network(format!("connection reset: {url}")));
        }
        Ok(self
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| listing_page(&[])))
    }
}

/// Answers only the queries it was told about; records every query.
#[derive(Default)]
pub struct ScriptedGeocoder {
    hits: HashMap<String, Coordinates>,
    failing: HashSet<String>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(mut self, query: &str, at: Coordinates) -> Self {
        self.hits.insert(query.to_string(), at);
        self
    }

    pub fn failing(mut self, query: &str) -> Self {
        self.failing.insert(query.to_string());
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Geocoder for ScriptedGeocoder {
    fn lookup(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        self.queries.lock().unwrap().push(query.to_string());

        if self.failing.contains(query) {
            return Err(GeocodeError::Timeout);
        }
        Ok(self.hits.get(query).copied())
    }
}
