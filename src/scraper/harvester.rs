// src/scraper/harvester.rs
use crate::config::HuntConfig;
use crate::domain::Listing;
use crate::scraper::{CardSelectors, PageSource, ScraperError};
use rand::Rng;
use scraper::Html;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Why pagination ended.
#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// The page brought no new listings.
    Exhausted { page: u32 },
    PageLimit,
    /// Fetching or reading the page failed; nothing further was tried.
    Failed { page: u32, error: String },
}

#[derive(Debug)]
pub struct Harvest {
    /// One entry per distinct link, in discovery order.
    pub listings: Vec<Listing>,
    pub pages_fetched: u32,
    pub cards_seen: usize,
    pub stop: StopReason,
}

pub struct Harvester<S: PageSource> {
    source: S,
    search_url: String,
    site_origin: String,
    max_pages: u32,
    page_delay_secs: (f64, f64),
}

/// `pageNumber` goes after `&` when the search URL already has a query string.
pub fn page_url(base_url: &str, page: u32) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}pageNumber={page}")
}

impl<S: PageSource> Harvester<S> {
    pub fn new(source: S, config: &HuntConfig) -> Self {
        Self {
            source,
            search_url: config.search_url.clone(),
            site_origin: config.site_origin.clone(),
            max_pages: config.max_pages,
            page_delay_secs: config.page_delay_secs,
        }
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Walks the result pages until one adds nothing new, the page limit is
    /// reached, or a page can't be fetched. Whatever was found before a
    /// failure is still returned.
    pub fn harvest(&self) -> Result<Harvest, ScraperError> {
        let selectors = CardSelectors::new()?;
        let origin = Url::parse(&self.site_origin)
            .map_err(|e| ScraperError::HtmlParse(format!("bad site origin: {e}")))?;

        let mut seen = HashSet::new();
        let mut listings = Vec::new();
        let mut cards_seen = 0;
        let mut page = 1;

        let stop = loop {
            if page > self.max_pages {
                break StopReason::PageLimit;
            }

            let url = page_url(&self.search_url, page);
            tracing::info!(page, %url, "scanning page");

            let html = match self.source.fetch(&url) {
                Ok(html) => html,
                Err(e) => {
                    tracing::error!(page, error = %e, "page fetch failed, stopping");
                    break StopReason::Failed {
                        page,
                        error: e.to_string(),
                    };
                }
            };

            let document = Html::parse_document(&html);
            let mut found_on_page = 0;

            for card in selectors.cards(&document) {
                cards_seen += 1;

                let listing = match selectors.parse_card(card, &origin) {
                    Ok(Some(listing)) => listing,
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::warn!(page, error = %e, "skipping card");
                        continue;
                    }
                };

                if seen.insert(listing.link.clone()) {
                    listings.push(listing);
                    found_on_page += 1;
                }
            }

            tracing::info!(page, found_on_page, "page done");

            if found_on_page == 0 {
                tracing::info!(page, "no new listings, stopping");
                break StopReason::Exhausted { page };
            }

            page += 1;
            if page <= self.max_pages {
                self.pause();
            }
        };

        let pages_fetched = match &stop {
            StopReason::Exhausted { page } => *page,
            StopReason::PageLimit => self.max_pages,
            StopReason::Failed { page, .. } => page - 1,
        };

        tracing::info!(
            listings = listings.len(),
            pages_fetched,
            cards_seen,
            "harvest finished"
        );

        Ok(Harvest {
            listings,
            pages_fetched,
            cards_seen,
            stop,
        })
    }

    fn pause(&self) {
        let (min, max) = self.page_delay_secs;
        if max <= 0.0 {
            return;
        }
        let secs = if max > min {
            rand::thread_rng().gen_range(min..=max)
        } else {
            max
        };
        std::thread::sleep(Duration::from_secs_f64(secs));
    }
}
