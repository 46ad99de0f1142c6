mod cards;
mod client;
mod harvester;
mod scraper_error;

pub use cards::CardSelectors;
pub use client::{HttpPageSource, PageSource};
pub use harvester::{page_url, Harvest, Harvester, StopReason};
pub use scraper_error::ScraperError;
