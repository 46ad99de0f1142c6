// src/pipeline.rs
use crate::config::HuntConfig;
use crate::geocode::{
    geocode_all, located_only, GeocodeError, Geocoder, NominatimGeocoder, RateLimitedGeocoder,
};
use crate::scraper::{Harvester, HttpPageSource, PageSource, ScraperError, StopReason};
use crate::store::{read_listings, write_listings, write_map_data, StoreError};
use chrono::{DateTime, Local};
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Scraper(#[from] ScraperError),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HarvestSummary {
    pub pages_fetched: u32,
    pub cards_seen: usize,
    pub listings_saved: usize,
    pub stop: StopReason,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HuntSummary {
    pub harvest: HarvestSummary,
    pub rows_geocoded: usize,
    pub rows_located: usize,
}

/// Harvests the search pages and writes the listings file. Listings whose
/// address couldn't be read are left out; an empty harvest writes nothing.
pub fn harvest_to_file<S: PageSource>(
    config: &HuntConfig,
    source: S,
) -> Result<HarvestSummary, PipelineError> {
    let harvest = Harvester::new(source, config).harvest()?;

    let listings: Vec<_> = harvest
        .listings
        .into_iter()
        .filter(|l| l.has_known_address())
        .collect();

    if listings.is_empty() {
        tracing::warn!("no listings found");
    } else {
        write_listings(&config.listings_path, &listings)?;
    }

    Ok(HarvestSummary {
        pages_fetched: harvest.pages_fetched,
        cards_seen: harvest.cards_seen,
        listings_saved: listings.len(),
        stop: harvest.stop,
    })
}

/// Geocodes the listings file into the map data file, keeping only rows that
/// were located. Returns (rows read, rows saved).
pub fn geocode_file<G: Geocoder + ?Sized>(
    config: &HuntConfig,
    geocoder: &G,
) -> Result<(usize, usize), PipelineError> {
    let listings = read_listings(&config.listings_path)?;

    let rows = geocode_all(&listings, geocoder, &config.locality_suffix);
    let located = located_only(rows);
    write_map_data(&config.map_data_path, &located)?;

    tracing::info!(
        read = listings.len(),
        saved = located.len(),
        "geocoding done"
    );
    Ok((listings.len(), located.len()))
}

pub fn run_hunt<S: PageSource, G: Geocoder + ?Sized>(
    config: &HuntConfig,
    source: S,
    geocoder: &G,
) -> Result<HuntSummary, PipelineError> {
    let harvest = harvest_to_file(config, source)?;
    let (rows_geocoded, rows_located) = geocode_file(config, geocoder)?;

    Ok(HuntSummary {
        harvest,
        rows_geocoded,
        rows_located,
    })
}

/// The real thing: DuProprio over HTTP, Nominatim behind the rate limiter.
pub fn live_hunt(config: &HuntConfig) -> Result<HuntSummary, PipelineError> {
    let source = HttpPageSource::new(&config.user_agent, config.page_timeout)?;
    let geocoder = RateLimitedGeocoder::new(
        NominatimGeocoder::new(config)?,
        config.geocoder_min_interval,
    )
    .with_retries(config.geocoder_max_retries, config.geocoder_error_wait);
    run_hunt(config, source, &geocoder)
}

#[derive(Debug, Clone, PartialEq)]
pub enum HuntStatus {
    Idle,
    Running {
        started_at: DateTime<Local>,
    },
    Finished {
        summary: HuntSummary,
        finished_at: DateTime<Local>,
    },
    Failed {
        error: String,
        finished_at: DateTime<Local>,
    },
}

type HuntJob = dyn Fn(&HuntConfig) -> Result<HuntSummary, PipelineError> + Send + Sync;

/// Runs hunts on a background thread, one at a time, and remembers how the
/// last one went.
#[derive(Clone)]
pub struct HuntHandle {
    status: Arc<Mutex<HuntStatus>>,
    job: Arc<HuntJob>,
}

impl HuntHandle {
    pub fn new<F>(job: F) -> Self
    where
        F: Fn(&HuntConfig) -> Result<HuntSummary, PipelineError> + Send + Sync + 'static,
    {
        Self {
            status: Arc::new(Mutex::new(HuntStatus::Idle)),
            job: Arc::new(job),
        }
    }

    pub fn status(&self) -> HuntStatus {
        self.lock().clone()
    }

    /// Returns false without doing anything if a hunt is already running.
    pub fn start(&self, config: HuntConfig) -> bool {
        {
            let mut status = self.lock();
            if matches!(*status, HuntStatus::Running { .. }) {
                return false;
            }
            *status = HuntStatus::Running {
                started_at: Local::now(),
            };
        }

        let handle = self.clone();
        std::thread::spawn(move || {
            tracing::info!("hunt thread started");

            let next = match (handle.job)(&config) {
                Ok(summary) => {
                    tracing::info!(
                        saved = summary.harvest.listings_saved,
                        located = summary.rows_located,
                        "hunt complete"
                    );
                    HuntStatus::Finished {
                        summary,
                        finished_at: Local::now(),
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "hunt failed");
                    HuntStatus::Failed {
                        error: e.to_string(),
                        finished_at: Local::now(),
                    }
                }
            };

            *handle.lock() = next;
        });

        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HuntStatus> {
        self.status
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
