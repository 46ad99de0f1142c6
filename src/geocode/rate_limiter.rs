// src/geocode/rate_limiter.rs
use crate::domain::Coordinates;
use crate::geocode::{GeocodeError, Geocoder};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Keeps at least `min_interval` between the end of one call and the start of
/// the next. The lock is held for the whole call, so at most one runs at a time.
pub struct RateLimiter {
    min_interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: Mutex::new(None),
        }
    }

    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let mut next_slot = self
            .next_slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(at) = *next_slot {
            let now = Instant::now();
            if at > now {
                std::thread::sleep(at - now);
            }
        }

        let out = f();
        *next_slot = Some(Instant::now() + self.min_interval);
        out
    }
}

/// Spaces lookups out and retries the ones that error, pausing first.
/// Each attempt goes through the limiter like any other call.
pub struct RateLimitedGeocoder<G> {
    inner: G,
    limiter: RateLimiter,
    max_retries: u32,
    error_wait: Duration,
}

impl<G: Geocoder> RateLimitedGeocoder<G> {
    pub fn new(inner: G, min_interval: Duration) -> Self {
        Self {
            inner,
            limiter: RateLimiter::new(min_interval),
            max_retries: 0,
            error_wait: Duration::ZERO,
        }
    }

    pub fn with_retries(mut self, max_retries: u32, error_wait: Duration) -> Self {
        self.max_retries = max_retries;
        self.error_wait = error_wait;
        self
    }
}

impl<G: Geocoder> Geocoder for RateLimitedGeocoder<G> {
    fn lookup(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let mut retries = 0;
        loop {
            match self.limiter.run(|| self.inner.lookup(query)) {
                Err(e) if retries < self.max_retries => {
                    retries += 1;
                    tracing::warn!(query, retries, error = %e, "lookup errored, retrying");
                    std::thread::sleep(self.error_wait);
                }
                done => return done,
            }
        }
    }
}
