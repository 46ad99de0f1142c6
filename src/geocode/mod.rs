mod geocode_error;
mod nominatim;
mod pass;
mod rate_limiter;

pub use geocode_error::GeocodeError;
pub use nominatim::NominatimGeocoder;
pub use pass::{geocode_all, located_only};
pub use rate_limiter::RateLimitedGeocoder;

use crate::domain::Coordinates;

/// Resolves a free-form address to a point. `Ok(None)` is a clean miss.
pub trait Geocoder {
    fn lookup(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError>;
}
