// src/domain/listing.rs
use serde::{Deserialize, Serialize};

/// Written in place of an address when the link slug can't be read.
pub const UNKNOWN_ADDRESS: &str = "Address Unknown";
/// Written in place of a price when the card carries none.
pub const UNKNOWN_PRICE: &str = "Price Unknown";

/// One listing card as harvested from a search results page.
/// `link` is the identity: a harvest never holds two listings with the same link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub address: String,
    pub price_text: String,
    pub link: String,
}

impl Listing {
    pub fn has_known_address(&self) -> bool {
        self.address != UNKNOWN_ADDRESS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A listing after the geocoding pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedListing {
    pub address: String,
    pub price_text: String,
    pub link: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub clean_address: Option<String>,
}

impl GeocodedListing {
    pub fn unresolved(listing: &Listing, clean_address: Option<String>) -> Self {
        Self {
            address: listing.address.clone(),
            price_text: listing.price_text.clone(),
            link: listing.link.clone(),
            latitude: None,
            longitude: None,
            clean_address,
        }
    }

    pub fn located(listing: &Listing, clean_address: String, at: Coordinates) -> Self {
        Self {
            latitude: Some(at.latitude),
            longitude: Some(at.longitude),
            ..Self::unresolved(listing, Some(clean_address))
        }
    }

    /// Only rows with both coordinates are kept in the map data file.
    pub fn is_located(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// What the dashboard table shows in the address column.
    pub fn display_address(&self) -> &str {
        self.clean_address.as_deref().unwrap_or(&self.address)
    }
}
