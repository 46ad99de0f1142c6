// src/geocode/pass.rs
use crate::domain::address::normalize;
use crate::domain::{Coordinates, GeocodedListing, Listing};
use crate::geocode::Geocoder;

/// Cleans and geocodes every listing. Rows that can't be cleaned or located
/// come back without coordinates; lookup errors never stop the pass.
pub fn geocode_all<G: Geocoder + ?Sized>(
    listings: &[Listing],
    geocoder: &G,
    locality_suffix: &str,
) -> Vec<GeocodedListing> {
    tracing::info!(count = listings.len(), "finding coordinates");

    listings
        .iter()
        .map(|listing| geocode_one(listing, geocoder, locality_suffix))
        .collect()
}

fn geocode_one<G: Geocoder + ?Sized>(
    listing: &Listing,
    geocoder: &G,
    locality_suffix: &str,
) -> GeocodedListing {
    let clean = match normalize(Some(&listing.address)) {
        Some(clean) if !clean.is_empty() => clean,
        _ => {
            tracing::debug!(raw = %listing.address, "skipping junk address");
            return GeocodedListing::unresolved(listing, None);
        }
    };

    if clean != listing.address {
        tracing::info!(raw = %listing.address, clean = %clean, "cleaned address");
    }

    match locate(geocoder, &clean, locality_suffix) {
        Some(at) => {
            tracing::info!(address = %clean, "found");
            GeocodedListing::located(listing, clean, at)
        }
        None => {
            tracing::warn!(address = %clean, "still not found");
            GeocodedListing::unresolved(listing, Some(clean))
        }
    }
}

/// Tries with the locality suffix first, then the bare address. A lookup that
/// errors counts as a miss.
fn locate<G: Geocoder + ?Sized>(
    geocoder: &G,
    clean: &str,
    locality_suffix: &str,
) -> Option<Coordinates> {
    attempt(geocoder, &format!("{clean}{locality_suffix}")).or_else(|| attempt(geocoder, clean))
}

fn attempt<G: Geocoder + ?Sized>(geocoder: &G, query: &str) -> Option<Coordinates> {
    geocoder.lookup(query).unwrap_or_else(|e| {
        tracing::error!(query, error = %e, "lookup failed");
        None
    })
}

pub fn located_only(rows: Vec<GeocodedListing>) -> Vec<GeocodedListing> {
    rows.into_iter().filter(GeocodedListing::is_located).collect()
}
