pub mod address;
pub mod listing;

pub use listing::{Coordinates, GeocodedListing, Listing};
