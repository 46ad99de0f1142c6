// src/store/map_data_file.rs
//
// Geocoder output: the listing columns plus latitude, longitude, clean_address.
use crate::domain::GeocodedListing;
use crate::store::StoreError;
use csv::{Reader, Writer};
use std::path::Path;

pub fn write_map_data(path: &Path, rows: &[GeocodedListing]) -> Result<(), StoreError> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!(count = rows.len(), path = %path.display(), "saved map data");
    Ok(())
}

/// `Ok(None)` when nothing has been geocoded yet.
pub fn read_map_data(path: &Path) -> Result<Option<Vec<GeocodedListing>>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }

    let mut reader = Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<GeocodedListing>, _>>()?;

    Ok(Some(rows))
}
