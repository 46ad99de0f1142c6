// src/store/listings_file.rs
//
// Harvester output: address, price_text, link.
use crate::domain::Listing;
use crate::store::StoreError;
use csv::{Reader, StringRecord, Writer};
use std::path::Path;

/// Checked in order; the first header present is the address column.
pub const ADDRESS_COLUMNS: &[&str] = &["address", "location", "title", "addr"];

pub fn write_listings(path: &Path, listings: &[Listing]) -> Result<(), StoreError> {
    let mut writer = Writer::from_path(path)?;
    for listing in listings {
        writer.serialize(listing)?;
    }
    writer.flush()?;

    tracing::info!(count = listings.len(), path = %path.display(), "saved listings");
    Ok(())
}

/// Headers are matched after trimming and lowercasing. Missing price or link
/// columns read as empty strings; a missing address column is an error.
pub fn read_listings(path: &Path) -> Result<Vec<Listing>, StoreError> {
    if !path.exists() {
        return Err(StoreError::MissingFile(path.to_path_buf()));
    }

    let mut reader = Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let address_col = find_address_column(&headers)?;
    tracing::info!(column = %headers[address_col], "using address column");

    let column = |name: &str| headers.iter().position(|h| h == name);
    let price_col = column("price_text");
    let link_col = column("link");

    let field = |record: &StringRecord, col: Option<usize>| {
        col.and_then(|c| record.get(c))
            .unwrap_or_default()
            .to_string()
    };

    let mut listings = Vec::new();
    for record in reader.records() {
        let record = record?;
        listings.push(Listing {
            address: field(&record, Some(address_col)),
            price_text: field(&record, price_col),
            link: field(&record, link_col),
        });
    }

    Ok(listings)
}

pub fn find_address_column(headers: &[String]) -> Result<usize, StoreError> {
    ADDRESS_COLUMNS
        .iter()
        .find_map(|name| headers.iter().position(|h| h == name))
        .ok_or_else(|| StoreError::MissingAddressColumn {
            found: headers.to_vec(),
        })
}
