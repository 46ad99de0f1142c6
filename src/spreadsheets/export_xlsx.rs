use crate::domain::GeocodedListing;
use crate::errors::ServerError;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 6] = [
    "Address",
    "Clean Address",
    "Price",
    "Latitude",
    "Longitude",
    "Link",
];

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// One row per geocoded listing, header on the first row.
pub fn map_data_workbook(rows: &[GeocodedListing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_err("header"))?;
    }

    for (i, row) in rows.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, row)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_row(sheet: &mut Worksheet, r: u32, row: &GeocodedListing) -> Result<(), ServerError> {
    sheet
        .write_string(r, 0, &row.address)
        .map_err(xlsx_err("address"))?;
    sheet
        .write_string(r, 1, row.clean_address.as_deref().unwrap_or(""))
        .map_err(xlsx_err("clean address"))?;
    sheet
        .write_string(r, 2, &row.price_text)
        .map_err(xlsx_err("price"))?;

    if let Some(lat) = row.latitude {
        sheet.write_number(r, 3, lat).map_err(xlsx_err("latitude"))?;
    }
    if let Some(lon) = row.longitude {
        sheet.write_number(r, 4, lon).map_err(xlsx_err("longitude"))?;
    }

    sheet
        .write_string(r, 5, &row.link)
        .map_err(xlsx_err("link"))?;
    Ok(())
}
