use crate::domain::GeocodedListing;
use maud::{html, Markup};

pub fn listing_table(rows: &[GeocodedListing]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Address" }
                    th { "Price" }
                    th { "Listing" }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td { (row.display_address()) }
                        td { (row.price_text) }
                        td { a href=(row.link) target="_blank" rel="noopener" { "View" } }
                    }
                }
            }
        }
    }
}
