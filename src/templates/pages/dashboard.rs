use crate::domain::GeocodedListing;
use crate::pipeline::HuntStatus;
use crate::templates::components::{card, listing_map, listing_table, status_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// What the map data file held when the page was built.
pub enum MapData {
    NotYet,
    Rows(Vec<GeocodedListing>),
    Unreadable(String),
}

pub struct DashboardVm {
    pub status: HuntStatus,
    pub data: MapData,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "FSBO Hunter",
        html! {
            main {
                h1 { "For sale by owner" }
                (status_card(&vm.status))

                @match &vm.data {
                    MapData::NotYet => (card("Active listings", html! {
                        p class="muted" { "No geocodable data found yet. Start a hunt to fill the map." }
                    })),
                    MapData::Unreadable(msg) => (card("Active listings", html! {
                        p class="error" { "Error reading or displaying data: " (msg) }
                    })),
                    MapData::Rows(rows) => (listings_section(rows)),
                }
            }
        },
    )
}

fn listings_section(rows: &[GeocodedListing]) -> Markup {
    let located: Vec<GeocodedListing> = rows.iter().filter(|r| r.is_located()).cloned().collect();

    html! {
        @if located.is_empty() {
            (card("Map view", html! {
                p class="muted" { "No geocodable data found yet. Try running the hunt again." }
            }))
        } @else {
            (card(&format!("Map view ({} listings)", located.len()), listing_map(&located)))
        }

        (card("Listing details", html! {
            p { a href="/export" { "Download as spreadsheet" } }
            (listing_table(rows))
        }))
    }
}
