use maud::{html, Markup};

pub mod error;
pub mod listing_map;
pub mod listing_table;
pub mod status;

pub use error::error_page;
pub use listing_map::listing_map;
pub use listing_table::listing_table;
pub use status::status_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            (body)
        }
    }
}
