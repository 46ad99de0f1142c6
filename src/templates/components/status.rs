use crate::pipeline::{HuntStatus, HuntSummary};
use crate::scraper::StopReason;
use maud::{html, Markup};

fn stop_text(stop: &StopReason) -> String {
    match stop {
        StopReason::Exhausted { page: 1 } => "the first page had no results".to_string(),
        StopReason::Exhausted { page } => format!("no more results after page {}", page - 1),
        StopReason::PageLimit => "stopped at the page limit".to_string(),
        StopReason::Failed { page, error } => format!("page {page} failed ({error})"),
    }
}

fn summary(s: &HuntSummary) -> Markup {
    html! {
        ul {
            li { "Pages scanned: " strong { (s.harvest.pages_fetched) } " (" (stop_text(&s.harvest.stop)) ")" }
            li { "Listings saved: " strong { (s.harvest.listings_saved) } " from " (s.harvest.cards_seen) " cards" }
            li { "Located on the map: " strong { (s.rows_located) } " of " (s.rows_geocoded) }
        }
    }
}

/// Polls itself while a hunt is running.
pub fn status_card(status: &HuntStatus) -> Markup {
    let running = matches!(status, HuntStatus::Running { .. });

    html! {
        section
            class="card"
            id="hunt-status"
            hx-get=[running.then_some("/status")]
            hx-trigger=[running.then_some("every 3s")]
            hx-swap=[running.then_some("outerHTML")]
        {
            h2 { "Hunt" }

            @match status {
                HuntStatus::Idle => p class="muted" { "No hunt has run since the server started." },
                HuntStatus::Running { started_at } => p {
                    "Hunting since " (started_at.format("%H:%M:%S").to_string()) ". This takes a few minutes."
                },
                HuntStatus::Finished { summary: s, finished_at } => div {
                    p { "Finished at " (finished_at.format("%H:%M:%S").to_string()) "." }
                    (summary(s))
                },
                HuntStatus::Failed { error, finished_at } => p class="error" {
                    "Hunt failed at " (finished_at.format("%H:%M:%S").to_string()) ": " (error)
                },
            }

            form method="post" action="/hunt" {
                button type="submit" class="primary" disabled[running] { "Start the hunt" }
            }
        }
    }
}
