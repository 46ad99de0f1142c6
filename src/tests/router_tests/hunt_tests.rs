use super::{body_string, get, post, state_with_job};
use crate::errors::ServerError;
use crate::pipeline::{HarvestSummary, HuntStatus, HuntSummary};
use crate::router::{handle, AppState};
use crate::scraper::StopReason;
use crate::tests::utils::test_config;
use std::time::{Duration, Instant};

fn summary() -> HuntSummary {
    HuntSummary {
        harvest: HarvestSummary {
            pages_fetched: 3,
            cards_seen: 40,
            listings_saved: 12,
            stop: StopReason::Exhausted { page: 4 },
        },
        rows_geocoded: 12,
        rows_located: 9,
    }
}

fn wait_until_done(state: &AppState) -> HuntStatus {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let status = state.hunt.status();
        if !matches!(status, HuntStatus::Running { .. }) {
            return status;
        }
        assert!(Instant::now() < deadline, "hunt never finished");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn post_hunt_runs_job_and_redirects() {
    let state = state_with_job(test_config(), |_| Ok(summary()));

    let resp = handle(post("/hunt"), &state).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/");
    assert!(matches!(
        wait_until_done(&state),
        HuntStatus::Finished { ref summary, .. } if summary.rows_located == 9
    ));

    let card = body_string(handle(get("/status"), &state).unwrap());
    assert!(card.contains("Listings saved"));
    assert!(card.contains("no more results after page 3"));
}

#[test]
fn second_hunt_while_running_is_refused() {
    let state = state_with_job(test_config(), |_| {
        std::thread::sleep(Duration::from_millis(300));
        Ok(summary())
    });

    handle(post("/hunt"), &state).unwrap();
    let second = handle(post("/hunt"), &state);

    assert!(matches!(second, Err(ServerError::Conflict(_))));

    let card = body_string(handle(get("/status"), &state).unwrap());
    assert!(card.contains("Hunting since"));
    assert!(card.contains("every 3s"));

    wait_until_done(&state);
}

#[test]
fn failed_hunt_is_reported() {
    let state = state_with_job(test_config(), |config| {
        crate::pipeline::geocode_file(config, &crate::tests::utils::ScriptedGeocoder::new())
            .map(|_| summary())
    });

    handle(post("/hunt"), &state).unwrap();

    assert!(matches!(wait_until_done(&state), HuntStatus::Failed { .. }));
    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Hunt failed"));
    assert!(body.contains("Could not find"));
}
