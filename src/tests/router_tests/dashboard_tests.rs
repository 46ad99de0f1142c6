use super::{body_string, get, state_with_job};
use crate::domain::GeocodedListing;
use crate::errors::ServerError;
use crate::pipeline::PipelineError;
use crate::router::{handle, AppState};
use crate::store::{write_map_data, StoreError};
use crate::tests::utils::test_config;

fn idle_state() -> AppState {
    state_with_job(test_config(), |_| {
        Err(PipelineError::Store(StoreError::MissingFile("unused".into())))
    })
}

fn located(address: &str, link: &str) -> GeocodedListing {
    GeocodedListing {
        address: address.to_string(),
        price_text: "450 000 $".to_string(),
        link: link.to_string(),
        latitude: Some(45.47),
        longitude: Some(-73.61),
        clean_address: Some(address.to_string()),
    }
}

#[test]
fn dashboard_without_data_says_so() {
    let state = idle_state();

    let resp = handle(get("/"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("No geocodable data found yet"));
    assert!(body.contains("Start the hunt"));
}

#[test]
fn dashboard_shows_map_and_table() {
    let state = idle_state();
    write_map_data(
        &state.config.map_data_path,
        &[
            located("3239 Rue Something", "https://duproprio.com/fr/a-vendre/hab-1"),
            located("4500 Rue X", "https://duproprio.com/fr/a-vendre/hab-2"),
        ],
    )
    .unwrap();

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("Map view (2 listings)"));
    assert!(body.contains("3239 Rue Something"));
    assert!(body.contains("https://duproprio.com/fr/a-vendre/hab-2"));
    assert!(body.contains("id=\"map\""));
}

#[test]
fn unreadable_data_file_is_shown_not_raised() {
    let state = idle_state();
    std::fs::write(&state.config.map_data_path, "address,latitude\nx,not-a-number\n").unwrap();

    let resp = handle(get("/"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Error reading or displaying data"));
}

#[test]
fn export_needs_data() {
    let state = idle_state();
    assert!(matches!(handle(get("/export"), &state), Err(ServerError::NotFound)));

    write_map_data(
        &state.config.map_data_path,
        &[located("4500 Rue X", "https://duproprio.com/x")],
    )
    .unwrap();

    let resp = handle(get("/export"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["Content-Type"]
        .to_str()
        .unwrap()
        .contains("spreadsheetml"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = idle_state();
    match handle(get("/nope"), &state) {
        Err(err) => assert_eq!(err.status(), 404),
        Ok(resp) => panic!("expected 404, got {}", resp.status()),
    }
}
