// src/geocode/nominatim.rs
use crate::config::HuntConfig;
use crate::domain::Coordinates;
use crate::geocode::{GeocodeError, Geocoder};
use reqwest::blocking::Client;
use serde::Deserialize;

/// One hit from the `/search` endpoint. Coordinates come back as strings.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

impl NominatimPlace {
    fn coordinates(&self) -> Result<Coordinates, GeocodeError> {
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| GeocodeError::Decode(format!("bad coordinate {v:?}: {e}")))
        };

        Ok(Coordinates {
            latitude: parse(&self.lat)?,
            longitude: parse(&self.lon)?,
        })
    }
}

pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(config: &HuntConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(config.geocoder_user_agent.as_str())
            .timeout(config.geocoder_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.geocoder_endpoint.clone(),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn lookup(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let places: Vec<NominatimPlace> = resp.json()?;
        match places.first() {
            Some(place) => {
                tracing::debug!(query, found = %place.display_name, "nominatim hit");
                place.coordinates().map(Some)
            }
            None => Ok(None),
        }
    }
}
