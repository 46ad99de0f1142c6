use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Geocoder network error: {0}")]
    Network(String),
    #[error("Geocoder timed out")]
    Timeout,
    #[error("Geocoder HTTP {0}")]
    Status(u16),
    #[error("Unreadable geocoder response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeocodeError::Timeout
        } else if e.is_decode() {
            GeocodeError::Decode(e.to_string())
        } else {
            GeocodeError::Network(e.to_string())
        }
    }
}
