use pof_core::{
    entities::Coordinate,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};
use reqwest::{blocking::Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Provider states that mean "we could not ask" rather than "there is nothing".
const ERROR_STATES: &[&str] = &[
    "REQUEST_DENIED",
    "OVER_QUERY_LIMIT",
    "OVER_DAILY_LIMIT",
    "INVALID_REQUEST",
    "UNKNOWN_ERROR",
];

/// Google Maps Geocoding API client.
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleGeocoder {
    pub fn try_new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl GeoCodingGateway for GoogleGeocoder {
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        log::debug!("Requesting location of '{address}'");
        let res = self
            .client
            .get(&self.base_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .map_err(|err| GeocodingError::Transport(err.without_url().to_string()))?;
        let status = res.status();
        if status != StatusCode::OK {
            return Err(GeocodingError::Transport(format!("HTTP status {status}")));
        }
        let body = res
            .text()
            .map_err(|err| GeocodingError::Transport(err.without_url().to_string()))?;
        parse_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: Option<String>,
    error_message: Option<String>,
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<Location>,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: Option<f64>,
    lng: Option<f64>,
}

fn parse_response(body: &str) -> Result<Coordinate, GeocodingError> {
    let res: GeocodeResponse = serde_json::from_str(body)
        .map_err(|err| GeocodingError::Transport(format!("Invalid response body: {err}")))?;
    if let Some(status) = &res.status {
        log::debug!("Geocoding response status: {status}");
        if ERROR_STATES.contains(&status.as_str()) {
            let msg = match &res.error_message {
                Some(msg) => format!("{status}: {msg}"),
                None => status.clone(),
            };
            return Err(GeocodingError::Transport(msg));
        }
    }
    let location = res
        .results
        .and_then(|results| results.into_iter().next())
        .and_then(|first| first.geometry)
        .and_then(|geometry| geometry.location)
        .ok_or(GeocodingError::NotFound)?;
    match (location.lat, location.lng) {
        (Some(lat), Some(lng)) => Coordinate::try_from_lat_lng_deg(lat, lng).ok_or_else(|| {
            log::warn!("Ignoring invalid location ({lat}, {lng})");
            GeocodingError::NotFound
        }),
        _ => Err(GeocodingError::NotFound),
    }
}
