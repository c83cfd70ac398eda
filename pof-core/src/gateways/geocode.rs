use crate::entities::Coordinate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeocodingError {
    #[error("No location found")]
    NotFound,
    #[error("Geocoding request failed: {0}")]
    Transport(String),
}

/// Resolves a textual address into a coordinate.
///
/// Implementations issue exactly one request per call and never retry.
/// Throttling is not their concern, the caller waits before calling.
pub trait GeoCodingGateway {
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodingError>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        (**self).resolve(address)
    }
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        (**self).resolve(address)
    }
}
