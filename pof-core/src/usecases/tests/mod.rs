pub mod prelude {
    use std::time::Duration;

    pub use crate::{
        cache::CoordinateCache,
        entities::*,
        gateways::geocode::GeocodingError,
        progress::{NoProgress, Progress},
        rate_limit::RateLimiter,
        test_helpers::{ManualClock, MockGeocoder},
        usecases::Error,
    };
    pub use pof_entities::builders::*;

    pub const ONE_SEC: Duration = Duration::from_secs(1);
}
