pub mod prelude {
    use std::time::Duration;

    pub use pof_core::{
        entities::*,
        gateways::geocode::GeocodingError,
        progress::Progress,
        rate_limit::RateLimiter,
        test_helpers::{ManualClock, MockGeocoder},
        usecases::ResolutionPipeline,
    };

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub fn pipeline<'a>(
        geocoder: &'a MockGeocoder,
        clock: &'a ManualClock,
    ) -> ResolutionPipeline<&'a MockGeocoder, &'a ManualClock> {
        ResolutionPipeline::with_rate_limiter(
            geocoder,
            RateLimiter::with_clock(clock, Duration::from_secs(1)),
        )
    }
}
