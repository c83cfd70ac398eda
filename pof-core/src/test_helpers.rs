//! In-memory stand-ins for the geocoding gateway and the clock.

use crate::{
    entities::Coordinate,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
    rate_limit::Clock,
};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    time::{Duration, Instant},
};

/// Answers from a fixed table, unknown addresses are not found.
#[derive(Debug, Default)]
pub struct MockGeocoder {
    pub responses: RefCell<HashMap<String, Result<Coordinate, GeocodingError>>>,
    pub requests: RefCell<Vec<String>>,
}

impl MockGeocoder {
    pub fn respond(&self, address: &str, res: Result<Coordinate, GeocodingError>) {
        self.responses.borrow_mut().insert(address.into(), res);
    }
}

impl GeoCodingGateway for MockGeocoder {
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        self.requests.borrow_mut().push(address.into());
        self.responses
            .borrow()
            .get(address)
            .cloned()
            .unwrap_or(Err(GeocodingError::NotFound))
    }
}

/// A clock that only moves when told to.
///
/// Sleeping advances the clock immediately.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
    pub slept: RefCell<Vec<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
            slept: Default::default(),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }

    pub fn total_slept(&self) -> Duration {
        self.slept.borrow().iter().sum()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
        self.advance(duration);
    }
}

impl Clock for &ManualClock {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
