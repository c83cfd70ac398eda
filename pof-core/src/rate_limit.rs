use std::{
    thread,
    time::{Duration, Instant},
};

/// The provider allows at most one request per second.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Source of time for the [`RateLimiter`].
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Enforces a minimum interval between the starts of consecutive calls.
///
/// The wait blocks the calling thread.
#[derive(Debug)]
pub struct RateLimiter<C = SystemClock> {
    clock: C,
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter<SystemClock> {
    pub fn new(min_interval: Duration) -> Self {
        Self::with_clock(SystemClock, min_interval)
    }
}

impl Default for RateLimiter<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl<C> RateLimiter<C>
where
    C: Clock,
{
    pub fn with_clock(clock: C, min_interval: Duration) -> Self {
        Self {
            clock,
            min_interval,
            last_call: None,
        }
    }

    /// Blocks until the next call may start and marks it as started.
    ///
    /// Returns how long the caller was suspended.
    pub fn wait(&mut self) -> Duration {
        let waited = match self.last_call {
            Some(last_call) => {
                let elapsed = self.clock.now().saturating_duration_since(last_call);
                let remaining = self.min_interval.saturating_sub(elapsed);
                if !remaining.is_zero() {
                    log::debug!("Waiting {remaining:?} before the next geocoding request");
                    self.clock.sleep(remaining);
                }
                remaining
            }
            None => Duration::ZERO,
        };
        self.last_call = Some(self.clock.now());
        waited
    }
}
