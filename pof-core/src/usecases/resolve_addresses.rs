use super::prelude::*;
use crate::{
    cache::CoordinateCache,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
    progress::{Progress, ProgressSink},
    rate_limit::{Clock, RateLimiter, SystemClock},
};

/// Counters of a single pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub cache_hits: usize,
    pub external_calls: usize,
}

impl std::ops::AddAssign for PipelineStats {
    fn add_assign(&mut self, rhs: Self) {
        self.cache_hits += rhs.cache_hits;
        self.external_calls += rhs.external_calls;
    }
}

impl From<GeocodingError> for FailureReason {
    fn from(err: GeocodingError) -> Self {
        match err {
            GeocodingError::NotFound => Self::NotFound,
            GeocodingError::Transport(msg) => Self::Transport(msg),
        }
    }
}

/// Resolves all records one after another, in input order.
///
/// Every record yields exactly one outcome and one progress event.
/// A failed record never stops the run; only an empty input is an error.
pub fn resolve_addresses<G, C, P>(
    geocoder: &G,
    cache: &mut CoordinateCache,
    rate_limiter: &mut RateLimiter<C>,
    records: Vec<AddressRecord>,
    progress: &mut P,
) -> Result<(Vec<ResolutionOutcome>, PipelineStats)>
where
    G: GeoCodingGateway + ?Sized,
    C: Clock,
    P: ProgressSink + ?Sized,
{
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }
    let total = records.len();
    let mut stats = PipelineStats::default();
    let mut outcomes = Vec::with_capacity(total);
    for (index, record) in records.into_iter().enumerate() {
        let outcome = resolve_address(geocoder, cache, rate_limiter, record, &mut stats);
        outcomes.push(outcome);
        progress.progress(Progress::after(index, total));
    }
    debug_assert_eq!(total, outcomes.len());
    log::info!(
        "Resolved {} addresses ({} cache hits, {} geocoding requests)",
        total,
        stats.cache_hits,
        stats.external_calls
    );
    Ok((outcomes, stats))
}

fn resolve_address<G, C>(
    geocoder: &G,
    cache: &mut CoordinateCache,
    rate_limiter: &mut RateLimiter<C>,
    record: AddressRecord,
    stats: &mut PipelineStats,
) -> ResolutionOutcome
where
    G: GeoCodingGateway + ?Sized,
    C: Clock,
{
    let address = record.full_address();
    if let Some(coordinate) = cache.lookup(&address) {
        log::debug!("Found '{address}' in cache: {coordinate}");
        stats.cache_hits += 1;
        return ResolutionOutcome::resolved(record, coordinate);
    }
    rate_limiter.wait();
    stats.external_calls += 1;
    match geocoder.resolve(&address) {
        Ok(coordinate) => {
            log::debug!("Resolved address location '{address}': {coordinate}");
            cache.store(address, coordinate);
            ResolutionOutcome::resolved(record, coordinate)
        }
        Err(err) => {
            log::warn!("Failed to resolve address location '{address}': {err}");
            ResolutionOutcome::failed(record, err.into())
        }
    }
}

/// Owns the state of the resolution across one or more batches:
/// the geocoder, the coordinate cache and the rate limiter.
#[derive(Debug)]
pub struct ResolutionPipeline<G, C = SystemClock> {
    geocoder: G,
    cache: CoordinateCache,
    rate_limiter: RateLimiter<C>,
    stats: PipelineStats,
}

impl<G> ResolutionPipeline<G, SystemClock>
where
    G: GeoCodingGateway,
{
    pub fn new(geocoder: G) -> Self {
        Self::with_rate_limiter(geocoder, RateLimiter::default())
    }
}

impl<G, C> ResolutionPipeline<G, C>
where
    G: GeoCodingGateway,
    C: Clock,
{
    pub fn with_rate_limiter(geocoder: G, rate_limiter: RateLimiter<C>) -> Self {
        Self {
            geocoder,
            cache: CoordinateCache::default(),
            rate_limiter,
            stats: PipelineStats::default(),
        }
    }

    pub fn run<P>(
        &mut self,
        records: Vec<AddressRecord>,
        progress: &mut P,
    ) -> Result<Vec<ResolutionOutcome>>
    where
        P: ProgressSink + ?Sized,
    {
        let (outcomes, stats) = resolve_addresses(
            &self.geocoder,
            &mut self.cache,
            &mut self.rate_limiter,
            records,
            progress,
        )?;
        self.stats += stats;
        Ok(outcomes)
    }

    pub fn cache(&self) -> &CoordinateCache {
        &self.cache
    }

    /// Accumulated over all runs of this pipeline.
    pub fn stats(&self) -> PipelineStats {
        self.stats
    }
}
