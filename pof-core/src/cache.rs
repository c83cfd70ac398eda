use crate::entities::Coordinate;
use std::collections::HashMap;

/// In-memory memo of resolved addresses.
///
/// Lives as long as the run, no eviction. Only successful
/// lookups are stored, a failed address is asked for again
/// on its next occurrence.
#[derive(Debug, Default, Clone)]
pub struct CoordinateCache {
    entries: HashMap<String, Coordinate>,
}

impl CoordinateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys are compared verbatim (case and whitespace sensitive).
    pub fn lookup(&self, address: &str) -> Option<Coordinate> {
        self.entries.get(address).copied()
    }

    pub fn store(&mut self, address: impl Into<String>, coordinate: Coordinate) {
        self.entries.insert(address.into(), coordinate);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_stored_coordinate() {
        let mut cache = CoordinateCache::new();
        let pos = Coordinate::from_lat_lng_deg(-9.6, -35.7);
        assert!(cache.lookup("Rua A, 10, 57000-000").is_none());
        cache.store("Rua A, 10, 57000-000", pos);
        assert_eq!(Some(pos), cache.lookup("Rua A, 10, 57000-000"));
        assert_eq!(1, cache.len());
    }

    #[test]
    fn keys_are_exact() {
        let mut cache = CoordinateCache::new();
        cache.store("Rua A, 10, 57000-000", Coordinate::from_lat_lng_deg(1, 1));
        assert!(cache.lookup("rua a, 10, 57000-000").is_none());
        assert!(cache.lookup("Rua A,  10, 57000-000").is_none());
        assert!(cache.lookup(" Rua A, 10, 57000-000").is_none());
    }

    #[test]
    fn store_overwrites() {
        let mut cache = CoordinateCache::new();
        cache.store("x", Coordinate::from_lat_lng_deg(1, 1));
        cache.store("x", Coordinate::from_lat_lng_deg(2, 2));
        assert_eq!(Some(Coordinate::from_lat_lng_deg(2, 2)), cache.lookup("x"));
        assert_eq!(1, cache.len());
    }
}
