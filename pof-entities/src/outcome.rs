use crate::{address::AddressRecord, geo::Coordinate};
use std::fmt;

/// Why a record could not be located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The provider answered but had no usable location.
    NotFound,
    /// Talking to the provider failed (network, status, body).
    Transport(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

/// The result of resolving exactly one input record.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    Resolved {
        record: AddressRecord,
        coordinate: Coordinate,
    },
    Failed {
        record: AddressRecord,
        reason: FailureReason,
    },
}

impl ResolutionOutcome {
    pub fn resolved(record: AddressRecord, coordinate: Coordinate) -> Self {
        let record = record.with_coordinate(coordinate);
        Self::Resolved { record, coordinate }
    }

    pub fn failed(record: AddressRecord, reason: FailureReason) -> Self {
        Self::Failed { record, reason }
    }

    pub fn record(&self) -> &AddressRecord {
        match self {
            Self::Resolved { record, .. } | Self::Failed { record, .. } => record,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Resolved { coordinate, .. } => Some(*coordinate),
            Self::Failed { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            Self::Resolved { .. } => None,
            Self::Failed { reason, .. } => Some(reason),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_outcome_attaches_coordinate() {
        let pos = Coordinate::from_lat_lng_deg(-9.6, -35.7);
        let o = ResolutionOutcome::resolved(AddressRecord::new("Rua A", "10", "57000-000"), pos);
        assert!(o.is_resolved());
        assert_eq!(Some(pos), o.record().coordinate());
        assert_eq!(Some(pos), o.coordinate());
        assert!(o.failure_reason().is_none());
    }

    #[test]
    fn failed_outcome_has_no_coordinate() {
        let o = ResolutionOutcome::failed(
            AddressRecord::new("Rua B", "2", "57000-001"),
            FailureReason::NotFound,
        );
        assert!(!o.is_resolved());
        assert!(o.record().coordinate().is_none());
        assert_eq!(Some(&FailureReason::NotFound), o.failure_reason());
    }
}
