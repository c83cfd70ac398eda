//! Aggregation of the per-record outcomes into what the
//! renderers need: the located records, one log line per
//! record and the summary statistics.

use crate::entities::*;
use std::fmt;

/// A record together with its location, ready to be put on a map.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecord {
    pub record: AddressRecord,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub status: LogStatus,
    pub full_address: String,
    pub detail: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self.status {
            LogStatus::Success => "[OK]",
            LogStatus::Failure => "[FAILED]",
        };
        write!(f, "{tag} {}: {}", self.full_address, self.detail)
    }
}

impl From<&ResolutionOutcome> for LogLine {
    fn from(outcome: &ResolutionOutcome) -> Self {
        let full_address = outcome.record().full_address();
        match outcome {
            ResolutionOutcome::Resolved { coordinate, .. } => Self {
                status: LogStatus::Success,
                full_address,
                detail: coordinate.to_string(),
            },
            ResolutionOutcome::Failed { reason, .. } => Self {
                status: LogStatus::Failure,
                full_address,
                detail: reason.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub successful: usize,
}

impl Stats {
    pub fn failed(&self) -> usize {
        self.total.saturating_sub(self.successful)
    }

    /// `None` if there was nothing to process.
    pub fn success_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.successful as f64 / self.total as f64)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "total: {}, successful: {}, failed: {}, success rate: ",
            self.total,
            self.successful,
            self.failed()
        )?;
        match self.success_rate() {
            Some(rate) => write!(f, "{:.2}%", rate * 100.0),
            None => write!(f, "n/a"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub resolved: Vec<ResolvedRecord>,
    pub log: Vec<LogLine>,
    pub stats: Stats,
}

impl Report {
    pub fn aggregate(outcomes: &[ResolutionOutcome]) -> Self {
        let resolved: Vec<_> = outcomes
            .iter()
            .filter_map(|o| match o {
                ResolutionOutcome::Resolved { record, coordinate } => Some(ResolvedRecord {
                    record: record.clone(),
                    coordinate: *coordinate,
                }),
                ResolutionOutcome::Failed { .. } => None,
            })
            .collect();
        let log = outcomes.iter().map(LogLine::from).collect();
        let stats = Stats {
            total: outcomes.len(),
            successful: resolved.len(),
        };
        Self {
            resolved,
            log,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(street: &str, lat: f64, lng: f64) -> ResolutionOutcome {
        ResolutionOutcome::resolved(
            AddressRecord::new(street, "10", "57000-000"),
            Coordinate::from_lat_lng_deg(lat, lng),
        )
    }

    fn failed(street: &str, reason: FailureReason) -> ResolutionOutcome {
        ResolutionOutcome::failed(AddressRecord::new(street, "10", "57000-000"), reason)
    }

    #[test]
    fn aggregate_single_success() {
        let report = Report::aggregate(&[resolved("Rua A", -9.6, -35.7)]);
        assert_eq!(1, report.resolved.len());
        assert_eq!(
            Coordinate::from_lat_lng_deg(-9.6, -35.7),
            report.resolved[0].coordinate
        );
        assert_eq!(Some(1.0), report.stats.success_rate());
        assert_eq!(
            "[OK] Rua A, 10, 57000-000: (-9.6, -35.7)",
            report.log[0].to_string()
        );
    }

    #[test]
    fn partition_preserves_order() {
        let outcomes = vec![
            resolved("Rua A", 1.0, 1.0),
            failed("Rua B", FailureReason::NotFound),
            resolved("Rua C", 3.0, 3.0),
            failed("Rua D", FailureReason::Transport("HTTP status 500".into())),
            resolved("Rua E", 5.0, 5.0),
        ];
        let report = Report::aggregate(&outcomes);
        let streets: Vec<_> = report.resolved.iter().map(|r| r.record.street()).collect();
        assert_eq!(vec!["Rua A", "Rua C", "Rua E"], streets);
        let statuses: Vec<_> = report.log.iter().map(|l| l.status).collect();
        assert_eq!(
            vec![
                LogStatus::Success,
                LogStatus::Failure,
                LogStatus::Success,
                LogStatus::Failure,
                LogStatus::Success
            ],
            statuses
        );
        assert_eq!(
            "[FAILED] Rua B, 10, 57000-000: not found",
            report.log[1].to_string()
        );
        assert_eq!(
            "[FAILED] Rua D, 10, 57000-000: transport error: HTTP status 500",
            report.log[3].to_string()
        );
        assert_eq!(
            Stats {
                total: 5,
                successful: 3
            },
            report.stats
        );
        assert_eq!(2, report.stats.failed());
    }

    #[test]
    fn failed_records_reduce_the_success_rate() {
        let report = Report::aggregate(&[
            resolved("Rua A", 1.0, 1.0),
            failed("Rua B", FailureReason::NotFound),
        ]);
        assert_eq!(Some(0.5), report.stats.success_rate());
        assert_eq!(
            "total: 2, successful: 1, failed: 1, success rate: 50.00%",
            report.stats.to_string()
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let outcomes = vec![
            resolved("Rua A", 1.0, 1.0),
            failed("Rua B", FailureReason::NotFound),
        ];
        assert_eq!(Report::aggregate(&outcomes), Report::aggregate(&outcomes));
    }

    #[test]
    fn success_rate_without_records() {
        let stats = Report::aggregate(&[]).stats;
        assert_eq!(None, stats.success_rate());
        assert_eq!(
            "total: 0, successful: 0, failed: 0, success rate: n/a",
            stats.to_string()
        );
    }

    #[test]
    fn failed_never_underflows() {
        let stats = Stats {
            total: 0,
            successful: 1,
        };
        assert_eq!(0, stats.failed());
    }
}
