use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::http::RequestOutcome;

/// Running counts owned by the aggregator task.
#[derive(Debug, Default)]
pub(super) struct StatusTally {
    total_requests: u64,
    status_counts: BTreeMap<u16, u64>,
}

impl StatusTally {
    pub(super) fn record(&mut self, outcome: RequestOutcome) {
        self.total_requests = self.total_requests.saturating_add(1);
        let count = self.status_counts.entry(outcome.status()).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub(super) const fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub(super) fn finish(self, elapsed: Duration) -> RunResult {
        RunResult {
            total_requests: self.total_requests,
            elapsed,
            status_counts: self.status_counts,
        }
    }
}

/// Final statistics of a completed run.
///
/// `total_requests` counts attempts, failed or not, and always equals the sum
/// of `status_counts`. Transport failures are keyed under status `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    total_requests: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    elapsed: Duration,
    status_counts: BTreeMap<u16, u64>,
}

impl RunResult {
    /// Builds a result from per-status counts; the total is derived from them.
    #[must_use]
    pub fn from_counts(status_counts: BTreeMap<u16, u64>, elapsed: Duration) -> Self {
        let total_requests = status_counts
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count));
        Self {
            total_requests,
            elapsed,
            status_counts,
        }
    }

    #[must_use]
    pub const fn total_requests(&self) -> u64 {
        self.total_requests
    }

    /// Wall-clock length of the run, including the tail of in-flight requests.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub const fn status_counts(&self) -> &BTreeMap<u16, u64> {
        &self.status_counts
    }

    #[must_use]
    pub fn count_for(&self, outcome: RequestOutcome) -> u64 {
        self.status_counts
            .get(&outcome.status())
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn failed_requests(&self) -> u64 {
        self.count_for(RequestOutcome::TRANSPORT_FAILURE)
    }

    /// Average throughput over `elapsed`, scaled by 100.
    #[must_use]
    pub fn requests_per_second_x100(&self) -> u64 {
        let elapsed_ms = self.elapsed.as_millis().max(1);
        let scaled = u128::from(self.total_requests)
            .saturating_mul(100_000)
            .checked_div(elapsed_ms)
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }

    /// Share of all attempts that ended with `status`, as a percentage scaled by 100.
    #[must_use]
    pub fn share_x100(&self, status: u16) -> u64 {
        let count = self.status_counts.get(&status).copied().unwrap_or(0);
        let scaled = u128::from(count)
            .saturating_mul(10_000)
            .checked_div(u128::from(self.total_requests))
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }
}

fn serialize_millis<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
}
