/// Result of a single request attempt, reduced to its status code.
///
/// Transport-level failures of every kind (DNS, refused connections, TLS,
/// timeouts, broken bodies) collapse into [`RequestOutcome::TRANSPORT_FAILURE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestOutcome(u16);

impl RequestOutcome {
    /// Status code reserved for attempts that never produced a response.
    pub const TRANSPORT_FAILURE: Self = Self(0);

    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        Self(status)
    }

    #[must_use]
    pub const fn status(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_failure(self) -> bool {
        self.0 == Self::TRANSPORT_FAILURE.0
    }
}

impl From<reqwest::StatusCode> for RequestOutcome {
    fn from(status: reqwest::StatusCode) -> Self {
        Self(status.as_u16())
    }
}
