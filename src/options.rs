use crate::backoff::BackoffSchedule;
use crate::call::DEFAULT_TIMEOUT_MS;

/// Configures HTTP timeout, retry, and warm-up behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Waits applied before successive route-call attempts.
    pub retry: BackoffSchedule,
    /// Maximum number of probes per warm-up round.
    pub warmup_attempts: usize,
    /// Waits between warm-up probes, clamped to the last entry.
    pub warmup_backoff: BackoffSchedule,
    /// Minimum quiet period between on-demand probes, in milliseconds.
    pub warmup_cooldown_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry: BackoffSchedule::cold_start(),
            warmup_attempts: 5,
            warmup_backoff: BackoffSchedule::from_millis([1_500, 3_000, 6_000]),
            warmup_cooldown_ms: 60_000,
        }
    }
}
