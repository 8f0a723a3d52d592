use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::backoff::BackoffSchedule;
use crate::call::{call_with_timeout, RequestSpec};

/// Where a session stands in the wake-the-backend lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WarmupPhase {
    /// No probe has run yet.
    #[default]
    Cold,
    /// A probe is in flight or the last round is still undecided.
    Probing,
    /// The backend answered a probe.
    Warm,
    /// Every probe of the last round failed.
    Unreachable,
}

/// Per-session probe bookkeeping.
///
/// Create one at session start and pass it into the probe functions. The
/// readiness signal is advisory — a warm backend can go cold again, so
/// real operations still run under their own retry schedule.
#[derive(Clone, Debug, Default)]
pub struct WarmupState {
    phase: WarmupPhase,
    last_probe_at: Option<Instant>,
}

impl WarmupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WarmupPhase {
        self.phase
    }

    pub fn is_warm(&self) -> bool {
        self.phase == WarmupPhase::Warm
    }

    /// When the most recent probe was issued, if any.
    pub fn last_probe_at(&self) -> Option<Instant> {
        self.last_probe_at
    }

    fn record_probe(&mut self) {
        self.phase = WarmupPhase::Probing;
        self.last_probe_at = Some(Instant::now());
    }
}

/// Probes the backend until it answers, or gives up.
///
/// Issues up to `max_attempts` probes, stopping at the first 2xx answer.
/// Waits `backoff.delay_clamped(attempt)` between attempts. Returns
/// whether the backend answered; the same signal lands in `state`.
/// Never errors — callers decide what an unreachable backend means.
pub async fn wait_for_warmup(
    http: &reqwest::Client,
    probe: &RequestSpec,
    max_attempts: usize,
    backoff: &BackoffSchedule,
    state: &mut WarmupState,
) -> bool {
    for attempt in 0..max_attempts {
        state.record_probe();
        if call_with_timeout(http, probe).await.is_ok() {
            state.phase = WarmupPhase::Warm;
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt, "backend answered warm-up probe");
            return true;
        }

        if attempt + 1 < max_attempts {
            let delay = backoff.delay_clamped(attempt);
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "probe failed, waiting");
            if !delay.is_zero() {
                sleep(delay).await;
            }
        }
    }

    state.phase = WarmupPhase::Unreachable;
    false
}

/// Issues a single probe unless one already ran within `cooldown`.
///
/// Returns `None` when the probe was skipped, `Some(is_warm)` otherwise.
/// UI layers can call this on every interaction without flooding the
/// backend.
pub async fn probe_if_cooled_down(
    http: &reqwest::Client,
    probe: &RequestSpec,
    cooldown: Duration,
    state: &mut WarmupState,
) -> Option<bool> {
    if let Some(last) = state.last_probe_at {
        if last.elapsed() < cooldown {
            return None;
        }
    }

    state.record_probe();
    state.phase = match call_with_timeout(http, probe).await {
        Ok(_) => WarmupPhase::Warm,
        Err(_) => WarmupPhase::Unreachable,
    };
    Some(state.is_warm())
}

#[cfg(test)]
mod tests {
    use super::{WarmupPhase, WarmupState};

    #[test]
    fn fresh_state_is_cold() {
        let state = WarmupState::new();
        assert_eq!(state.phase(), WarmupPhase::Cold);
        assert!(!state.is_warm());
        assert!(state.last_probe_at().is_none());
    }

    #[test]
    fn recording_a_probe_enters_probing_and_stamps_time() {
        let mut state = WarmupState::new();
        state.record_probe();
        assert_eq!(state.phase(), WarmupPhase::Probing);
        assert!(state.last_probe_at().is_some());
    }
}
