use std::time::Duration;

/// Ordered sequence of waits applied before successive call attempts.
///
/// Entry `i` is the wait before attempt `i`; the first entry is zero by
/// convention so the initial attempt starts immediately. The schedule
/// length is also the attempt budget: a three-entry schedule allows at
/// most three calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackoffSchedule {
    delays: Vec<Duration>,
}

impl BackoffSchedule {
    /// Builds a schedule from explicit durations.
    pub fn new(delays: impl Into<Vec<Duration>>) -> Self {
        Self {
            delays: delays.into(),
        }
    }

    /// Builds a schedule from waits given in milliseconds.
    pub fn from_millis<I>(millis: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            delays: millis.into_iter().map(Duration::from_millis).collect(),
        }
    }

    /// Single attempt, no wait.
    pub fn immediate() -> Self {
        Self::from_millis([0])
    }

    /// Patience schedule for a free-tier backend waking from sleep.
    ///
    /// Five attempts spread over roughly 22 seconds, matching how long a
    /// suspended host typically takes to come back.
    pub fn cold_start() -> Self {
        Self::from_millis([0, 1_500, 3_000, 6_000, 12_000])
    }

    /// Number of attempts this schedule allows.
    pub fn attempts(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Wait before attempt `attempt`, or `None` past the end.
    pub fn delay(&self, attempt: usize) -> Option<Duration> {
        self.delays.get(attempt).copied()
    }

    /// Wait before attempt `attempt`, clamped to the last entry past the
    /// end. Zero when the schedule is empty.
    pub fn delay_clamped(&self, attempt: usize) -> Duration {
        self.delays
            .get(attempt)
            .or_else(|| self.delays.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::BackoffSchedule;
    use std::time::Duration;

    #[test]
    fn from_millis_preserves_order() {
        let schedule = BackoffSchedule::from_millis([0, 100, 200]);
        assert_eq!(schedule.attempts(), 3);
        assert_eq!(schedule.delay(0), Some(Duration::ZERO));
        assert_eq!(schedule.delay(1), Some(Duration::from_millis(100)));
        assert_eq!(schedule.delay(2), Some(Duration::from_millis(200)));
        assert_eq!(schedule.delay(3), None);
    }

    #[test]
    fn clamped_lookup_repeats_last_entry() {
        let schedule = BackoffSchedule::from_millis([0, 50]);
        assert_eq!(schedule.delay_clamped(1), Duration::from_millis(50));
        assert_eq!(schedule.delay_clamped(7), Duration::from_millis(50));
    }

    #[test]
    fn empty_schedule_clamps_to_zero() {
        let schedule = BackoffSchedule::new(Vec::new());
        assert!(schedule.is_empty());
        assert_eq!(schedule.delay_clamped(0), Duration::ZERO);
    }

    #[test]
    fn cold_start_begins_with_an_immediate_attempt() {
        let schedule = BackoffSchedule::cold_start();
        assert_eq!(schedule.attempts(), 5);
        assert_eq!(schedule.delay(0), Some(Duration::ZERO));
        assert_eq!(schedule.delay(4), Some(Duration::from_millis(12_000)));
    }

    #[test]
    fn immediate_is_one_attempt() {
        let schedule = BackoffSchedule::immediate();
        assert_eq!(schedule.attempts(), 1);
        assert_eq!(schedule.delay(0), Some(Duration::ZERO));
    }
}
