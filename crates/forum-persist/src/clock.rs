use chrono::{DateTime, Duration, DurationRound, Utc};

/// Hands out creation timestamps that never go backwards.
///
/// Timestamps are truncated to milliseconds, the precision kept by every
/// backend and by the wire format. If the wall clock steps back, the last
/// issued value is repeated.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: Option<DateTime<Utc>>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> DateTime<Utc> {
        self.tick_from(Utc::now())
    }

    fn tick_from(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let now = now.duration_trunc(Duration::milliseconds(1)).unwrap_or(now);
        let next = match self.last {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last = Some(next);
        next
    }
}
