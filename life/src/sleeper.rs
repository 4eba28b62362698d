use std::time::{Duration, Instant};

/// Paces a loop so consecutive [`Sleeper::sleep`] calls are at least `target_delta_time` apart.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps for whatever is left of the target delta since the previous call.
    /// Returns whether any sleeping happened.
    pub fn sleep(&mut self) -> bool {
        let slept = if let Some(remaining) = self.remaining() {
            spin_sleep::sleep(remaining);
            true
        } else {
            false
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    fn remaining(&self) -> Option<Duration> {
        // Never slept yet, so there's nothing to wait for.
        let last_instant = self.last_instant?;

        self.target_delta_time
            .checked_sub(last_instant.elapsed())
            .filter(|remaining| !remaining.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_does_not_sleep() {
        let mut sleeper = Sleeper::new(Duration::from_secs(60));

        assert!(!sleeper.sleep());
        assert!(sleeper.last_instant.is_some());
    }

    #[test]
    fn waits_out_the_remaining_delta() {
        let target = Duration::from_millis(30);
        let mut sleeper = Sleeper::new(target);
        sleeper.sleep();

        let start = Instant::now();
        assert!(sleeper.sleep());
        assert!(start.elapsed() >= target / 2);
    }

    #[test]
    fn zero_delta_never_sleeps() {
        let mut sleeper = Sleeper::new(Duration::ZERO);
        sleeper.sleep();

        assert!(!sleeper.sleep());
    }
}
