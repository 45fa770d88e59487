use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time for screen timers.
pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A minimum-elapsed-time gate, checked synchronously each frame.
pub struct Cooldown {
    clock: Rc<dyn Clock>,
    duration: Duration,
    started: Option<Instant>,
}

impl Cooldown {
    pub fn new(clock: Rc<dyn Clock>, duration: Duration) -> Self {
        Cooldown { clock, duration, started: None }
    }

    pub fn reset(&mut self) {
        self.started = Some(self.clock.now());
    }

    /// A cooldown that was never reset is finished.
    pub fn is_finished(&self) -> bool {
        match self.started {
            Some(started) => self.clock.now().duration_since(started) >= self.duration,
            None => true,
        }
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::cell::Cell;
    use std::time::{Duration, Instant};

    use super::Clock;

    /// Clock that only moves when told to.
    pub struct ManualClock {
        base: Instant,
        offset: Cell<Duration>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            ManualClock { base: Instant::now(), offset: Cell::new(Duration::ZERO) }
        }

        pub fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }

        pub fn advance_ms(&self, ms: u64) {
            self.advance(Duration::from_millis(ms));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + self.offset.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cooldown_is_finished() {
        let clock = Rc::new(ManualClock::new());
        let cooldown = Cooldown::new(clock, Duration::from_millis(200));
        assert!(cooldown.is_finished());
    }

    #[test]
    fn reset_gates_until_duration_elapses() {
        let clock = Rc::new(ManualClock::new());
        let mut cooldown = Cooldown::new(clock.clone(), Duration::from_millis(200));
        cooldown.reset();
        assert!(!cooldown.is_finished());
        clock.advance_ms(199);
        assert!(!cooldown.is_finished());
        clock.advance_ms(1);
        assert!(cooldown.is_finished());

        cooldown.reset();
        assert!(!cooldown.is_finished());
    }
}
