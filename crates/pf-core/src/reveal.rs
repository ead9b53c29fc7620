//! One-shot reveal animations: counters, skill bars and section fade-ins.

use tracing::debug;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const SKILL_DELAY_MS: u32 = 200;
pub const SKILL_THRESHOLD: f64 = 0.5;

pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const FADE_TAG_CLASS: &str = "animate-on-scroll";
pub const FADE_PLAYED_CLASS: &str = "animated";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Playing,
    Done,
}

/// Reveal state for every element observed by one detector, by index.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![RevealState::Pending; len],
        }
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Claims the element for playback. Only a pending element can start, so
    /// an element that scrolls back into view is ignored.
    pub fn begin(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Pending) => {
                *state = RevealState::Playing;
                debug!(index, "reveal started");
                true
            }
            _ => false,
        }
    }

    pub fn finish(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            *state = RevealState::Done;
        }
    }

    /// Effects without a running phase go straight to `Done`.
    pub fn play_once(&mut self, index: usize) -> bool {
        if !self.begin(index) {
            return false;
        }
        self.finish(index);
        true
    }
}

/// Reads a `data-target` value the way `parseInt` would: leading
/// whitespace, an optional sign, then the longest run of digits. Anything
/// unreadable counts as zero.
pub fn parse_target(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

/// Linear count from zero to `target`, one step per tick.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self::with_timing(target, COUNTER_DURATION_MS, COUNTER_TICK_MS)
    }

    pub fn with_timing(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        Self {
            target,
            current: 0.0,
            increment: target as f64 / steps,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one tick. Displayed values are floored and the final frame is
    /// clamped to the exact target.
    pub fn tick(&mut self) -> CounterFrame {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.done = true;
            }
        }
        CounterFrame {
            value: self.current.floor() as i64,
            done: self.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_reaches_exact_target_monotonically() {
        let mut counter = CounterAnimation::new(120);
        let mut previous = 0;
        let mut frames = 0;
        loop {
            let frame = counter.tick();
            frames += 1;
            assert!(frame.value >= previous);
            assert!(frame.value <= 120);
            previous = frame.value;
            if frame.done {
                assert_eq!(frame.value, 120);
                break;
            }
            assert!(frames < 1_000, "counter never finished");
        }
        assert!((125..=126).contains(&frames));
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(0);
        assert_eq!(counter.tick(), CounterFrame { value: 0, done: true });
        assert!(counter.is_done());
    }

    #[test]
    fn parse_target_mirrors_leading_integer_rules() {
        assert_eq!(parse_target(Some("120")), 120);
        assert_eq!(parse_target(Some("  42+")), 42);
        assert_eq!(parse_target(Some("-7")), -7);
        assert_eq!(parse_target(Some("15k")), 15);
        assert_eq!(parse_target(Some("abc")), 0);
        assert_eq!(parse_target(None), 0);
    }

    #[test]
    fn elements_play_at_most_once() {
        let mut set = RevealSet::new(2);
        assert!(set.begin(0));
        assert!(!set.begin(0));
        assert_eq!(set.state(0), Some(RevealState::Playing));

        set.finish(0);
        for _ in 0..5 {
            assert!(!set.begin(0));
        }
        assert_eq!(set.state(0), Some(RevealState::Done));

        assert!(set.play_once(1));
        assert!(!set.play_once(1));
        assert!(!set.begin(7));
    }
}
