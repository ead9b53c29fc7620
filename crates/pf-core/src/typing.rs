use pf_types::PortfolioConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingSchedule {
    pub delay_ms: u32,
    pub speed_ms: u32,
}

impl TypingSchedule {
    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self {
            delay_ms: config.typing_delay_ms,
            speed_ms: config.typing_speed_ms,
        }
    }
}

impl Default for TypingSchedule {
    fn default() -> Self {
        Self::from_config(&PortfolioConfig::default())
    }
}

/// Reveals a caption one character at a time. Runs once; there is no loop
/// back to the start.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    shown_bytes: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_bytes: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown_bytes >= self.text.len()
    }

    pub fn shown(&self) -> &str {
        &self.text[..self.shown_bytes]
    }

    /// Reveals the next character and returns the visible prefix, or `None`
    /// once the whole caption is visible.
    pub fn next_frame(&mut self) -> Option<&str> {
        let next = self.text[self.shown_bytes..].chars().next()?;
        self.shown_bytes += next.len_utf8();
        Some(self.shown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_frame() {
        let mut typewriter = Typewriter::new("Hi!");
        assert_eq!(typewriter.shown(), "");
        assert_eq!(typewriter.next_frame(), Some("H"));
        assert_eq!(typewriter.next_frame(), Some("Hi"));
        assert_eq!(typewriter.next_frame(), Some("Hi!"));
        assert!(typewriter.is_done());
        assert_eq!(typewriter.next_frame(), None);
        assert_eq!(typewriter.shown(), "Hi!");
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        let mut typewriter = Typewriter::new("né🙂");
        let frames: Vec<String> =
            std::iter::from_fn(|| typewriter.next_frame().map(str::to_owned)).collect();
        assert_eq!(frames, vec!["n", "né", "né🙂"]);
    }

    #[test]
    fn default_schedule_uses_fast_variant() {
        assert_eq!(
            TypingSchedule::default(),
            TypingSchedule {
                delay_ms: 500,
                speed_ms: 50,
            }
        );
    }
}
