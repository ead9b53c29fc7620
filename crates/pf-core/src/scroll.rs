pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
pub const ELEVATION_OFFSET: f64 = 8.0;

pub const SHOW_CLASS: &str = "show";
pub const ELEVATED_CLASS: &str = "elevated";

/// Visual cues derived from the vertical scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollCues {
    pub back_to_top: bool,
    pub elevated: bool,
}

impl ScrollCues {
    pub fn at(offset: f64) -> Self {
        Self {
            back_to_top: offset > BACK_TO_TOP_OFFSET,
            elevated: offset > ELEVATION_OFFSET,
        }
    }
}

/// Remembers the last cues written so repeated scroll events at the same
/// side of both thresholds produce no DOM writes.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    last: Option<ScrollCues>,
}

impl ScrollTracker {
    pub fn update(&mut self, offset: f64) -> Option<ScrollCues> {
        let cues = ScrollCues::at(offset);
        if self.last == Some(cues) {
            return None;
        }
        self.last = Some(cues);
        Some(cues)
    }
}
