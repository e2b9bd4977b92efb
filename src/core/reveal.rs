// One-shot scroll reveal bookkeeping.
//
// A block starts hidden and is revealed the first time a visibility report
// reaches the threshold. The transition is irreversible; every later report
// is ignored.

use super::constants::{
    REVEAL_DURATION_SEC, REVEAL_OFFSET_PX, REVEAL_RATIO_EPSILON, REVEAL_THRESHOLD,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

/// Returned once, when the block should start its enter animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    pub delay_sec: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    state: RevealState,
    threshold: f64,
    delay_sec: f64,
}

impl Reveal {
    pub fn new(delay_sec: f64) -> Self {
        Self::with_threshold(delay_sec, REVEAL_THRESHOLD)
    }

    pub fn with_threshold(delay_sec: f64, threshold: f64) -> Self {
        Self {
            state: RevealState::Unrevealed,
            threshold: threshold.clamp(0.0, 1.0),
            delay_sec: sanitize_delay(delay_sec),
        }
    }

    #[inline]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed a visible-area ratio in `[0, 1]`.
    pub fn report(&mut self, ratio: f64) -> Option<RevealTrigger> {
        self.report_entry(ratio, true)
    }

    /// Feed an observer entry. A ratio within `REVEAL_RATIO_EPSILON` under
    /// the threshold counts as crossing it, as long as the entry says the
    /// block is intersecting.
    pub fn report_entry(&mut self, ratio: f64, is_intersecting: bool) -> Option<RevealTrigger> {
        if self.state == RevealState::Revealed || !is_intersecting || !ratio.is_finite() {
            return None;
        }
        if ratio + REVEAL_RATIO_EPSILON >= self.threshold {
            self.state = RevealState::Revealed;
            Some(RevealTrigger {
                delay_sec: self.delay_sec,
            })
        } else {
            None
        }
    }
}

#[inline]
fn sanitize_delay(delay_sec: f64) -> f64 {
    if delay_sec.is_finite() && delay_sec > 0.0 {
        delay_sec
    } else {
        0.0
    }
}

/// Parse a `data-reveal-delay` attribute (seconds). Anything unusable is 0.
pub fn parse_delay(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .map(sanitize_delay)
        .unwrap_or(0.0)
}

pub fn hidden_style() -> String {
    format!("opacity:0;transform:translateY({}px)", REVEAL_OFFSET_PX)
}

pub fn visible_style(delay_sec: f64) -> String {
    format!(
        "opacity:1;transform:translateY(0px);transition:opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s",
        d = REVEAL_DURATION_SEC,
        delay = sanitize_delay(delay_sec),
    )
}
