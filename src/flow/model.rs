//! Render-ready models for the onboarding carousel.

use std::time::Duration;

use crate::color::Color;

/// One education card with pre-parsed colors.
///
/// `id` is the card's 0-based position in the source list; it stays stable
/// for the lifetime of one content document and doubles as the index into
/// the state's collapsed/expanded bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: usize,
    pub image_url: String,
    pub collapsed_title: String,
    pub expanded_title: String,
    pub background: Color,
    pub stroke_start: Color,
    pub stroke_end: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
}

/// Call-to-action descriptor shown after the timeline completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaModel {
    pub label: String,
    pub deeplink: Option<String>,
    pub background: Color,
    pub text_color: Color,
    pub stroke: Color,
    pub icon: Option<String>,
    pub order: Option<String>,
}

/// Animation timing in milliseconds. Invariant: `overlap <= collapse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay before the first card reveals.
    pub intro: u64,
    /// Card entrance animation length.
    pub enter: u64,
    /// How long an expanded card stays before collapsing.
    pub hold: u64,
    /// Collapse animation length.
    pub collapse: u64,
    /// How much of the collapse runs concurrently with the next entrance.
    pub overlap: u64,
}

impl Timing {
    /// Wait before the first reveal.
    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro)
    }

    /// Wait while a card enters and holds expanded.
    pub fn reveal_hold(&self) -> Duration {
        Duration::from_millis(self.enter + self.hold)
    }

    /// Wait between starting a collapse and revealing the next card.
    pub fn handoff_gap(&self) -> Duration {
        Duration::from_millis(self.collapse.saturating_sub(self.overlap))
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            intro: 400,
            enter: 900,
            hold: 2000,
            collapse: 600,
            overlap: 220,
        }
    }
}
