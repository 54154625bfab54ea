//! The observable onboarding UI-state snapshot.

use std::collections::BTreeSet;

use crate::color::{Color, palette};

use super::model::{CardModel, CtaModel, Timing};

/// Visible phase of a single card within the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Not yet entered the visible sequence.
    Hidden,
    /// Revealed and currently expanded.
    Expanded,
    /// Revealed and collapsed into the stack.
    Collapsed,
}

/// One immutable snapshot of everything the presentation layer renders.
///
/// Owned exclusively by the orchestrator; consumers receive whole snapshots
/// through a watch channel and never observe partial updates.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingState {
    /// Initial full-screen load (no content yet).
    pub loading: bool,
    /// Re-fetch while stale content stays visible.
    pub refreshing: bool,
    pub toolbar_title: String,
    pub toolbar_icon: Option<String>,
    pub intro_title: String,
    pub intro_subtitle: String,
    pub intro_subtitle_icon: Option<String>,
    pub cards: Vec<CardModel>,
    /// How many cards have entered the sequence. `0 <= revealed_count <= cards.len()`.
    pub revealed_count: usize,
    /// Indices of revealed cards currently collapsed; subset of `0..cards.len()`.
    pub collapsed: BTreeSet<usize>,
    /// Index of the card currently expanded, if any.
    pub expanded: Option<usize>,
    pub background_start: Color,
    pub background_end: Color,
    pub show_cta: bool,
    pub cta: Option<CtaModel>,
    pub cta_animation: Option<String>,
    pub timing: Timing,
    pub error: Option<String>,
    pub autoplay_completed: bool,
}

impl OnboardingState {
    /// Visible phase of the card at `index`.
    pub fn card_phase(&self, index: usize) -> CardPhase {
        if index >= self.revealed_count {
            CardPhase::Hidden
        } else if self.collapsed.contains(&index) {
            CardPhase::Collapsed
        } else {
            CardPhase::Expanded
        }
    }

    /// Whether any content has been applied yet.
    pub fn has_content(&self) -> bool {
        !self.cards.is_empty()
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            loading: true,
            refreshing: false,
            toolbar_title: "Onboarding".to_string(),
            toolbar_icon: None,
            intro_title: String::new(),
            intro_subtitle: String::new(),
            intro_subtitle_icon: None,
            cards: Vec::new(),
            revealed_count: 0,
            collapsed: BTreeSet::new(),
            expanded: None,
            background_start: palette::SCREEN_BACKGROUND,
            background_end: palette::SCREEN_BACKGROUND,
            show_cta: false,
            cta: None,
            cta_animation: None,
            timing: Timing::default(),
            error: None,
            autoplay_completed: false,
        }
    }
}
