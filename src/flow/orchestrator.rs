//! Flow orchestrator — owns the UI-state snapshot and drives the autoplay
//! timeline.
//!
//! Single-writer model: every mutation goes through the watch sender, so
//! subscribers only ever observe whole snapshots. The autoplay timeline runs
//! as one tracked background task; starting a new one (or refreshing) aborts
//! the previous task and awaits its termination first, so a cancelled
//! sequence can never land a late write over a newer one.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, warn};

use crate::content::{ContentCache, ContentDocument, map_document};

use super::model::Timing;
use super::state::OnboardingState;

/// Error message shown when a failure carries no message of its own.
const GENERIC_ERROR: &str = "Something went wrong";

/// Coordinates content loading and the card reveal/collapse timeline.
pub struct FlowOrchestrator {
    cache: Arc<ContentCache>,
    state: watch::Sender<OnboardingState>,
    /// Current autoplay timeline task, if any.
    autoplay: Mutex<Option<JoinHandle<()>>>,
    /// Pending load-and-apply task from the most recent `refresh`.
    load: Mutex<Option<JoinHandle<()>>>,
}

impl FlowOrchestrator {
    /// Create an orchestrator over the given content cache.
    pub fn new(cache: Arc<ContentCache>) -> Arc<Self> {
        let (state, _) = watch::channel(OnboardingState::default());
        Arc::new(Self {
            cache,
            state,
            autoplay: Mutex::new(None),
            load: Mutex::new(None),
        })
    }

    /// Subscribe to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<OnboardingState> {
        self.state.subscribe()
    }

    /// Stream adapter over [`subscribe`](Self::subscribe).
    pub fn state_stream(&self) -> WatchStream<OnboardingState> {
        WatchStream::new(self.subscribe())
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> OnboardingState {
        self.state.borrow().clone()
    }

    /// Re-fetch content and restart the autoplay timeline.
    ///
    /// Cancels any pending load and any running timeline, flips the
    /// loading/refreshing flag depending on whether stale content is
    /// present, and applies the result off the caller's path. On failure the
    /// existing content stays untouched and only the error message changes.
    pub async fn refresh(self: &Arc<Self>) {
        self.cancel_load().await;
        self.cancel_autoplay().await;

        self.state.send_modify(|state| {
            let has_content = state.has_content();
            state.loading = !has_content;
            state.refreshing = has_content;
            state.error = None;
        });

        let this = Arc::clone(self);
        let handle = tokio::spawn(async move {
            match this.cache.load().await {
                Ok(document) => this.apply_document(&document).await,
                Err(error) => {
                    warn!(%error, "content load failed");
                    this.state.send_modify(|state| {
                        state.loading = false;
                        state.refreshing = false;
                        let message = error.to_string();
                        state.error = Some(if message.is_empty() {
                            GENERIC_ERROR.to_string()
                        } else {
                            message
                        });
                    });
                }
            }
        });
        *self.load.lock().await = Some(handle);
    }

    /// Manually select a card: collapse everything else, keep the chosen one
    /// expanded, and finish the timeline immediately. Out-of-range indices
    /// are ignored.
    pub async fn on_card_selected(&self, index: usize) {
        let card_count = self.state.borrow().cards.len();
        if index >= card_count {
            debug!(index, card_count, "card selection out of range");
            return;
        }

        self.cancel_autoplay().await;

        self.state.send_modify(|state| {
            if let Some(card) = state.cards.get(index) {
                state.background_start = card.gradient_start;
                state.background_end = card.gradient_end;
            }
            state.collapsed = (0..state.cards.len()).filter(|i| *i != index).collect();
            state.expanded = Some(index);
            state.revealed_count = state.cards.len();
            state.autoplay_completed = true;
            state.loading = false;
            state.refreshing = false;
        });
        debug!(index, "card selected, timeline finished manually");
    }

    /// Mark the timeline complete without touching the card states. Used
    /// when the presentation layer finishes the sequence on its own.
    pub fn on_autoplay_finished(&self) {
        self.state.send_modify(|state| state.autoplay_completed = true);
    }

    /// Cancel all background work. Call on host teardown.
    pub async fn shutdown(&self) {
        self.cancel_load().await;
        self.cancel_autoplay().await;
    }

    /// Apply a freshly loaded document: replace all content wholesale, reset
    /// the sequence bookkeeping, and start a new timeline.
    async fn apply_document(self: &Arc<Self>, document: &ContentDocument) {
        let mapped = map_document(document);
        let card_count = mapped.cards.len();
        let timing = mapped.timing;
        let (background_start, background_end) = match mapped.cards.first() {
            Some(card) => (card.gradient_start, card.gradient_end),
            None => (
                crate::color::palette::SCREEN_GRADIENT_START,
                crate::color::palette::SCREEN_GRADIENT_END,
            ),
        };

        info!(cards = card_count, "applying content document");
        self.state.send_modify(|state| {
            state.loading = false;
            state.refreshing = false;
            if !mapped.toolbar_title.trim().is_empty() {
                state.toolbar_title = mapped.toolbar_title;
            }
            state.toolbar_icon = mapped.toolbar_icon;
            state.intro_title = mapped.intro_title;
            state.intro_subtitle = mapped.intro_subtitle;
            state.intro_subtitle_icon = mapped.intro_subtitle_icon;
            state.cards = mapped.cards;
            state.revealed_count = 0;
            state.collapsed.clear();
            state.expanded = None;
            state.background_start = background_start;
            state.background_end = background_end;
            state.show_cta = !mapped.cta.label.trim().is_empty();
            state.cta = Some(mapped.cta);
            state.cta_animation = mapped.cta_animation;
            state.timing = timing;
            state.error = None;
            state.autoplay_completed = false;
        });

        self.start_autoplay(card_count, timing).await;
    }

    /// Replace the running timeline task with a fresh one.
    async fn start_autoplay(self: &Arc<Self>, card_count: usize, timing: Timing) {
        let mut autoplay = self.autoplay.lock().await;
        if let Some(handle) = autoplay.take() {
            handle.abort();
            let _ = handle.await;
        }

        if card_count == 0 {
            self.state
                .send_modify(|state| state.autoplay_completed = true);
            debug!("no cards, timeline completes immediately");
            return;
        }

        debug!(cards = card_count, "starting autoplay timeline");
        let this = Arc::clone(self);
        *autoplay = Some(tokio::spawn(async move {
            this.run_autoplay(card_count, timing).await;
        }));
    }

    /// The timed reveal/collapse sequence. Every mutation is synchronous
    /// between sleeps, so aborting the task at a sleep discards the rest of
    /// the sequence atomically.
    async fn run_autoplay(&self, card_count: usize, timing: Timing) {
        if timing.intro > 0 {
            tokio::time::sleep(timing.intro_delay()).await;
        }

        for index in 0..card_count {
            self.state.send_modify(|state| {
                if let Some(card) = state.cards.get(index) {
                    state.background_start = card.gradient_start;
                    state.background_end = card.gradient_end;
                }
                state.revealed_count = state.revealed_count.max(index + 1);
                state.collapsed.remove(&index);
                state.expanded = Some(index);
            });

            if timing.enter + timing.hold > 0 {
                tokio::time::sleep(timing.reveal_hold()).await;
            }

            let last = index == card_count - 1;
            if last {
                self.state.send_modify(|state| {
                    state.collapsed.remove(&index);
                    state.expanded = Some(index);
                    state.autoplay_completed = true;
                });
            } else {
                self.state.send_modify(|state| {
                    state.collapsed.insert(index);
                    state.expanded = Some(index);
                });

                if timing.collapse > 0 && !timing.handoff_gap().is_zero() {
                    tokio::time::sleep(timing.handoff_gap()).await;
                }
            }
        }
        debug!("autoplay timeline complete");
    }

    /// Abort the running timeline and wait for it to terminate.
    async fn cancel_autoplay(&self) {
        let mut autoplay = self.autoplay.lock().await;
        if let Some(handle) = autoplay.take() {
            handle.abort();
            let _ = handle.await;
            debug!("autoplay timeline cancelled");
        }
    }

    /// Abort any pending load-and-apply task and wait for it to terminate.
    async fn cancel_load(&self) {
        let mut load = self.load.lock().await;
        if let Some(handle) = load.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}
