//! Onboarding flow core — state snapshot, render models, and the autoplay
//! timeline orchestrator.
//!
//! The orchestrator owns a single [`OnboardingState`] snapshot and drives a
//! cancellable timed sequence over it: cards reveal one by one, hold
//! expanded, then collapse with a bounded overlap into the next entrance.
//! Manual selection and refresh merge into the same single-writer state.

pub mod model;
pub mod orchestrator;
pub mod state;

pub use model::{CardModel, CtaModel, Timing};
pub use orchestrator::FlowOrchestrator;
pub use state::{CardPhase, OnboardingState};
