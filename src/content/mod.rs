//! Remote content acquisition — gateway, single-slot cache, and mapping.
//!
//! The gateway fetches the raw content document, the cache memoizes exactly
//! one copy of it, and the mapper turns it into the render-ready values the
//! flow orchestrator consumes.

pub mod cache;
pub mod gateway;
pub mod mapper;
pub mod model;

pub use cache::ContentCache;
pub use gateway::{ContentGateway, HttpContentGateway};
pub use mapper::{MappedContent, derive_timing, map_document};
pub use model::{ContentCard, ContentDocument, ContentResponse, CtaBlock};
