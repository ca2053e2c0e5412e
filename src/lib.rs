//! Runtime for the portfolio page: section navigation with accessibility
//! bookkeeping, image fallbacks, and the animated canvas background.
//!
//! The document-independent logic lives in the top-level modules and builds on
//! any target. The bindings that touch the page only exist on wasm32.

pub mod config;
pub mod fallback;
pub mod motion;
pub mod sections;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{BackgroundRenderer, ImageFallbacks, Portfolio, SectionController};

pub use config::{NavControl, PageConfig, PlaceholderRule, SectionSpec};
