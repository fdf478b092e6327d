//! Presentation Layer
//!
//! This layer handles:
//! - Output formatting (text/JSON)
//! - Display-only rounding, currency formatting and bar clamping
//!
//! ## Structure
//!
//! - `format` - Currency, percentages, progress bars, tier colors
//! - `output` - Renderers for every report view

pub mod format;
pub mod output;

pub use output::{create_renderer, JsonRenderer, ReportRenderer, TextRenderer};
