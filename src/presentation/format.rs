//! Display formatting
//!
//! Rounding, currency, bars and colors. The engine hands over raw numbers;
//! everything lossy happens here.

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::domain::value_objects::PacingTier;

/// Semantic colors
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const DIM: Color = Color::DarkGrey;
}

/// Whole euros with `.` thousands separators, e.g. `12.345 €`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{} €", grouped)
    } else {
        format!("{} €", grouped)
    }
}

/// One decimal place, e.g. `40.0%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Progress bar clamped to 0-100% regardless of the raw value
pub fn progress_bar(percentage: f64, width: usize, unicode: bool) -> String {
    let clamped = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let (full, empty) = if unicode { ("█", "░") } else { ("#", "-") };
    format!("[{}{}]", full.repeat(filled), empty.repeat(width - filled))
}

/// Left-align `text` to `width` display columns
pub fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

pub fn tier_color(tier: PacingTier) -> Color {
    match tier {
        PacingTier::OnPace => colors::SUCCESS,
        PacingTier::NearPace => colors::WARNING,
        PacingTier::BehindPace => colors::ERROR,
    }
}

/// Paint `text` when color output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}
