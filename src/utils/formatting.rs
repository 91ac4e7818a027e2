//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Terminal columns taken by `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `styled` on the right so that it fills `width` columns, measuring
/// the visible text `plain`.
pub fn pad_right(plain: &str, styled: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(plain));
    format!("{}{}", styled, " ".repeat(pad))
}

pub fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}
