use crate::utils::colors::{BOLD, FG_BLUE, FG_GREEN, FG_RED, FG_YELLOW, RESET};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Icon plus message; the icon is coloured only when `color` is set.
fn line<T: fmt::Display>(fg: &str, icon: &str, msg: T, color: bool) -> String {
    if color {
        format!("{}{}{} {}{}", fg, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T, color: bool) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg, color));
}

pub fn success<T: fmt::Display>(msg: T, color: bool) {
    println!("{}", line(FG_GREEN, ICON_OK, msg, color));
}

pub fn warning<T: fmt::Display>(msg: T, color: bool) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg, color));
}

pub fn error<T: fmt::Display>(msg: T, color: bool) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg, color));
}

/// Page title, underlined to the title's width
pub fn header<T: fmt::Display>(msg: T, color: bool) {
    let title = msg.to_string();
    let rule = "=".repeat(crate::utils::formatting::display_width(&title));
    if color {
        println!("{}{}{}\n{}{}", FG_BLUE, BOLD, title, rule, RESET);
    } else {
        println!("{}\n{}", title, rule);
    }
}
