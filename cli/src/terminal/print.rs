use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Target of events that are console output rather than diagnostics.
pub const PRINT_TARGET: &str = "anki_today::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner() {
    let text_content: String = format!("⟦ ANKI TODAY v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let side: usize = TOTAL_WIDTH.saturating_sub(text_width) / 2;
    let sep: ColoredString = "═".repeat(side).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    )
}

pub fn fat_separator_line() -> String {
    "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string()
}

pub fn centered(msg: &str) -> String {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{}{}", space, msg)
}

pub fn tree_head(idx: usize, name: &str, detail: &str) -> String {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    format!(
        "{} {} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY).bold(),
        detail.color(colors::SEPARATOR)
    )
}

pub fn branch(last: bool) -> ColoredString {
    if last { "└─".bright_black() } else { "├─".bright_black() }
}

pub fn stem(last: bool) -> ColoredString {
    if last { "  ".normal() } else { "│ ".bright_black() }
}
