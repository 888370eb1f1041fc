use std::cell::Cell;

use checkr_common::log::PRINT_TARGET;
use checkr_common::report::{Check, Summary, Verdict};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ CHECKR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

/// Palindrome inputs are quoted so empty strings and edge spaces stay visible.
pub fn key_of(verdict: &Verdict) -> String {
    match verdict.check {
        Check::Even => verdict.input.clone(),
        Check::Palindrome => format!("\"{}\"", verdict.input),
    }
}

pub fn set_key_width(width: usize) {
    GLOBAL_KEY_WIDTH.set(width);
}

pub fn verdict_line(verdict: &Verdict, q_level: u8) {
    let value: ColoredString = if verdict.holds {
        "true".color(colors::HOLDS)
    } else {
        "false".color(colors::FAILS)
    };

    if q_level > 1 {
        print(&format!("{}", value));
        return;
    }

    let key: String = key_of(verdict);
    let whitespace: String =
        ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(UnicodeWidthStr::width(key.as_str())));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    print_status(format!(
        "{} {}{} {}",
        verdict.check.name().color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        colon,
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn summary(summary: &Summary, q_level: u8) {
    if q_level > 1 {
        return;
    }

    let passed: ColoredString = summary.passed.to_string().color(colors::HOLDS).bold();
    let failed: ColoredString = if summary.failed > 0 {
        summary.failed.to_string().color(colors::FAILS).bold()
    } else {
        summary.failed.to_string().color(colors::TEXT_DEFAULT)
    };
    let unit: &str = if summary.total() == 1 { "input" } else { "inputs" };

    print(&format!(
        "{} {} {} checked, {} held, {} did not",
        "═".color(colors::SEPARATOR),
        summary.total(),
        unit,
        passed,
        failed
    ));
}

pub fn end_of_program(q_level: u8) {
    if q_level > 0 {
        return;
    }

    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
