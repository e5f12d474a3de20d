// src/text.rs

use once_cell::sync::Lazy;
use regex::Regex;

static MULTIPLE_NEW_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline pattern compiles"));

/// Collapse every run of three or more newlines to exactly three.
pub fn clean_up_new_lines(text: &str) -> String {
    MULTIPLE_NEW_LINES.replace_all(text, "\n\n\n").into_owned()
}
