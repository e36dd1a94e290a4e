use regex::Regex;

use crate::Result;

const ELLIPSIS: &str = "...";
const PRIORITY_PREFIX_PATTERN: &str = r"^\s*\d*\.\s*";

/// Truncate text to `max_length` characters, ending with an ellipsis when cut.
pub fn truncate(text: Option<&str>, max_length: usize) -> String {
    let text = match text {
        Some(t) => t,
        None => return String::new(),
    };

    if text.chars().count() > max_length {
        let kept: String = text
            .chars()
            .take(max_length.saturating_sub(ELLIPSIS.len()))
            .collect();
        kept + ELLIPSIS
    } else {
        text.to_owned()
    }
}

/// Strip the ordinal prefix from a priority name (`1. High` gives `High`).
pub fn strip_priority_prefix(name: &str) -> Result<String> {
    let rgx = Regex::new(PRIORITY_PREFIX_PATTERN)?;
    Ok(rgx.replace(name, "").into_owned())
}
