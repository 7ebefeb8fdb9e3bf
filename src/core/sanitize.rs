// src/core/sanitize.rs

/// Keep only ASCII letters, digits, '-' and '/'.
/// The markets table pads its pair cell with icons and spacing:
/// `"ADA - USD"` becomes `"ADA-USD"`.
pub fn clean_pair(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '/')
        .collect()
}

/// True for the filler a virtualized table shows in a cell it has not
/// populated: blank, or a lone dash.
pub fn is_placeholder(s: &str) -> bool {
    matches!(s.trim(), "" | "-" | "--" | "\u{2014}")
}
