use regex::Regex;
use std::sync::OnceLock;

/// Header names compare after dropping BOMs, collapsing whitespace and lowercasing.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Case numbers keep their casing; only stray whitespace is removed.
pub(crate) fn normalize_case_number(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Listing exports mark judgments as Yes/No, Y/N, true/false or 1/0.
pub(crate) fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("yes" | "y" | "true" | "1" | "x")
    )
}

/// Listing cells carry HTML line breaks (`<br>`, `<BR>`, `<br />`) where the address wrapped.
pub(crate) fn html_line_breaks(value: &str) -> String {
    static BREAK: OnceLock<Regex> = OnceLock::new();
    let line_break =
        BREAK.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("static pattern compiles"));
    line_break.replace_all(value, "\n").into_owned()
}

#[cfg(test)]
pub(crate) fn normalize_header_for_tests(value: &str) -> String {
    normalize_header(value)
}
