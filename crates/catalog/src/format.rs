//! Console formatting helpers shared by the listing, preview, and prompt output.

/// Width of the `=` rule framing every section.
pub const BANNER_WIDTH: usize = 60;

/// A full-width `=` rule.
pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Section header: blank line, rule, title, rule. Ends with a newline.
pub fn section_header(title: &str) -> String {
    let rule = banner();
    format!("\n{rule}\n{title}\n{rule}\n")
}

/// Render an integer with `,` between thousands groups (`1234567` -> `1,234,567`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
