use std::fmt::Write;

use crate::scan::GroupListing;

/// Renders one `export const` line per listing, in order.
pub fn render_module(listings: &[GroupListing], export_prefix: &str) -> String {
    let mut out = String::new();
    for listing in listings {
        out.push_str(&render_export(listing, export_prefix));
    }
    out
}

pub fn render_export(listing: &GroupListing, export_prefix: &str) -> String {
    let items: Vec<String> = listing.paths.iter().map(|p| quote(p)).collect();
    // the space before the newline keeps output identical to earlier generated files
    format!(
        "export const {} = [{}] \n",
        listing.group.export_name(export_prefix),
        items.join(", ")
    )
}

/// Quotes `s` as a single-quoted TypeScript string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
