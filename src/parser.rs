use winnow::prelude::*;
use winnow::ascii::space0;
use winnow::token::take_while;

use crate::ast::*;

pub const DEFAULT_COLOR: &str = "#212529";

pub fn parse_outline(input: &str) -> Outline {
    let entries = input.lines().filter_map(entry_line).collect();
    Outline { entries }
}

fn entry_line(line: &str) -> Option<Entry> {
    let mut rest = line.trim();
    if rest.is_empty() {
        return None;
    }

    let level = heading_marker(&mut rest).ok()?;
    let (text, color) = extract_color(rest);
    let (text, edge_label) = extract_edge_label(&text);

    Some(Entry {
        level,
        label: text.trim().to_string(),
        color,
        edge_label,
    })
}

fn heading_marker(input: &mut &str) -> winnow::Result<usize> {
    let marks = take_while(1.., '#').parse_next(input)?;
    space0.parse_next(input)?;
    Ok(marks.len())
}

fn color_tag<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    "[#".parse_next(input)?;
    let hex = take_while(6..=6, |c: char| c.is_ascii_hexdigit()).parse_next(input)?;
    "]".parse_next(input)?;
    Ok(hex)
}

/// Removes the first `[#RRGGBB]` tag and returns the cleaned text plus the
/// color (with leading `#`), or the text unchanged plus the default color.
fn extract_color(text: &str) -> (String, String) {
    for (at, _) in text.match_indices('[') {
        let mut rest = &text[at..];
        if let Ok(hex) = color_tag(&mut rest) {
            let mut cleaned = String::with_capacity(text.len());
            cleaned.push_str(&text[..at]);
            cleaned.push_str(rest);
            return (cleaned, format!("#{hex}"));
        }
    }
    (text.to_string(), DEFAULT_COLOR.to_string())
}

/// Splits a trailing `(...)` annotation off the text. The annotation must sit
/// at the end (ignoring trailing whitespace) and must not nest a `)`.
fn extract_edge_label(text: &str) -> (String, Option<String>) {
    let trimmed = text.trim_end();
    if !trimmed.ends_with(')') {
        return (text.to_string(), None);
    }
    let Some(open) = trimmed.rfind('(') else {
        return (text.to_string(), None);
    };
    let inner = &trimmed[open + 1..trimmed.len() - 1];
    if inner.contains(')') {
        return (text.to_string(), None);
    }
    (trimmed[..open].to_string(), Some(inner.trim().to_string()))
}
