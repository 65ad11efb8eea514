//! Structured-response parser for Gemini health advice
//!
//! Gemini is asked (via the system instruction) to format replies as
//! `###`-delimited sections titled "Probable Causes", "Advice" and
//! "Disclaimer", but the reply is uncontrolled text and nothing is
//! guaranteed. This parser is total: any deviation from the template
//! (missing sections, extra sections, different casing, missing markers)
//! degrades to per-field defaults instead of failing.

use crate::advice::types::{ParsedAdvice, DEFAULT_ADVICE, DEFAULT_CAUSE, DEFAULT_DISCLAIMER};

/// Parse a raw model reply into a fully-populated `ParsedAdvice`
///
/// Pure single-pass transform, no I/O:
/// 1. Split on the literal `###` delimiter, trim sections, drop empties.
/// 2. The first non-blank line of a section is its header; the remaining
///    non-blank lines are its body.
/// 3. Classify by case-insensitive substring match on the header. A repeated
///    header class overwrites the earlier assignment (last section wins).
/// 4. Any field left unset or empty falls back to its default.
pub fn parse_advice(raw: &str) -> ParsedAdvice {
    let mut probable_causes: Vec<String> = Vec::new();
    let mut advice_steps: Vec<String> = Vec::new();
    let mut disclaimer = String::new();

    for section in raw.split("###") {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }

        let mut lines = section.lines().filter(|line| !line.trim().is_empty());
        let header = match lines.next() {
            Some(first) => first.to_lowercase(),
            None => continue,
        };

        if header.contains("probable causes") {
            probable_causes = lines
                .map(|line| strip_bullet_marker(line).trim().to_string())
                .collect();
        } else if header.contains("advice") {
            advice_steps = lines
                .map(|line| strip_numeric_marker(line).trim().to_string())
                .collect();
        } else if header.contains("disclaimer") {
            disclaimer = lines
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string();
        }
        // Unrecognized headers contribute nothing.
    }

    ParsedAdvice {
        probable_causes: if probable_causes.is_empty() {
            vec![DEFAULT_CAUSE.to_string()]
        } else {
            probable_causes
        },
        advice_steps: if advice_steps.is_empty() {
            vec![DEFAULT_ADVICE.to_string()]
        } else {
            advice_steps
        },
        disclaimer: if disclaimer.is_empty() {
            DEFAULT_DISCLAIMER.to_string()
        } else {
            disclaimer
        },
    }
}

/// Strip exactly one leading `"- "` bullet marker
fn strip_bullet_marker(line: &str) -> &str {
    line.strip_prefix("- ").unwrap_or(line)
}

/// Strip exactly one leading `"<digits>."` marker plus any following whitespace
fn strip_numeric_marker(line: &str) -> &str {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return line;
    }
    match line[digits..].strip_prefix('.') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}
