//! Single-line YOLO label parsing and formatting.

use std::fmt;

use serde::Serialize;

use crate::geom::NormalizedRect;

/// Result of parsing one annotation line.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedLine {
    /// Empty or whitespace-only line.
    Blank,
    Rect(NormalizedRect),
    /// A non-empty line that does not describe a rectangle.
    Skipped(SkipReason),
}

/// Why a non-empty line was not turned into a rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    TooFewTokens { found: usize },
    InvalidNumber { field: &'static str, raw: String },
    NonFinite { field: &'static str },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewTokens { found } => {
                write!(f, "expected at least 5 tokens, found {found}")
            }
            SkipReason::InvalidNumber { field, raw } => {
                write!(f, "invalid {field} '{raw}'; expected floating-point number")
            }
            SkipReason::NonFinite { field } => write!(f, "{field} is not finite"),
        }
    }
}

const FIELD_NAMES: [&str; 4] = ["x_center", "y_center", "width", "height"];

/// Parses `<class_id> <center_x> <center_y> <width> <height>`.
///
/// Tokens after the fifth are ignored.
pub fn parse_label_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ParsedLine::Blank;
    }

    // Take at most 5 tokens so pathological inputs do not allocate unbounded memory.
    let tokens: Vec<&str> = trimmed.split_whitespace().take(5).collect();
    if tokens.len() < 5 {
        return ParsedLine::Skipped(SkipReason::TooFewTokens {
            found: tokens.len(),
        });
    }

    let mut values = [0.0f64; 4];
    for ((value, raw), field) in values.iter_mut().zip(&tokens[1..]).zip(FIELD_NAMES) {
        *value = match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            Ok(_) => return ParsedLine::Skipped(SkipReason::NonFinite { field }),
            Err(_) => {
                return ParsedLine::Skipped(SkipReason::InvalidNumber {
                    field,
                    raw: (*raw).to_string(),
                })
            }
        };
    }

    let [cx, cy, w, h] = values;
    ParsedLine::Rect(NormalizedRect::new(tokens[0], cx, cy, w, h))
}

/// Formats a rectangle as one label line (without trailing newline).
///
/// With `precision = None` each number is written as the shortest decimal
/// text that parses back to the same value, always with a decimal point
/// (`0.5`, `1.0`). `Some(n)` writes exactly `n` decimals.
pub fn format_label_line(rect: &NormalizedRect, precision: Option<usize>) -> String {
    let values = [rect.center_x, rect.center_y, rect.width, rect.height];
    let mut line = rect.class_id.clone();
    for value in values {
        line.push(' ');
        match precision {
            Some(digits) => line.push_str(&format!("{value:.digits$}")),
            None => line.push_str(&format!("{value:?}")),
        }
    }
    line
}

/// Fuzz-only entrypoint for single-line parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_label_line(input: &str) {
    if let ParsedLine::Rect(rect) = parse_label_line(input) {
        let _ = format_label_line(&rect, None);
    }
}
