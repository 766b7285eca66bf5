//! YOLO label files.
//!
//! A label file holds one rectangle per line in the form
//! `<class_id> <center_x> <center_y> <width> <height>`, all numbers
//! normalized to the image size. Reading never fails on content: each line
//! comes back as a [`ParsedLine`] so callers can report skipped lines
//! separately from geometric outcomes.

mod line;

use std::fs;
use std::path::Path;

pub use line::{format_label_line, parse_label_line, ParsedLine, SkipReason};

#[cfg(feature = "fuzzing")]
pub use line::fuzz_parse_label_line;

use crate::error::LabelcropError;
use crate::geom::NormalizedRect;

/// A parsed line together with its 1-based line number.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberedLine {
    pub line: usize,
    pub parsed: ParsedLine,
}

/// Parses every line of `content`.
pub fn parse_label_str(content: &str) -> Vec<NumberedLine> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| NumberedLine {
            line: idx + 1,
            parsed: parse_label_line(line),
        })
        .collect()
}

/// Reads and parses a label file.
///
/// A missing file is an error ([`LabelcropError::LabelRead`] with an
/// `io::ErrorKind::NotFound` source).
pub fn read_label_file(path: &Path) -> Result<Vec<NumberedLine>, LabelcropError> {
    let content = fs::read_to_string(path).map_err(|source| LabelcropError::LabelRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_label_str(&content))
}

/// Renders rectangles as label file content, one `\n`-terminated line each.
pub fn to_label_string(rects: &[NormalizedRect], precision: Option<usize>) -> String {
    let mut out = String::new();
    for rect in rects {
        out.push_str(&format_label_line(rect, precision));
        out.push('\n');
    }
    out
}

/// Writes rectangles to `path`, creating parent directories as needed.
pub fn write_label_file(
    path: &Path,
    rects: &[NormalizedRect],
    precision: Option<usize>,
) -> Result<(), LabelcropError> {
    let write_err = |source| LabelcropError::LabelWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, to_label_string(rects, precision)).map_err(write_err)
}
