//! Bulk rewrite of the class index in YOLO label files.
//!
//! Every non-empty line has its first token replaced by a fixed literal;
//! the rest of the line is kept token for token (re-joined with single
//! spaces). Blank lines are kept as they are. This is plain text
//! substitution and does not parse coordinates.

pub mod report;

pub use report::{RelabelReport, RelabelledFile};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::config::RelabelConfig;
use crate::error::LabelcropError;

/// Rewrites one line, or returns `None` if the line is blank.
pub fn rewrite_line(line: &str, class_literal: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    tokens.next()?;

    let mut out = String::from(class_literal);
    for token in tokens {
        out.push(' ');
        out.push_str(token);
    }
    Some(out)
}

/// Rewrites every line of `content`, returning the new text and the number
/// of lines rewritten. Every output line ends with `\n`.
pub fn rewrite_content(content: &str, class_literal: &str) -> (String, usize) {
    let mut out = String::with_capacity(content.len());
    let mut rewritten = 0;

    for line in content.lines() {
        match rewrite_line(line, class_literal) {
            Some(new_line) => {
                out.push_str(&new_line);
                rewritten += 1;
            }
            None => out.push_str(line.trim_end_matches('\r')),
        }
        out.push('\n');
    }

    (out, rewritten)
}

/// Lists files under `dir` with the given extension, sorted by path.
///
/// Only direct children are considered unless `recursive` is set.
pub fn collect_label_files(
    dir: &Path,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>, LabelcropError> {
    let mut walker = WalkDir::new(dir).follow_links(true).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| LabelcropError::DirectoryWalk {
            path: dir.to_path_buf(),
            message: source.to_string(),
        })?;

        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Rewrites a single label file in place.
pub fn relabel_file(path: &Path, class_literal: &str) -> Result<usize, LabelcropError> {
    let content = fs::read_to_string(path).map_err(|source| LabelcropError::LabelRead {
        path: path.to_path_buf(),
        source,
    })?;

    let (rewritten, count) = rewrite_content(&content, class_literal);
    fs::write(path, rewritten).map_err(|source| LabelcropError::LabelWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(count)
}

/// Checks that `literal` is a single whitespace-free token, so rewritten
/// lines keep their five-field shape.
pub fn validate_class_literal(literal: &str) -> Result<(), LabelcropError> {
    if literal.is_empty() || literal.chars().any(char::is_whitespace) {
        return Err(LabelcropError::InvalidClassLiteral(literal.to_string()));
    }
    Ok(())
}

/// Rewrites the class index of every label file selected by `config`.
///
/// Finding no files is not an error; the report simply lists none.
pub fn relabel_files(config: &RelabelConfig) -> Result<RelabelReport, LabelcropError> {
    validate_class_literal(&config.class_literal)?;
    let files = collect_label_files(&config.labels_dir, &config.extension, config.recursive)?;
    info!(
        count = files.len(),
        dir = %config.labels_dir.display(),
        "found label files"
    );

    let mut report = RelabelReport::new(config.class_literal.clone());
    for path in files {
        let lines = relabel_file(&path, &config.class_literal)?;
        info!(path = %path.display(), lines, "relabelled");
        report.files.push(RelabelledFile { path, lines });
    }

    Ok(report)
}
