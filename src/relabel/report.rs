//! Class-index rewrite report.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// One file touched by a rewrite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelabelledFile {
    pub path: PathBuf,
    /// Number of lines whose first token was replaced.
    pub lines: usize,
}

/// Summary of a class-index rewrite.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RelabelReport {
    pub class_literal: String,
    pub files: Vec<RelabelledFile>,
}

impl RelabelReport {
    pub fn new(class_literal: impl Into<String>) -> Self {
        Self {
            class_literal: class_literal.into(),
            files: Vec::new(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn line_count(&self) -> usize {
        self.files.iter().map(|f| f.lines).sum()
    }
}

impl fmt::Display for RelabelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} label file(s)", self.file_count())?;
        for file in &self.files {
            let name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| file.path.to_string_lossy());
            writeln!(f, "  modified: {} ({} line(s))", name, file.lines)?;
        }
        writeln!(
            f,
            "Done: {} line(s) set to class '{}'",
            self.line_count(),
            self.class_literal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_says_zero_files() {
        let report = RelabelReport::new("0");
        let text = report.to_string();
        assert!(text.contains("Found 0 label file(s)"));
        assert!(text.contains("Done: 0 line(s) set to class '0'"));
    }

    #[test]
    fn report_totals_lines_across_files() {
        let mut report = RelabelReport::new("0");
        report.files.push(RelabelledFile {
            path: PathBuf::from("labels/a.txt"),
            lines: 3,
        });
        report.files.push(RelabelledFile {
            path: PathBuf::from("labels/b.txt"),
            lines: 2,
        });

        assert_eq!(report.line_count(), 5);
        let text = report.to_string();
        assert!(text.contains("modified: a.txt (3 line(s))"));

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"class_literal\":\"0\""));
        assert!(json.contains("\"lines\":2"));
    }
}
