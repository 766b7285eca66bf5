//! Crop job report.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::PixelBounds;
use crate::label::SkipReason;

/// Pixel dimensions of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// A label line that could not be read as a rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: SkipReason,
}

/// Summary of one crop job.
///
/// `discarded` counts rectangles that had no area left inside the crop;
/// `skipped` lists lines that never became rectangles. The two are kept
/// apart so a malformed file is not mistaken for a tight crop.
#[derive(Clone, Debug, Serialize)]
pub struct CropReport {
    pub image: PathBuf,
    pub output_image: PathBuf,
    pub output_labels: PathBuf,
    pub margin: f64,
    pub source_size: ImageSize,
    pub cropped_size: ImageSize,
    pub bounds: PixelBounds,
    pub kept: usize,
    pub discarded: usize,
    pub discarded_lines: Vec<usize>,
    pub skipped: Vec<SkippedLine>,
}

impl fmt::Display for CropReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved cropped image: {}  ({}x{})",
            self.output_image.display(),
            self.cropped_size.width,
            self.cropped_size.height
        )?;
        writeln!(f, "Labels: {} kept, {} discarded", self.kept, self.discarded)?;

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped lines ({}):", self.skipped.len())?;
            for skipped in &self.skipped {
                writeln!(f, "  - line {}: {}", skipped.line, skipped.reason)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> CropReport {
        CropReport {
            image: PathBuf::from("in.png"),
            output_image: PathBuf::from("out.png"),
            output_labels: PathBuf::from("out.txt"),
            margin: 0.2,
            source_size: ImageSize {
                width: 100,
                height: 50,
            },
            cropped_size: ImageSize {
                width: 60,
                height: 30,
            },
            bounds: PixelBounds {
                left: 20,
                top: 10,
                right: 80,
                bottom: 40,
            },
            kept: 3,
            discarded: 1,
            discarded_lines: vec![2],
            skipped: vec![],
        }
    }

    #[test]
    fn display_shows_counts() {
        let text = sample_report().to_string();
        assert!(text.contains("Saved cropped image: out.png  (60x30)"));
        assert!(text.contains("Labels: 3 kept, 1 discarded"));
        assert!(!text.contains("Skipped"));
    }

    #[test]
    fn display_lists_skipped_lines() {
        let mut report = sample_report();
        report.skipped.push(SkippedLine {
            line: 4,
            reason: SkipReason::TooFewTokens { found: 1 },
        });

        let text = report.to_string();
        assert!(text.contains("Skipped lines (1):"));
        assert!(text.contains("line 4: expected at least 5 tokens, found 1"));
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = sample_report();
        report.skipped.push(SkippedLine {
            line: 5,
            reason: SkipReason::NonFinite { field: "width" },
        });

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"kept\":3"));
        assert!(json.contains("\"discarded\":1"));
        assert!(json.contains("\"kind\":\"non_finite\""));
        assert!(json.contains("\"left\":20"));
    }
}
