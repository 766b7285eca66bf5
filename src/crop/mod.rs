//! Center-crop an image and reproject its labels into the crop.
//!
//! The crop removes the same fraction ("margin") from every border. The
//! image side works in integer pixels ([`PixelBounds`]); the label side
//! works in normalized coordinates ([`CropWindow`]). Both are derived from
//! the same margin, so a label that fits the normalized window also fits
//! the saved pixels up to one pixel of flooring.

pub mod report;

pub use report::{CropReport, ImageSize, SkippedLine};

use std::fs;
use std::path::Path;

use image::GenericImageView;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CropConfig;
use crate::error::LabelcropError;
use crate::geom::{reproject, CropWindow, NormalizedRect, Reprojection};
use crate::label::{self, NumberedLine, ParsedLine};

/// Integer pixel bounds of a crop, `left..right` by `top..bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PixelBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelBounds {
    /// Bounds for a `width` x `height` image with `margin` removed from each
    /// border: `floor(w*m), floor(h*m), floor(w*(1-m)), floor(h*(1-m))`.
    pub fn from_margin(width: u32, height: u32, margin: f64) -> Self {
        let scale = |extent: u32, fraction: f64| (extent as f64 * fraction).floor() as u32;
        Self {
            left: scale(width, margin),
            top: scale(height, margin),
            right: scale(width, 1.0 - margin),
            bottom: scale(height, 1.0 - margin),
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Returns true if the bounds select no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// What [`crop_image`] did to the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCrop {
    pub source: ImageSize,
    pub bounds: PixelBounds,
}

impl ImageCrop {
    pub fn cropped(&self) -> ImageSize {
        ImageSize {
            width: self.bounds.width(),
            height: self.bounds.height(),
        }
    }
}

/// Opens `image_path`, removes `margin` from every border and saves the
/// result to `output_path` (format chosen from the extension).
pub fn crop_image(
    image_path: &Path,
    output_path: &Path,
    margin: f64,
) -> Result<ImageCrop, LabelcropError> {
    let img = image::open(image_path).map_err(|source| LabelcropError::ImageOpen {
        path: image_path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    let source = ImageSize { width, height };
    let bounds = PixelBounds::from_margin(source.width, source.height, margin);
    if bounds.is_empty() {
        return Err(LabelcropError::EmptyCrop {
            path: image_path.to_path_buf(),
            width: source.width,
            height: source.height,
            margin,
        });
    }

    let cropped = img.crop_imm(bounds.left, bounds.top, bounds.width(), bounds.height());

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| LabelcropError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    cropped
        .save(output_path)
        .map_err(|source| LabelcropError::ImageSave {
            path: output_path.to_path_buf(),
            source,
        })?;

    info!(
        path = %output_path.display(),
        width = bounds.width(),
        height = bounds.height(),
        "saved cropped image"
    );

    Ok(ImageCrop { source, bounds })
}

/// Label lines sorted into kept, discarded and skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelOutcome {
    /// Reprojected rectangles, in input order.
    pub kept: Vec<NormalizedRect>,
    /// Line numbers of rectangles with no area left inside the window.
    pub discarded: Vec<usize>,
    pub skipped: Vec<SkippedLine>,
}

/// Reprojects every parsed rectangle into `window`.
///
/// Blank lines are dropped silently; malformed lines are collected as
/// skipped so they can be reported apart from discarded rectangles.
pub fn reproject_labels(lines: &[NumberedLine], window: &CropWindow) -> LabelOutcome {
    let mut outcome = LabelOutcome::default();

    for numbered in lines {
        match &numbered.parsed {
            ParsedLine::Blank => {}
            ParsedLine::Skipped(reason) => {
                debug!(line = numbered.line, %reason, "skipping malformed label line");
                outcome.skipped.push(SkippedLine {
                    line: numbered.line,
                    reason: reason.clone(),
                });
            }
            ParsedLine::Rect(rect) => match reproject(rect, window) {
                Reprojection::Kept(kept) => outcome.kept.push(kept),
                Reprojection::Rejected => {
                    debug!(
                        line = numbered.line,
                        class_id = %rect.class_id,
                        "discarding box outside crop"
                    );
                    outcome.discarded.push(numbered.line);
                }
            },
        }
    }

    outcome
}

/// Runs a full crop job: image crop plus label reprojection.
///
/// The label file is read before anything is written, so a missing label
/// file leaves no partial output behind.
pub fn crop_image_and_labels(config: &CropConfig) -> Result<CropReport, LabelcropError> {
    let window = config.window()?;
    let lines = label::read_label_file(&config.labels)?;

    let image = crop_image(&config.image, &config.output_image, config.margin)?;

    let outcome = reproject_labels(&lines, &window);
    label::write_label_file(&config.output_labels, &outcome.kept, config.precision)?;

    info!(
        kept = outcome.kept.len(),
        discarded = outcome.discarded.len(),
        skipped = outcome.skipped.len(),
        path = %config.output_labels.display(),
        "wrote reprojected labels"
    );

    Ok(CropReport {
        image: config.image.clone(),
        output_image: config.output_image.clone(),
        output_labels: config.output_labels.clone(),
        margin: config.margin,
        source_size: image.source,
        cropped_size: image.cropped(),
        bounds: image.bounds,
        kept: outcome.kept.len(),
        discarded: outcome.discarded.len(),
        discarded_lines: outcome.discarded,
        skipped: outcome.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{parse_label_str, SkipReason};

    #[test]
    fn pixel_bounds_floor_each_edge() {
        let bounds = PixelBounds::from_margin(101, 55, 0.2);
        assert_eq!(
            bounds,
            PixelBounds {
                left: 20,
                top: 11,
                right: 80,
                bottom: 44,
            }
        );
        assert_eq!(bounds.width(), 60);
        assert_eq!(bounds.height(), 33);
    }

    #[test]
    fn pixel_bounds_zero_margin_is_whole_image() {
        let bounds = PixelBounds::from_margin(640, 480, 0.0);
        assert_eq!((bounds.width(), bounds.height()), (640, 480));
    }

    #[test]
    fn pixel_bounds_of_tiny_image_can_be_empty() {
        let bounds = PixelBounds::from_margin(1, 1, 0.2);
        assert!(bounds.is_empty());
    }

    #[test]
    fn reproject_labels_separates_outcomes() {
        let lines = parse_label_str(
            "0 0.5 0.5 0.8 0.8\n\
             0 0.1 0.1 0.1 0.1\n\
             \n\
             1 0.5\n\
             2 0.5 0.5 0.2 0.2\n",
        );
        let window = CropWindow::from_margin(0.2).unwrap();

        let outcome = reproject_labels(&lines, &window);

        assert_eq!(outcome.kept.len(), 2);
        assert_eq!(outcome.kept[0].class_id, "0");
        assert_eq!(outcome.kept[1].class_id, "2");
        assert_eq!(outcome.discarded, vec![2]);
        assert_eq!(
            outcome.skipped,
            vec![SkippedLine {
                line: 4,
                reason: SkipReason::TooFewTokens { found: 2 },
            }]
        );
    }

    #[test]
    fn crop_image_reports_missing_input() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let err = crop_image(
            &temp.path().join("missing.png"),
            &temp.path().join("out.png"),
            0.2,
        )
        .unwrap_err();

        assert!(matches!(err, LabelcropError::ImageOpen { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn crop_image_reports_unwritable_output_dir() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let image_path = temp.path().join("in.png");
        image::RgbImage::new(10, 10)
            .save(&image_path)
            .expect("write input image");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").expect("write blocking file");

        let err = crop_image(&image_path, &blocker.join("out.png"), 0.2).unwrap_err();

        match err {
            LabelcropError::OutputDir { path, .. } => assert_eq!(path, blocker),
            other => panic!("expected OutputDir, got {other:?}"),
        }
    }
}
