//! Job configuration passed at the call boundary.
//!
//! Nothing in the crop or relabel code knows about dataset roots or file
//! naming conventions; those are resolved here into plain paths.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LabelcropError;
use crate::geom::CropWindow;

/// Fraction removed from each border when no margin is given.
pub const DEFAULT_MARGIN: f64 = 0.2;
pub const DEFAULT_SPLIT: &str = "train";
pub const DEFAULT_SUFFIX: &str = "_cropped";
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";
pub const LABEL_EXTENSION: &str = "txt";
/// Class literal written by `relabel` when none is given.
pub const DEFAULT_CLASS_LITERAL: &str = "0";

/// Inputs and outputs of a single crop job.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CropConfig {
    pub image: PathBuf,
    pub labels: PathBuf,
    pub output_image: PathBuf,
    pub output_labels: PathBuf,
    /// Fraction removed from each border, in `[0, 0.5)`.
    pub margin: f64,
    /// Fixed number of decimals for written labels; `None` writes the
    /// shortest round-trip text.
    pub precision: Option<usize>,
}

impl CropConfig {
    pub fn new(
        image: impl Into<PathBuf>,
        labels: impl Into<PathBuf>,
        output_image: impl Into<PathBuf>,
        output_labels: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image: image.into(),
            labels: labels.into(),
            output_image: output_image.into(),
            output_labels: output_labels.into(),
            margin: DEFAULT_MARGIN,
            precision: None,
        }
    }

    /// Derives all four paths from a dataset layout.
    ///
    /// Inputs are `<root>/<split>/images/<stem>.<ext>` and
    /// `<root>/<split>/labels/<stem>.txt`; outputs sit next to them with
    /// `suffix` appended to the stem.
    pub fn for_stem(layout: &StemLayout) -> Self {
        let split_dir = layout.dataset_root.join(&layout.split);
        let images_dir = split_dir.join("images");
        let labels_dir = split_dir.join("labels");
        let out_stem = format!("{}{}", layout.stem, layout.suffix);

        Self::new(
            images_dir.join(format!("{}.{}", layout.stem, layout.image_extension)),
            labels_dir.join(format!("{}.{}", layout.stem, LABEL_EXTENSION)),
            images_dir.join(format!("{}.{}", out_stem, layout.image_extension)),
            labels_dir.join(format!("{}.{}", out_stem, LABEL_EXTENSION)),
        )
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Validates the margin and returns the normalized crop window.
    pub fn window(&self) -> Result<CropWindow, LabelcropError> {
        CropWindow::from_margin(self.margin)
    }

    /// Parses a YAML crop job.
    ///
    /// Two shapes are accepted: the four explicit paths
    /// (`image`, `labels`, `output_image`, `output_labels`), or a stem
    /// layout (`dataset_root`, `stem`, optional `split`, `suffix`,
    /// `image_extension`). Both take optional `margin` and `precision`.
    pub fn from_yaml_str(yaml: &str, source_path: &Path) -> Result<Self, LabelcropError> {
        let job: CropJobFile =
            serde_yaml::from_str(yaml).map_err(|source| LabelcropError::ConfigParse {
                path: source_path.to_path_buf(),
                source,
            })?;
        Ok(job.into_config())
    }

    /// Reads and parses a YAML crop job file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, LabelcropError> {
        let yaml = fs::read_to_string(path).map_err(|source| LabelcropError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml, path)
    }
}

/// Conventional YOLO dataset layout used to derive crop job paths.
#[derive(Clone, Debug, PartialEq)]
pub struct StemLayout {
    pub dataset_root: PathBuf,
    pub split: String,
    pub stem: String,
    pub suffix: String,
    pub image_extension: String,
}

impl StemLayout {
    pub fn new(dataset_root: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dataset_root: dataset_root.into(),
            split: DEFAULT_SPLIT.to_string(),
            stem: stem.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CropJobFile {
    Paths(PathsJob),
    Stem(StemJob),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathsJob {
    image: PathBuf,
    labels: PathBuf,
    output_image: PathBuf,
    output_labels: PathBuf,
    #[serde(default)]
    margin: Option<f64>,
    #[serde(default)]
    precision: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StemJob {
    dataset_root: PathBuf,
    stem: String,
    #[serde(default)]
    split: Option<String>,
    #[serde(default)]
    suffix: Option<String>,
    #[serde(default)]
    image_extension: Option<String>,
    #[serde(default)]
    margin: Option<f64>,
    #[serde(default)]
    precision: Option<usize>,
}

impl CropJobFile {
    fn into_config(self) -> CropConfig {
        let (config, margin, precision) = match self {
            CropJobFile::Paths(job) => (
                CropConfig::new(job.image, job.labels, job.output_image, job.output_labels),
                job.margin,
                job.precision,
            ),
            CropJobFile::Stem(job) => {
                let mut layout = StemLayout::new(job.dataset_root, job.stem);
                if let Some(split) = job.split {
                    layout.split = split;
                }
                if let Some(suffix) = job.suffix {
                    layout.suffix = suffix;
                }
                if let Some(ext) = job.image_extension {
                    layout.image_extension = ext;
                }
                (CropConfig::for_stem(&layout), job.margin, job.precision)
            }
        };

        config
            .with_margin(margin.unwrap_or(DEFAULT_MARGIN))
            .with_precision(precision)
    }
}

/// Inputs of a class-index rewrite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelabelConfig {
    pub labels_dir: PathBuf,
    /// Label file extension, matched case-insensitively.
    pub extension: String,
    /// Text written in place of every line's first token.
    pub class_literal: String,
    /// Descend into subdirectories of `labels_dir`.
    pub recursive: bool,
}

impl RelabelConfig {
    pub fn new(labels_dir: impl Into<PathBuf>) -> Self {
        Self {
            labels_dir: labels_dir.into(),
            extension: LABEL_EXTENSION.to_string(),
            class_literal: DEFAULT_CLASS_LITERAL.to_string(),
            recursive: false,
        }
    }

    pub fn with_class_literal(mut self, literal: impl Into<String>) -> Self {
        self.class_literal = literal.into();
        self
    }
}
