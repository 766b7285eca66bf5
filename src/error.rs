use std::path::PathBuf;
use thiserror::Error;

/// The main error type for labelcrop operations.
#[derive(Debug, Error)]
pub enum LabelcropError {
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open image {path}: {source}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Margin {margin} leaves nothing of the {width}x{height} image {path}")]
    EmptyCrop {
        path: PathBuf,
        width: u32,
        height: u32,
        margin: f64,
    },

    #[error("Failed to read label file {path}: {source}")]
    LabelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write label file {path}: {source}")]
    LabelWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid margin {0}: expected a value in [0, 0.5)")]
    InvalidMargin(f64),

    #[error("Invalid crop window (x_min={x_min}, y_min={y_min}, width={width}, height={height}): {message}")]
    InvalidCropWindow {
        x_min: f64,
        y_min: f64,
        width: f64,
        height: f64,
        message: String,
    },

    #[error("Invalid class literal {0:?}: expected one non-empty token without whitespace")]
    InvalidClassLiteral(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Failed to list label files in {path}: {message}")]
    DirectoryWalk { path: PathBuf, message: String },

    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),
}

impl LabelcropError {
    /// Returns true if this error was caused by a missing input file.
    pub fn is_not_found(&self) -> bool {
        let io_err = match self {
            LabelcropError::LabelRead { source, .. }
            | LabelcropError::ConfigRead { source, .. } => source,
            LabelcropError::ImageOpen {
                source: image::ImageError::IoError(source),
                ..
            } => source,
            _ => return false,
        };
        io_err.kind() == std::io::ErrorKind::NotFound
    }
}
