//! Labelcrop: center-crop images and keep their YOLO labels in sync.
//!
//! Two dataset-preparation jobs share this crate:
//!
//! - **crop**: remove a margin from every border of one image and rewrite
//!   its label file so each box is clipped to the crop and expressed in the
//!   crop's coordinate frame. Boxes with no area left are discarded.
//! - **relabel**: replace the class index of every line in a directory of
//!   label files with one fixed value.
//!
//! # Modules
//!
//! - [`geom`]: normalized rectangles, crop windows and [`geom::reproject`]
//! - [`label`]: YOLO label line parsing and writing
//! - [`crop`]: the crop job and its report
//! - [`relabel`]: the class-index rewrite and its report
//! - [`config`]: job configuration structs
//! - [`error`]: error types for labelcrop operations

pub mod config;
pub mod crop;
pub mod error;
pub mod geom;
pub mod label;
pub mod relabel;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use config::{CropConfig, RelabelConfig, StemLayout};
pub use error::LabelcropError;

/// The labelcrop CLI application.
#[derive(Parser)]
#[command(name = "labelcrop")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Crop an image to its center and reproject its labels.
    Crop(CropArgs),
    /// Set the class index of every label line in a directory.
    Relabel(RelabelArgs),
}

/// Arguments for the crop subcommand.
///
/// The job is taken from `--config`, from `--dataset-root` + `--stem`, or
/// from the four explicit paths, in that order of precedence.
#[derive(clap::Args)]
struct CropArgs {
    /// YAML job file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset root containing `<split>/images` and `<split>/labels`.
    #[arg(long)]
    dataset_root: Option<PathBuf>,

    /// File stem of the image and label to crop.
    #[arg(long)]
    stem: Option<String>,

    /// Dataset split directory under the root.
    #[arg(long, default_value = config::DEFAULT_SPLIT)]
    split: String,

    /// Suffix appended to the stem for output files.
    #[arg(long, default_value = config::DEFAULT_SUFFIX)]
    suffix: String,

    /// Image file extension used with `--stem`.
    #[arg(long, default_value = config::DEFAULT_IMAGE_EXTENSION)]
    image_ext: String,

    /// Source image.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Source label file.
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Where to save the cropped image.
    #[arg(long)]
    output_image: Option<PathBuf>,

    /// Where to write the reprojected labels.
    #[arg(long)]
    output_labels: Option<PathBuf>,

    /// Fraction removed from each border (default 0.2).
    #[arg(long)]
    margin: Option<f64>,

    /// Write label numbers with this many decimals instead of shortest form.
    #[arg(long)]
    precision: Option<usize>,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    output: ReportFormat,
}

/// Arguments for the relabel subcommand.
#[derive(clap::Args)]
struct RelabelArgs {
    /// Directory containing label files.
    labels_dir: PathBuf,

    /// Literal written in place of each line's class index.
    #[arg(long = "class", default_value = config::DEFAULT_CLASS_LITERAL)]
    class_literal: String,

    /// Label file extension.
    #[arg(long, default_value = config::LABEL_EXTENSION)]
    extension: String,

    /// Also rewrite files in subdirectories.
    #[arg(long)]
    recursive: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    output: ReportFormat,
}

/// How reports are printed on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run the labelcrop CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), LabelcropError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Crop(args)) => run_crop(args),
        Some(Commands::Relabel(args)) => run_relabel(args),
        None => {
            println!("labelcrop {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Center-crop images and keep their YOLO labels in sync.");
            println!();
            println!("Run 'labelcrop --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the crop subcommand.
fn run_crop(args: CropArgs) -> Result<(), LabelcropError> {
    let output = args.output;
    let config = resolve_crop_config(args)?;
    let report = crop::crop_image_and_labels(&config)?;
    print_report(&report, output)
}

fn resolve_crop_config(args: CropArgs) -> Result<CropConfig, LabelcropError> {
    let mut config = if let Some(path) = &args.config {
        CropConfig::from_yaml_file(path)?
    } else if let Some(root) = args.dataset_root {
        let stem = args.stem.ok_or_else(|| {
            LabelcropError::MissingArgument("--stem is required with --dataset-root".to_string())
        })?;
        let mut layout = StemLayout::new(root, stem);
        layout.split = args.split;
        layout.suffix = args.suffix;
        layout.image_extension = args.image_ext;
        CropConfig::for_stem(&layout)
    } else {
        let require = |value: Option<PathBuf>, flag: &str| {
            value.ok_or_else(|| {
                LabelcropError::MissingArgument(format!(
                    "{flag} (or use --config, or --dataset-root with --stem)"
                ))
            })
        };
        CropConfig::new(
            require(args.image, "--image")?,
            require(args.labels, "--labels")?,
            require(args.output_image, "--output-image")?,
            require(args.output_labels, "--output-labels")?,
        )
    };

    if let Some(margin) = args.margin {
        config.margin = margin;
    }
    if args.precision.is_some() {
        config.precision = args.precision;
    }
    Ok(config)
}

/// Execute the relabel subcommand.
fn run_relabel(args: RelabelArgs) -> Result<(), LabelcropError> {
    let mut config = RelabelConfig::new(args.labels_dir).with_class_literal(args.class_literal);
    config.extension = args.extension;
    config.recursive = args.recursive;

    let report = relabel::relabel_files(&config)?;
    print_report(&report, args.output)
}

fn print_report<R>(report: &R, format: ReportFormat) -> Result<(), LabelcropError>
where
    R: Serialize + std::fmt::Display,
{
    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        ReportFormat::Text => print!("{}", report),
    }
    Ok(())
}
