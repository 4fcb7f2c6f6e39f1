use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Stitch fragmented OCR text boxes into full text lines.
#[derive(Debug, Parser)]
#[command(name = "linestitch", about, version)]
pub struct Cli {
    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge word boxes into line boxes
    Stitch {
        /// JSON file with an array of {"box": [8 numbers], "text": "..."}; '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum horizontal gap between neighboring boxes of one line
        #[arg(long, default_value_t = 10.0)]
        max_x_dist: f64,

        /// Minimum vertical overlap, as a fraction of either box's height
        #[arg(long, default_value_t = 0.8, conflicts_with = "any_overlap")]
        min_y_overlap_ratio: f64,

        /// Treat any vertical overlap as the same line (disables the ratio check)
        #[arg(long)]
        any_overlap: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Include the input indices merged into each line
        #[arg(long)]
        members: bool,
    },

    /// Check input regions for problems before stitching
    Validate {
        /// JSON file with an array of {"box": [8 numbers], "text": "..."}; '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ValidateFormat::Text)]
        format: ValidateFormat,
    },
}

/// Output format for the stitch subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

/// Output format for the validate subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum ValidateFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
}
