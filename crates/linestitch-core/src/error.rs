//! Error types for line stitching.
//!
//! Uses [`thiserror`] for error derivation. Empty input is never an error:
//! only malformed boxes and out-of-range options are reported.

use thiserror::Error;

/// Error type for boundary validation of boxes, regions, and options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StitchError {
    /// A box did not contain exactly eight coordinates.
    #[error("invalid box shape: expected 8 coordinates, got {0}")]
    InvalidBoxShape(usize),

    /// A box coordinate is NaN or infinite.
    #[error("non-finite coordinate {value} at position {position}")]
    NonFiniteCoordinate {
        /// Position of the coordinate within the box (0..8).
        position: usize,
        /// The offending value.
        value: f64,
    },

    /// A region failed validation.
    #[error("region {index}: {source}")]
    InvalidRegion {
        /// Index of the region in the caller's input.
        index: usize,
        /// What was wrong with it.
        source: Box<StitchError>,
    },

    /// A stitching option is out of range.
    #[error("invalid option {name}: {value}")]
    InvalidOption {
        /// Option name (e.g., "max_x_dist").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl StitchError {
    /// Attach the index of the region this error came from.
    pub fn at_region(self, index: usize) -> Self {
        StitchError::InvalidRegion {
            index,
            source: Box::new(self),
        }
    }
}
