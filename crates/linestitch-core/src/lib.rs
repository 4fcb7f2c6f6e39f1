//! linestitch-core: Merge fragmented text-detection boxes into text lines.
//!
//! An OCR word or character detector tends to emit one box per fragment.
//! This crate groups boxes that share a horizontal line and sit close
//! together, then merges each group into one box and one space-joined string.
//!
//! - [`is_on_same_line`]: vertical-overlap test for two boxes.
//! - [`stitch_boxes_into_lines`]: the full left-to-right grouping and merge.
//! - [`validate_regions`]: input checks to run before stitching.
//!
//! ```
//! use linestitch_core::{StitchOptions, TextRegion, stitch_boxes_into_lines};
//!
//! let regions = vec![
//!     TextRegion::new([0.0, 0.0, 5.0, 0.0, 5.0, 5.0, 0.0, 5.0], "Hel"),
//!     TextRegion::new([6.0, 1.0, 12.0, 1.0, 12.0, 6.0, 6.0, 6.0], "lo"),
//! ];
//! let lines = stitch_boxes_into_lines(&regions, &StitchOptions::default());
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].text, "Hel lo");
//! ```

pub mod error;
pub mod geometry;
pub mod region;
pub mod same_line;
pub mod stitch;
pub mod validation;

pub use error::StitchError;
pub use geometry::{BBox, QUAD_COORDS, QuadBox};
pub use region::TextRegion;
pub use same_line::{DEFAULT_MIN_Y_OVERLAP_RATIO, is_on_same_line};
pub use stitch::{
    DEFAULT_MAX_X_DIST, LineGroup, StitchOptions, group_into_lines, merge_group,
    stitch_boxes_into_lines, try_stitch_boxes_into_lines,
};
pub use validation::{
    Severity, UncheckedRegion, ValidationIssue, validate_regions, validate_unchecked_regions,
};
