//! Input validation for detected text regions.
//!
//! Provides [`ValidationIssue`] for reporting problems with stitcher input
//! and [`Severity`] for classifying whether stitching can still proceed.

use std::fmt;

use crate::error::StitchError;
use crate::region::TextRegion;

/// Severity of a validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Severity {
    /// The region would corrupt merged output.
    Error,
    /// The region is suspicious but stitchable.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A problem found in a detected text region.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationIssue {
    /// Severity of the issue.
    pub severity: Severity,
    /// Machine-readable issue code (e.g., "NON_FINITE_COORDINATE").
    pub code: String,
    /// Human-readable description of the issue.
    pub message: String,
    /// Optional location (e.g., "region 3").
    pub location: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue.
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new validation issue with a location.
    pub fn with_location(
        severity: Severity,
        code: impl Into<String>,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Returns `true` if the issue is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` if the issue is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)?;
        if let Some(ref loc) = self.location {
            write!(f, " (at {loc})")?;
        }
        Ok(())
    }
}

/// A region whose box has not been shape-checked yet.
///
/// Deserializes any `"box"` array, so a wrong-length box can be reported
/// per region instead of failing the whole input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UncheckedRegion {
    /// Raw box coordinates.
    #[cfg_attr(feature = "serde", serde(rename = "box"))]
    pub coords: Vec<f64>,
    /// Recognized text.
    pub text: String,
}

impl UncheckedRegion {
    /// Shape-check the box and build a [`TextRegion`].
    pub fn to_region(&self) -> Result<TextRegion, StitchError> {
        TextRegion::from_coords(&self.coords, self.text.as_str())
    }
}

impl From<&TextRegion> for UncheckedRegion {
    fn from(region: &TextRegion) -> Self {
        Self {
            coords: region.quad.into(),
            text: region.text.clone(),
        }
    }
}

/// Check regions before stitching.
///
/// Reports, in region order:
/// - `NON_FINITE_COORDINATE` (error): a NaN or infinite coordinate. Further
///   checks on that region are skipped.
/// - `DEGENERATE_BOX` (warning): zero width or zero height.
/// - `SKEWED_BOX` (warning): corners are not the box's own bounding
///   rectangle; it will be treated as one anyway.
/// - `EMPTY_TEXT` (warning): text is empty or whitespace.
pub fn validate_regions(regions: &[TextRegion]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (index, region) in regions.iter().enumerate() {
        check_region(index, region, &mut issues);
    }
    issues
}

/// Like [`validate_regions`], but also reports `INVALID_BOX_SHAPE` (error)
/// for a box without exactly eight coordinates. Such a region gets no
/// further checks.
pub fn validate_unchecked_regions(regions: &[UncheckedRegion]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (index, raw) in regions.iter().enumerate() {
        match raw.to_region() {
            Ok(region) => check_region(index, &region, &mut issues),
            Err(e) => issues.push(ValidationIssue::with_location(
                Severity::Error,
                "INVALID_BOX_SHAPE",
                e.to_string(),
                format!("region {index}"),
            )),
        }
    }
    issues
}

fn check_region(index: usize, region: &TextRegion, issues: &mut Vec<ValidationIssue>) {
    let location = format!("region {index}");

    if let Some((position, value)) = region.quad.first_non_finite() {
        issues.push(ValidationIssue::with_location(
            Severity::Error,
            "NON_FINITE_COORDINATE",
            format!("coordinate {position} is {value}"),
            location,
        ));
        return;
    }

    let bbox = region.bbox();
    if bbox.width() == 0.0 || bbox.height() == 0.0 {
        issues.push(ValidationIssue::with_location(
            Severity::Warning,
            "DEGENERATE_BOX",
            format!("box has zero area ({}x{})", bbox.width(), bbox.height()),
            location.clone(),
        ));
    } else if !region.quad.is_axis_aligned() {
        issues.push(ValidationIssue::with_location(
            Severity::Warning,
            "SKEWED_BOX",
            "box is not axis-aligned; its bounding rectangle is used",
            location.clone(),
        ));
    }

    if region.text.trim().is_empty() {
        issues.push(ValidationIssue::with_location(
            Severity::Warning,
            "EMPTY_TEXT",
            "region has no text",
            location,
        ));
    }
}
