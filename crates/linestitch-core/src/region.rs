use crate::error::StitchError;
use crate::geometry::{BBox, QuadBox};

/// A detected text region: a box paired with its recognized text.
///
/// Both the stitcher's input fragments and its merged lines have this shape.
/// In JSON the box is stored under the `"box"` key:
/// `{"box": [x0, y0, x1, y1, x2, y2, x3, y3], "text": "..."}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRegion {
    /// The detected quadrilateral.
    #[cfg_attr(feature = "serde", serde(rename = "box"))]
    pub quad: QuadBox,
    /// Recognized text inside the box.
    pub text: String,
}

impl TextRegion {
    pub fn new(quad: impl Into<QuadBox>, text: impl Into<String>) -> Self {
        Self {
            quad: quad.into(),
            text: text.into(),
        }
    }

    /// Build a region from an untyped coordinate slice.
    pub fn from_coords(coords: &[f64], text: impl Into<String>) -> Result<Self, StitchError> {
        Ok(Self::new(QuadBox::from_slice(coords)?, text))
    }

    /// Bounding rectangle of the region's box.
    pub fn bbox(&self) -> BBox {
        self.quad.bbox()
    }

    /// Fail if any coordinate is NaN or infinite.
    pub fn check_finite(&self) -> Result<(), StitchError> {
        match self.quad.first_non_finite() {
            Some((position, value)) => Err(StitchError::NonFiniteCoordinate { position, value }),
            None => Ok(()),
        }
    }
}
