use crate::error::StitchError;

/// Number of coordinates in a [`QuadBox`].
pub const QUAD_COORDS: usize = 8;

/// Axis-aligned bounding box with top-left origin coordinate system.
///
/// - `x0`: left edge
/// - `top`: top edge (smallest y)
/// - `x1`: right edge
/// - `bottom`: bottom edge (largest y)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Compute the union of two bounding boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A detected text box: four corner points flattened as
/// `[x0, y0, x1, y1, x2, y2, x3, y3]`.
///
/// The quadrilateral need not be axis-aligned, but every geometric query
/// treats it as its bounding rectangle (min/max over all x and all y).
/// Serialized as a flat array of eight numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct QuadBox(pub [f64; QUAD_COORDS]);

impl QuadBox {
    pub fn new(coords: [f64; QUAD_COORDS]) -> Self {
        Self(coords)
    }

    /// Build a quad from a slice, failing unless it holds exactly eight values.
    pub fn from_slice(coords: &[f64]) -> Result<Self, StitchError> {
        let coords: [f64; QUAD_COORDS] = coords
            .try_into()
            .map_err(|_| StitchError::InvalidBoxShape(coords.len()))?;
        Ok(Self(coords))
    }

    /// The rectangle of `bbox` as corners in top-left, top-right,
    /// bottom-right, bottom-left order.
    pub fn from_bbox(bbox: &BBox) -> Self {
        Self([
            bbox.x0, bbox.top, bbox.x1, bbox.top, bbox.x1, bbox.bottom, bbox.x0, bbox.bottom,
        ])
    }

    /// The raw coordinates.
    pub fn coords(&self) -> &[f64; QUAD_COORDS] {
        &self.0
    }

    /// The four corner points as `(x, y)` pairs.
    pub fn points(&self) -> [(f64, f64); 4] {
        let c = &self.0;
        [(c[0], c[1]), (c[2], c[3]), (c[4], c[5]), (c[6], c[7])]
    }

    fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().step_by(2).copied()
    }

    fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().skip(1).step_by(2).copied()
    }

    pub fn x_min(&self) -> f64 {
        self.xs().fold(f64::INFINITY, f64::min)
    }

    pub fn x_max(&self) -> f64 {
        self.xs().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn y_min(&self) -> f64 {
        self.ys().fold(f64::INFINITY, f64::min)
    }

    pub fn y_max(&self) -> f64 {
        self.ys().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Bounding rectangle over all corner coordinates.
    pub fn bbox(&self) -> BBox {
        BBox::new(self.x_min(), self.y_min(), self.x_max(), self.y_max())
    }

    /// Index and value of the first NaN or infinite coordinate, if any.
    pub fn first_non_finite(&self) -> Option<(usize, f64)> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
    }

    /// Returns `true` if every corner lies on a corner of the bounding rectangle.
    pub fn is_axis_aligned(&self) -> bool {
        let bbox = self.bbox();
        self.points().iter().all(|&(x, y)| {
            (x == bbox.x0 || x == bbox.x1) && (y == bbox.top || y == bbox.bottom)
        })
    }
}

impl From<[f64; QUAD_COORDS]> for QuadBox {
    fn from(coords: [f64; QUAD_COORDS]) -> Self {
        Self(coords)
    }
}

impl From<&BBox> for QuadBox {
    fn from(bbox: &BBox) -> Self {
        Self::from_bbox(bbox)
    }
}

impl TryFrom<Vec<f64>> for QuadBox {
    type Error = StitchError;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&coords)
    }
}

impl From<QuadBox> for Vec<f64> {
    fn from(quad: QuadBox) -> Self {
        quad.0.to_vec()
    }
}
