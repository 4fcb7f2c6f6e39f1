use crate::error::StitchError;
use crate::geometry::{BBox, QuadBox};
use crate::region::TextRegion;
use crate::same_line::{DEFAULT_MIN_Y_OVERLAP_RATIO, is_on_same_line};

/// Default maximum horizontal gap between neighboring boxes of one line.
pub const DEFAULT_MAX_X_DIST: f64 = 10.0;

/// Options for stitching boxes into lines.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StitchOptions {
    /// Maximum distance between the right edge of one box and the left
    /// edge of the next before the line is split.
    pub max_x_dist: f64,
    /// Minimum vertical overlap ratio for two boxes to chain into one line.
    /// `None` accepts any vertical intersection.
    pub min_y_overlap_ratio: Option<f64>,
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self {
            max_x_dist: DEFAULT_MAX_X_DIST,
            min_y_overlap_ratio: Some(DEFAULT_MIN_Y_OVERLAP_RATIO),
        }
    }
}

impl StitchOptions {
    /// Reject a NaN gap and a negative or non-finite ratio.
    pub fn validate(&self) -> Result<(), StitchError> {
        if self.max_x_dist.is_nan() {
            return Err(StitchError::InvalidOption {
                name: "max_x_dist",
                value: self.max_x_dist,
            });
        }
        if let Some(ratio) = self.min_y_overlap_ratio {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(StitchError::InvalidOption {
                    name: "min_y_overlap_ratio",
                    value: ratio,
                });
            }
        }
        Ok(())
    }
}

/// Regions assigned to one merged output line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineGroup {
    /// Indices into the input slice, left-to-right.
    pub members: Vec<usize>,
}

impl LineGroup {
    /// Number of regions in the group.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no regions.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Sort key for left-to-right order. Adding `0.0` folds `-0.0` into `0.0`
/// so the two tie under `total_cmp`.
fn left_edge(region: &TextRegion) -> f64 {
    region.quad.x_min() + 0.0
}

/// Partition regions into line groups.
///
/// Regions are visited by ascending left edge (stable for ties). Each region
/// not yet claimed starts a chain; every later unclaimed region that is on
/// the same line as the chain's current rightmost member joins it and
/// becomes the new rightmost member. Each chain is then cut wherever the gap
/// between neighbors exceeds `max_x_dist`.
///
/// Groups come out in anchor order, and within a chain left-to-right.
pub fn group_into_lines(regions: &[TextRegion], options: &StitchOptions) -> Vec<LineGroup> {
    let mut order: Vec<usize> = (0..regions.len()).collect();
    order.sort_by(|&a, &b| left_edge(&regions[a]).total_cmp(&left_edge(&regions[b])));

    let quads: Vec<&QuadBox> = order.iter().map(|&idx| &regions[idx].quad).collect();

    let mut consumed = vec![false; order.len()];
    let mut groups = Vec::new();

    for i in 0..order.len() {
        if consumed[i] {
            continue;
        }

        let mut rightmost = i;
        let mut chain = vec![i];
        for j in (i + 1)..order.len() {
            if consumed[j] {
                continue;
            }
            if is_on_same_line(quads[rightmost], quads[j], options.min_y_overlap_ratio) {
                chain.push(j);
                consumed[j] = true;
                rightmost = j;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(anchor = order[i], len = chain.len(), "chained line");

        let mut current = LineGroup {
            members: vec![order[chain[0]]],
        };
        for pair in chain.windows(2) {
            let gap = quads[pair[1]].x_min() - quads[pair[0]].x_max();
            if gap > options.max_x_dist {
                #[cfg(feature = "tracing")]
                tracing::trace!(gap, at = order[pair[1]], "split line");
                groups.push(std::mem::replace(
                    &mut current,
                    LineGroup {
                        members: Vec::new(),
                    },
                ));
            }
            current.members.push(order[pair[1]]);
        }
        groups.push(current);
    }

    groups
}

/// Merge a group into one region.
///
/// The text is the members' texts joined by single spaces; the box is the
/// axis-aligned rectangle over every coordinate of every member, as corners
/// top-left, top-right, bottom-right, bottom-left.
///
/// An empty group yields empty text and an inverted, infinite box.
///
/// # Panics
///
/// Panics if the group refers to an index outside `regions`.
pub fn merge_group(regions: &[TextRegion], group: &LineGroup) -> TextRegion {
    let bbox = group
        .members
        .iter()
        .map(|&idx| regions[idx].bbox())
        .reduce(|acc, b| acc.union(&b))
        .unwrap_or(BBox::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        ));

    let text = group
        .members
        .iter()
        .map(|&idx| regions[idx].text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    TextRegion {
        quad: QuadBox::from_bbox(&bbox),
        text,
    }
}

/// Stitch fragmented word boxes into text lines.
///
/// Zero or one region is returned unchanged. Otherwise each group from
/// [`group_into_lines`] becomes one region via [`merge_group`].
///
/// Malformed coordinates are not checked; see
/// [`try_stitch_boxes_into_lines`] for the validating variant.
pub fn stitch_boxes_into_lines(regions: &[TextRegion], options: &StitchOptions) -> Vec<TextRegion> {
    if regions.len() <= 1 {
        return regions.to_vec();
    }

    let groups = group_into_lines(regions, options);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        regions = regions.len(),
        lines = groups.len(),
        "stitched boxes into lines"
    );

    groups
        .iter()
        .map(|group| merge_group(regions, group))
        .collect()
}

/// Like [`stitch_boxes_into_lines`], but validates the options and every
/// region first.
///
/// Fails on the first region with a NaN or infinite coordinate, reporting
/// its index.
pub fn try_stitch_boxes_into_lines(
    regions: &[TextRegion],
    options: &StitchOptions,
) -> Result<Vec<TextRegion>, StitchError> {
    options.validate()?;
    for (index, region) in regions.iter().enumerate() {
        region.check_finite().map_err(|e| e.at_region(index))?;
    }
    Ok(stitch_boxes_into_lines(regions, options))
}
