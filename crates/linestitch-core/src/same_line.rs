use crate::geometry::QuadBox;

/// Default minimum vertical overlap ratio for two boxes on the same line.
pub const DEFAULT_MIN_Y_OVERLAP_RATIO: f64 = 0.8;

/// Check whether two boxes sit on the same horizontal text line.
///
/// The boxes must overlap vertically. With `min_y_overlap_ratio` set to
/// `Some(r)`, the length of the shared y-segment must also be at least
/// `r` times the height of *either* box, so a short fragment can join a
/// tall line. With `None`, any intersection counts, including two extents
/// that only touch.
///
/// The result does not depend on argument order.
pub fn is_on_same_line(a: &QuadBox, b: &QuadBox, min_y_overlap_ratio: Option<f64>) -> bool {
    let (mut upper_min, mut upper_max) = (a.y_min(), a.y_max());
    let (mut lower_min, mut lower_max) = (b.y_min(), b.y_max());

    if upper_min > lower_min {
        std::mem::swap(&mut upper_min, &mut lower_min);
        std::mem::swap(&mut upper_max, &mut lower_max);
    }

    if lower_min > upper_max {
        return false;
    }

    let Some(ratio) = min_y_overlap_ratio else {
        return true;
    };

    // upper_min <= all three, so middle - smallest is the intersection length.
    let mut ys = [lower_min, lower_max, upper_max];
    ys.sort_by(f64::total_cmp);
    let overlap = ys[1] - ys[0];

    overlap >= (upper_max - upper_min) * ratio || overlap >= (lower_max - lower_min) * ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, top: f64, x1: f64, bottom: f64) -> QuadBox {
        QuadBox::new([x0, top, x1, top, x1, bottom, x0, bottom])
    }

    #[test]
    fn identical_extents_are_same_line() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 0.0, 30.0, 10.0);
        assert!(is_on_same_line(&a, &b, Some(DEFAULT_MIN_Y_OVERLAP_RATIO)));
    }

    #[test]
    fn disjoint_extents_are_not_same_line() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(0.0, 11.0, 10.0, 20.0);
        assert!(!is_on_same_line(&a, &b, Some(0.8)));
        assert!(!is_on_same_line(&a, &b, None));
    }

    #[test]
    fn touching_extents_count_without_ratio() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(0.0, 10.0, 10.0, 20.0);
        assert!(is_on_same_line(&a, &b, None));
        // Zero-length overlap fails any positive ratio.
        assert!(!is_on_same_line(&a, &b, Some(0.1)));
    }

    #[test]
    fn small_box_inside_tall_box_passes_via_its_own_height() {
        // Overlap is 2: 20% of the tall box, 100% of the small one.
        let tall = rect(0.0, 0.0, 10.0, 10.0);
        let small = rect(20.0, 4.0, 25.0, 6.0);
        assert!(is_on_same_line(&tall, &small, Some(0.8)));
        assert!(is_on_same_line(&small, &tall, Some(0.8)));
    }

    #[test]
    fn partial_overlap_below_ratio_fails() {
        // Heights 10 and 10, overlap 5: 50% < 80%.
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(0.0, 5.0, 10.0, 15.0);
        assert!(!is_on_same_line(&a, &b, Some(0.8)));
        assert!(is_on_same_line(&a, &b, Some(0.5)));
    }

    #[test]
    fn overlap_exactly_at_threshold_passes() {
        // Overlap 8 of height 10.
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(0.0, 2.0, 10.0, 12.0);
        assert!(is_on_same_line(&a, &b, Some(0.8)));
    }

    #[test]
    fn zero_ratio_accepts_any_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(0.0, 9.5, 10.0, 30.0);
        assert!(is_on_same_line(&a, &b, Some(0.0)));
    }

    #[test]
    fn equal_tops_are_symmetric() {
        let a = rect(0.0, 0.0, 10.0, 4.0);
        let b = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            is_on_same_line(&a, &b, Some(0.8)),
            is_on_same_line(&b, &a, Some(0.8))
        );
        assert!(is_on_same_line(&a, &b, Some(0.8)));
    }

    #[test]
    fn non_rectangular_quads_use_extents() {
        let a = QuadBox::new([0.0, 1.0, 10.0, 0.0, 10.0, 9.0, 0.0, 10.0]);
        let b = rect(15.0, 1.0, 25.0, 9.0);
        assert!(is_on_same_line(&a, &b, Some(0.8)));
    }
}
