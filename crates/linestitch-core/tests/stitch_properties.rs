//! Behavioral properties of line stitching over hand-written and
//! pseudo-random box layouts.

use linestitch_core::*;

/// Small deterministic generator so layouts are reproducible across runs.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 11
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = self.next_u64() as f64 / (1u64 << 53) as f64;
        (lo + unit * (hi - lo)).round()
    }
}

fn rect(x0: f64, top: f64, x1: f64, bottom: f64) -> QuadBox {
    QuadBox::from_bbox(&BBox::new(x0, top, x1, bottom))
}

fn region(text: &str, x0: f64, top: f64, x1: f64, bottom: f64) -> TextRegion {
    TextRegion::new(rect(x0, top, x1, bottom), text)
}

/// Word-like boxes scattered over a few rows with vertical jitter.
fn random_layout(rng: &mut Lcg, n: usize) -> Vec<TextRegion> {
    (0..n)
        .map(|i| {
            let x0 = rng.range(0.0, 200.0);
            let w = rng.range(1.0, 30.0);
            let row = rng.range(0.0, 4.0);
            let top = row * 14.0 + rng.range(-3.0, 3.0);
            let h = rng.range(4.0, 12.0);
            region(&format!("w{i}"), x0, top, x0 + w, top + h)
        })
        .collect()
}

const RATIOS: [Option<f64>; 5] = [None, Some(0.0), Some(0.5), Some(0.8), Some(1.0)];

#[test]
fn trivial_inputs_are_returned_unchanged() {
    let opts = StitchOptions::default();
    assert!(stitch_boxes_into_lines(&[], &opts).is_empty());

    let one = vec![TextRegion::new(
        [3.0, 1.0, 9.0, 2.0, 8.0, 7.0, 2.0, 6.0],
        "only",
    )];
    assert_eq!(stitch_boxes_into_lines(&one, &opts), one);
}

#[test]
fn every_region_lands_in_exactly_one_group() {
    let mut rng = Lcg(7);
    for n in [2, 3, 10, 40, 120] {
        let regions = random_layout(&mut rng, n);
        for ratio in RATIOS {
            let opts = StitchOptions {
                min_y_overlap_ratio: ratio,
                ..StitchOptions::default()
            };
            let groups = group_into_lines(&regions, &opts);
            let mut seen: Vec<usize> = groups.iter().flat_map(|g| g.members.clone()).collect();
            assert!(groups.iter().all(|g| !g.is_empty()));
            seen.sort_unstable();
            assert_eq!(seen, (0..n).collect::<Vec<_>>());
            assert_eq!(stitch_boxes_into_lines(&regions, &opts).len(), groups.len());
        }
    }
}

#[test]
fn same_line_test_is_symmetric() {
    let mut rng = Lcg(42);
    let regions = random_layout(&mut rng, 60);
    for a in &regions {
        for b in &regions {
            for ratio in RATIOS {
                assert_eq!(
                    is_on_same_line(&a.quad, &b.quad, ratio),
                    is_on_same_line(&b.quad, &a.quad, ratio),
                    "asymmetric for {:?} / {:?} at {:?}",
                    a.quad,
                    b.quad,
                    ratio
                );
            }
        }
    }
}

#[test]
fn no_ratio_means_any_vertical_intersection() {
    let mut rng = Lcg(3);
    let regions = random_layout(&mut rng, 60);
    for a in &regions {
        for b in &regions {
            let intersects = a.quad.y_min().max(b.quad.y_min()) <= a.quad.y_max().min(b.quad.y_max());
            assert_eq!(is_on_same_line(&a.quad, &b.quad, None), intersects);
        }
    }
}

#[test]
fn horizontal_gap_splits_aligned_boxes() {
    let regions = vec![
        region("one", 0.0, 0.0, 10.0, 10.0),
        region("two", 15.0, 0.0, 25.0, 10.0),
        region("three", 50.0, 0.0, 60.0, 10.0),
    ];
    let out = stitch_boxes_into_lines(&regions, &StitchOptions::default());
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].text, "one two");
    assert_eq!(out[1].text, "three");
}

#[test]
fn merged_box_spans_all_members() {
    let regions = vec![
        TextRegion::new([0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0], "A"),
        TextRegion::new([20.0, 2.0, 30.0, 2.0, 30.0, 8.0, 20.0, 8.0], "B"),
    ];
    let out = stitch_boxes_into_lines(&regions, &StitchOptions::default());
    assert_eq!(
        out,
        vec![TextRegion::new(
            [0.0, 0.0, 30.0, 0.0, 30.0, 10.0, 0.0, 10.0],
            "A B"
        )]
    );
}

#[test]
fn merged_boxes_contain_their_members() {
    let mut rng = Lcg(99);
    let regions = random_layout(&mut rng, 80);
    let opts = StitchOptions::default();
    for group in group_into_lines(&regions, &opts) {
        let merged = merge_group(&regions, &group).bbox();
        for &idx in &group.members {
            let b = regions[idx].bbox();
            assert!(merged.x0 <= b.x0 && merged.x1 >= b.x1);
            assert!(merged.top <= b.top && merged.bottom >= b.bottom);
        }
    }
}

#[test]
fn group_members_are_ordered_left_to_right_within_gap() {
    let mut rng = Lcg(11);
    let regions = random_layout(&mut rng, 80);
    let opts = StitchOptions::default();
    for group in group_into_lines(&regions, &opts) {
        for pair in group.members.windows(2) {
            let (prev, next) = (&regions[pair[0]].quad, &regions[pair[1]].quad);
            assert!(prev.x_min() <= next.x_min());
            assert!(next.x_min() - prev.x_max() <= opts.max_x_dist);
        }
    }
}

#[test]
fn end_to_end_hel_lo() {
    let regions = vec![
        TextRegion::new([0.0, 0.0, 5.0, 0.0, 5.0, 5.0, 0.0, 5.0], "Hel"),
        TextRegion::new([6.0, 1.0, 12.0, 1.0, 12.0, 6.0, 6.0, 6.0], "lo"),
    ];
    let out = stitch_boxes_into_lines(&regions, &StitchOptions::default());
    assert_eq!(
        out,
        vec![TextRegion::new(
            [0.0, 0.0, 12.0, 0.0, 12.0, 6.0, 0.0, 6.0],
            "Hel lo"
        )]
    );
}

#[test]
fn output_is_deterministic() {
    let mut rng = Lcg(2024);
    let regions = random_layout(&mut rng, 100);
    let opts = StitchOptions::default();
    let first = stitch_boxes_into_lines(&regions, &opts);
    for _ in 0..5 {
        assert_eq!(stitch_boxes_into_lines(&regions, &opts), first);
    }
}

#[test]
fn equal_left_edges_keep_input_order() {
    // Two stacked lines starting at the same x; the lower one is listed first.
    let regions = vec![
        region("low", 0.0, 50.0, 20.0, 60.0),
        region("high", 0.0, 0.0, 20.0, 10.0),
    ];
    let out = stitch_boxes_into_lines(&regions, &StitchOptions::default());
    assert_eq!(out[0].text, "low");
    assert_eq!(out[1].text, "high");

    let reversed: Vec<TextRegion> = regions.iter().rev().cloned().collect();
    let out = stitch_boxes_into_lines(&reversed, &StitchOptions::default());
    assert_eq!(out[0].text, "high");
    assert_eq!(out[1].text, "low");
}

#[test]
fn signed_zero_left_edges_tie_in_input_order() {
    let regions = vec![
        region("low", 0.0, 50.0, 20.0, 60.0),
        region("high", -0.0, 0.0, 20.0, 10.0),
    ];
    let out = stitch_boxes_into_lines(&regions, &StitchOptions::default());
    let texts: Vec<&str> = out.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["low", "high"]);

    let groups = group_into_lines(&regions, &StitchOptions::default());
    assert_eq!(groups[0].members, vec![0]);
    assert_eq!(groups[1].members, vec![1]);
}

#[test]
fn chain_follows_drifting_baseline() {
    // Each box overlaps its left neighbor by 80% of its height, drifting
    // downwards; the last box no longer overlaps the first at all.
    let regions: Vec<TextRegion> = (0..6)
        .map(|i| {
            let x = i as f64 * 12.0;
            let top = i as f64 * 2.0;
            region(&format!("{i}"), x, top, x + 10.0, top + 10.0)
        })
        .collect();
    assert!(!is_on_same_line(
        &regions[0].quad,
        &regions[5].quad,
        Some(0.8)
    ));

    let out = stitch_boxes_into_lines(&regions, &StitchOptions::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "0 1 2 3 4 5");
    assert_eq!(out[0].bbox(), BBox::new(0.0, 0.0, 70.0, 20.0));
}

#[test]
fn anchor_is_the_rightmost_member_not_the_first() {
    // b joins a; c matches a but not b, so it stays out of the chain.
    let regions = vec![
        region("a", 0.0, 0.0, 10.0, 20.0),
        region("b", 12.0, 0.0, 22.0, 4.0),
        region("c", 24.0, 12.0, 34.0, 20.0),
    ];
    assert!(is_on_same_line(&regions[0].quad, &regions[2].quad, Some(0.8)));
    assert!(!is_on_same_line(&regions[1].quad, &regions[2].quad, Some(0.8)));

    let out = stitch_boxes_into_lines(&regions, &StitchOptions::default());
    let texts: Vec<&str> = out.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["a b", "c"]);
}

#[test]
fn try_stitch_rejects_infinite_coordinates() {
    let regions = vec![
        region("fine", 0.0, 0.0, 10.0, 10.0),
        region("also fine", 12.0, 0.0, 20.0, 10.0),
        TextRegion::new([0.0, 0.0, 1.0, 0.0, 1.0, f64::NEG_INFINITY, 0.0, 1.0], "bad"),
    ];
    let err = try_stitch_boxes_into_lines(&regions, &StitchOptions::default()).unwrap_err();
    assert_eq!(
        err,
        StitchError::NonFiniteCoordinate {
            position: 5,
            value: f64::NEG_INFINITY
        }
        .at_region(2)
    );
}
