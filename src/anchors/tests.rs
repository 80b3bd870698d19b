use super::*;
use crate::edges::{GradientField, MagnitudeBuckets};
use crate::geometry::Pixel;

const EDGE: f32 = 141.421_36;

/// `n × n` field with a main-diagonal edge of magnitude 200 (gradient at
/// 135°) over a horizontal-gradient background of magnitude 10.
fn diagonal_field(n: usize) -> GradientField {
    let mut gx = vec![10.0; n * n];
    let mut gy = vec![0.0; n * n];
    for i in 0..n {
        gx[i * n + i] = EDGE;
        gy[i * n + i] = -EDGE;
    }
    GradientField::from_components(n, n, gx, gy).unwrap()
}

fn extract(field: &GradientField) -> AlignedAnchors {
    let buckets = MagnitudeBuckets::from_field(field, 256);
    extract_aligned_anchors(field, &buckets, 24.0, &AnchorParams::default())
}

#[test]
fn diagonal_edge_yields_disjoint_consecutive_triplets() {
    let anchors = extract(&diagonal_field(50));
    assert_eq!(anchors.group_count(), 16);
    for id in 0..anchors.group_count() {
        let base = 3 * id as i32;
        let expected = [
            Pixel::new(base, base),
            Pixel::new(base + 1, base + 1),
            Pixel::new(base + 2, base + 2),
        ];
        assert_eq!(anchors.group(id), expected, "group {id}");
    }
}

#[test]
fn pixels_belong_to_at_most_one_group() {
    let anchors = extract(&diagonal_field(31));
    let mut seen = std::collections::HashSet::new();
    for px in &anchors.pixels {
        assert!(seen.insert(*px), "{px:?} emitted twice");
    }
}

#[test]
fn weak_field_produces_nothing() {
    let n = 12;
    let field = GradientField::from_components(n, n, vec![10.0; n * n], vec![0.0; n * n]).unwrap();
    assert!(extract(&field).is_empty());
}

#[test]
fn disagreeing_neighbours_block_alignment() {
    // Same magnitudes as the diagonal edge, but every other edge pixel has
    // its gradient rotated by 90°, so level-line neighbours never agree.
    let n = 20;
    let mut gx = vec![10.0; n * n];
    let mut gy = vec![0.0; n * n];
    for i in 0..n {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        gx[i * n + i] = EDGE;
        gy[i * n + i] = -sign * EDGE;
    }
    let field = GradientField::from_components(n, n, gx, gy).unwrap();
    let anchors = extract(&field);
    for group in anchors.groups() {
        let o: Vec<f32> = group.iter().map(|&p| field.orientation(p).unwrap()).collect();
        assert!(
            crate::angle::angle_diff_deg(o[1], o[0]) <= 22.5
                || crate::angle::angle_diff_deg(o[1], o[2]) <= 22.5
        );
    }
}

#[test]
fn margin_threshold_rejects_flat_ridges() {
    let n = 9;
    let mut gx = vec![0.0; n * n];
    // Horizontal gradient column at x = 4 with magnitude 100, neighbours 99.
    for y in 0..n {
        gx[y * n + 3] = 99.0;
        gx[y * n + 4] = 100.0;
        gx[y * n + 5] = 99.0;
    }
    let field = GradientField::from_components(n, n, gx, vec![0.0; n * n]).unwrap();
    assert!(extract(&field).is_empty());

    let params = AnchorParams {
        threshold: 0.5,
        ..AnchorParams::default()
    };
    let buckets = MagnitudeBuckets::from_field(&field, 256);
    let anchors = extract_aligned_anchors(&field, &buckets, 24.0, &params);
    assert!(!anchors.is_empty());
    assert!(anchors.pixels.iter().all(|p| p.x == 4));
}

#[test]
fn initial_lines_follow_level_lines() {
    let field = diagonal_field(50);
    let anchors = extract(&field);
    let lines = anchors.initial_lines(&field);
    assert_eq!(lines.len(), anchors.group_count());
    for (id, line) in lines.iter().enumerate() {
        assert!((line.angle_deg() - 45.0).abs() < 1e-3, "{}", line.angle_deg());
        assert_eq!(line.point, anchors.middle(id).point());
    }
}

#[test]
fn from_pixels_requires_whole_triplets() {
    assert!(AlignedAnchors::from_pixels(vec![Pixel::new(0, 0); 4]).is_none());
    let anchors = AlignedAnchors::from_pixels(vec![Pixel::new(1, 2); 6]).unwrap();
    assert_eq!(anchors.group_count(), 2);
}
