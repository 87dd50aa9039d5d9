//! End-to-end extraction tests.
//!
//! Segment order across workers is unspecified, so every comparison here
//! treats results as multisets via a canonical sort.

use isoline_core::{evaluate_cell, extract_contour, LineSegment, ScalarField};
use rand::{Rng, SeedableRng};

/// Canonical order for multiset comparison of segment lists.
fn sorted_coords(segments: &[LineSegment]) -> Vec<[f32; 4]> {
    let mut coords: Vec<[f32; 4]> = segments
        .iter()
        .map(|s| [s.start.x, s.start.y, s.end.x, s.end.y])
        .collect();
    coords.sort_by(|a, b| {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    coords
}

fn radial_field(width: usize, height: usize) -> ScalarField {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    ScalarField::from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        (dx * dx + dy * dy).sqrt()
    })
}

fn noisy_field(width: usize, height: usize, seed: u64) -> ScalarField {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    ScalarField::from_fn(width, height, |_, _| rng.gen_range(0.0..1.0))
}

#[test]
fn center_peak_produces_four_corner_cuts() {
    // A 3x3 field with a single interior peak: each of the four cells
    // touches the center corner, classifying to a single-bit case and
    // cutting one short diagonal near the center.
    let field = ScalarField::new(
        vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        3,
        3,
    )
    .unwrap();

    let segments = extract_contour(&field, 0.5, 1).unwrap();
    assert_eq!(segments.len(), 4);

    // Every crossing sits at distance 0.5 from the center sample (1, 1)
    // along a cell edge.
    for seg in &segments {
        for p in [seg.start, seg.end] {
            let d = (p.x - 1.0).abs() + (p.y - 1.0).abs();
            assert!((d - 0.5).abs() < 1e-6, "unexpected crossing at {p:?}");
        }
    }
}

#[test]
fn worker_count_does_not_change_the_result() {
    let field = noisy_field(64, 48, 7);
    let reference = sorted_coords(&extract_contour(&field, 0.5, 1).unwrap());

    for workers in [2, 3, 4, 7, 16, 64] {
        let result = sorted_coords(&extract_contour(&field, 0.5, workers).unwrap());
        assert_eq!(result, reference, "workers={workers}");
    }
}

#[test]
fn more_workers_than_rows_still_covers_the_grid() {
    let field = radial_field(5, 3);
    let reference = sorted_coords(&extract_contour(&field, 1.5, 1).unwrap());
    let wide = sorted_coords(&extract_contour(&field, 1.5, 100).unwrap());
    assert_eq!(wide, reference);
}

#[test]
fn matches_a_plain_sequential_traversal() {
    // Drive evaluate_cell directly over every interior cell, the way a
    // caller with a custom traversal would, and compare multisets.
    let field = radial_field(32, 32);
    let isolevel = 10.0;

    let mut expected = Vec::new();
    let mut visited = 0usize;
    for y in 0..field.height() - 1 {
        for x in 0..field.width() - 1 {
            visited += 1;
            evaluate_cell(
                x as f32,
                y as f32,
                [
                    field.get(x, y),
                    field.get(x + 1, y),
                    field.get(x + 1, y + 1),
                    field.get(x, y + 1),
                ],
                isolevel,
                &mut expected,
            );
        }
    }

    assert_eq!(visited, (field.width() - 1) * (field.height() - 1));

    let actual = extract_contour(&field, isolevel, 4).unwrap();
    assert_eq!(sorted_coords(&actual), sorted_coords(&expected));
}

#[test]
fn closed_radial_contour_has_matched_endpoints() {
    // A circle contour is a closed loop, so every crossing point is shared
    // by exactly two segments. Neighboring cells interpolate the shared
    // edge from opposite ends, so match with a tolerance rather than bits.
    let field = radial_field(21, 21);
    let segments = extract_contour(&field, 6.0, 2).unwrap();
    assert!(!segments.is_empty());

    let endpoints: Vec<_> = segments
        .iter()
        .flat_map(|s| [s.start, s.end])
        .collect();
    for p in &endpoints {
        let near = endpoints
            .iter()
            .filter(|q| (q.x - p.x).abs() < 1e-3 && (q.y - p.y).abs() < 1e-3)
            .count();
        // The point itself plus its twin on the neighboring cell's edge.
        assert_eq!(near, 2, "endpoint {p:?} not shared by two segments");
    }
}

#[test]
fn binary_field_stress_is_worker_invariant() {
    // 0/1 samples light up nearly every cell, including the saddles.
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let field = ScalarField::from_fn(40, 40, |_, _| rng.gen_range(0..2) as f32);

    let reference = sorted_coords(&extract_contour(&field, 0.5, 1).unwrap());
    for workers in [2, 5, 8] {
        let result = sorted_coords(&extract_contour(&field, 0.5, workers).unwrap());
        assert_eq!(result, reference, "workers={workers}");
    }
}
