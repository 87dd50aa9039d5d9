//! Per-cell marching-squares evaluation.

use crate::geometry::{lerp, LineSegment, Point};
use crate::tables::{EDGE_CORNERS, EDGE_PAIRS};

/// Classify one cell and append its contour segments (0, 1, or 2) to `out`.
///
/// `values` holds the four corner samples clockwise from the top-left:
/// `[top-left, top-right, bottom-right, bottom-left]`. A corner counts as
/// "inside" when its value is `>=` the isolevel, so boundary samples land on
/// the contour rather than outside it.
///
/// Appending into a caller-owned buffer instead of returning a fresh Vec per
/// cell keeps the hot traversal loop allocation-free.
pub fn evaluate_cell(
    cell_x: f32,
    cell_y: f32,
    values: [f32; 4],
    isolevel: f32,
    out: &mut Vec<LineSegment>,
) {
    let mut case_idx = 0usize;

    if values[0] >= isolevel {
        case_idx |= 1;
    }
    if values[1] >= isolevel {
        case_idx |= 2;
    }
    if values[2] >= isolevel {
        case_idx |= 4;
    }
    if values[3] >= isolevel {
        case_idx |= 8;
    }

    // All corners on the same side: no crossing.
    if case_idx == 0 || case_idx == 15 {
        return;
    }

    let corners = [
        Point::new(cell_x, cell_y),
        Point::new(cell_x + 1.0, cell_y),
        Point::new(cell_x + 1.0, cell_y + 1.0),
        Point::new(cell_x, cell_y + 1.0),
    ];

    let edge_point = |e: usize| -> Point {
        let [c0, c1] = EDGE_CORNERS[e];
        lerp(corners[c0], corners[c1], values[c0], values[c1], isolevel)
    };

    let pairs = &EDGE_PAIRS[case_idx];
    let mut i = 0;
    while i < 4 && pairs[i] != -1 {
        out.push(LineSegment {
            start: edge_point(pairs[i] as usize),
            end: edge_point(pairs[i + 1] as usize),
        });
        i += 2;
    }
}
