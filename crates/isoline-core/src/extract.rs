//! Parallel grid traversal and segment merging.

use std::ops::Range;

use rayon::prelude::*;

use crate::cell::evaluate_cell;
use crate::error::{ContourError, ContourResult};
use crate::field::ScalarField;
use crate::geometry::LineSegment;

/// Extract the isocontour at `isolevel` from `field` as a flat segment list.
///
/// Cell rows are split into `workers` contiguous ranges, each scanned by one
/// parallel task into a private buffer; the buffers are concatenated after
/// the join. Segment order across workers is unspecified, but the multiset
/// of segments is deterministic for a fixed field and isolevel regardless of
/// `workers`.
///
/// Fields narrower or shorter than 2 samples have no cells and produce an
/// empty result. A worker count of zero is a caller bug and fails with
/// [`ContourError::InvalidWorkerCount`].
pub fn extract_contour(
    field: &ScalarField,
    isolevel: f32,
    workers: usize,
) -> ContourResult<Vec<LineSegment>> {
    if workers == 0 {
        return Err(ContourError::InvalidWorkerCount(workers));
    }

    let (width, height) = (field.width(), field.height());
    if width < 2 || height < 2 {
        return Ok(Vec::new());
    }

    let ranges = partition_rows(height - 1, workers);

    let buffers: Vec<Vec<LineSegment>> = ranges
        .into_par_iter()
        .map(|rows| scan_rows(field, isolevel, rows))
        .collect();

    // Size-known single-pass concatenation; the collect above is the only
    // synchronization point of the whole operation.
    let total = buffers.iter().map(Vec::len).sum();
    let mut segments = Vec::with_capacity(total);
    for buffer in buffers {
        segments.extend(buffer);
    }

    tracing::debug!(
        width,
        height,
        isolevel,
        workers,
        segments = segments.len(),
        "contour extraction complete"
    );

    Ok(segments)
}

/// Split `rows` cell rows into at most `workers` contiguous ranges whose
/// sizes differ by at most one. Fewer ranges come back when there are not
/// enough rows to go around.
pub(crate) fn partition_rows(rows: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.min(rows).max(1);
    let base = rows / workers;
    let remainder = rows % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let len = base + usize::from(i < remainder);
        if len == 0 {
            break;
        }
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

/// Scan a contiguous range of cell rows into a fresh buffer.
///
/// Within a row the two right-corner samples of the current cell are reused
/// as the next cell's left corners, halving field reads per row. The buffer
/// is pre-sized to the 2-segments-per-cell worst case to avoid regrowth.
fn scan_rows(field: &ScalarField, isolevel: f32, rows: Range<usize>) -> Vec<LineSegment> {
    let width = field.width();
    let cells = rows.len() * (width - 1);
    let mut segments = Vec::with_capacity(2 * cells);

    for y in rows {
        let mut left_top = field.get(0, y);
        let mut left_bottom = field.get(0, y + 1);

        for x in 0..width - 1 {
            let right_top = field.get(x + 1, y);
            let right_bottom = field.get(x + 1, y + 1);

            evaluate_cell(
                x as f32,
                y as f32,
                [left_top, right_top, right_bottom, left_bottom],
                isolevel,
                &mut segments,
            );

            left_top = right_top;
            left_bottom = right_bottom;
        }
    }

    segments
}
