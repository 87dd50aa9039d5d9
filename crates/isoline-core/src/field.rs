//! Dense row-major scalar field container.

use crate::error::{ContourError, ContourResult};

/// An immutable `width x height` grid of f32 samples, row-major,
/// indexed `[y * width + x]`. The extraction engine only ever reads it,
/// so a shared reference is safe across workers without synchronization.
#[derive(Debug, Clone)]
pub struct ScalarField {
    values: Vec<f32>,
    width: usize,
    height: usize,
}

impl ScalarField {
    /// Wrap an existing sample buffer.
    pub fn new(values: Vec<f32>, width: usize, height: usize) -> ContourResult<Self> {
        let expected = width * height;
        if values.len() != expected {
            return Err(ContourError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Build a field by sampling `f(x, y)` at every grid point.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            values,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `(x, y)`. Panics on out-of-bounds like slice indexing.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }

    /// The raw row-major sample buffer.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
