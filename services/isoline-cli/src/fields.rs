//! Synthetic scalar field generators.

use clap::ValueEnum;
use rand::{Rng, SeedableRng};

use isoline_core::ScalarField;

/// Which synthetic field to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldKind {
    /// Distance from the grid center; isolevels are circle radii
    Radial,
    /// Random 0/1 samples; lights up nearly every cell at isolevel 0.5
    Binary,
    /// Overlapping sine hills, a temperature-like pattern
    Smooth,
}

/// Generate a `width x height` field of the requested kind.
pub fn generate(kind: FieldKind, width: usize, height: usize, seed: Option<u64>) -> ScalarField {
    match kind {
        FieldKind::Radial => {
            let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
            ScalarField::from_fn(width, height, |x, y| {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                (dx * dx + dy * dy).sqrt()
            })
        }
        FieldKind::Binary => {
            let mut rng = match seed {
                Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
                None => rand::rngs::StdRng::from_entropy(),
            };
            ScalarField::from_fn(width, height, |_, _| rng.gen_range(0..2) as f32)
        }
        FieldKind::Smooth => ScalarField::from_fn(width, height, |x, y| {
            let fx = x as f32 / width as f32;
            let fy = y as f32 / height as f32;
            let v1 = (fx * std::f32::consts::PI * 4.0).sin() * 20.0;
            let v2 = (fy * std::f32::consts::PI * 4.0).sin() * 20.0;
            let v3 = ((fx + fy) * std::f32::consts::PI * 2.0).sin() * 10.0;
            50.0 + v1 + v2 + v3
        }),
    }
}

/// Evenly spaced isolevels suited to the field's value range.
pub fn default_isolevels(kind: FieldKind, width: usize, count: usize) -> Vec<f32> {
    match kind {
        // Fractions of the largest radius that stays inside the grid.
        FieldKind::Radial => {
            let max_radius = width as f32 / 2.0;
            (1..=count)
                .map(|i| (i as f32 / count as f32) * (max_radius * 0.95))
                .collect()
        }
        FieldKind::Binary => vec![0.5],
        FieldKind::Smooth => {
            // Field spans roughly 0..100 around a mean of 50.
            (1..=count)
                .map(|i| (i as f32 / (count + 1) as f32) * 100.0)
                .collect()
        }
    }
}
