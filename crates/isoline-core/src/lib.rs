//! Isocontour extraction from dense 2D scalar fields.
//!
//! Implements the marching-squares algorithm with:
//! - Per-cell case classification against a static edge-pair table
//! - Linear edge interpolation for crossing points
//! - Row-partitioned parallel traversal over worker-local buffers

pub mod cell;
pub mod error;
pub mod extract;
pub mod field;
pub mod geometry;
pub mod tables;

pub use cell::evaluate_cell;
pub use error::{ContourError, ContourResult};
pub use extract::extract_contour;
pub use field::ScalarField;
pub use geometry::{lerp, LineSegment, Point};
