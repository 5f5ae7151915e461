//! Escape-time sampling of quadratic Julia sets.
//!
//! For a fixed parameter `c`, [`escape::estimate`] counts how many steps of
//! `z -> z^2 + c` an orbit takes to leave the escape boundary, and
//! [`grid::sample_grid`] evaluates that count over a rectangular grid of
//! starting points. [`config::GridConfig`] exposes the same sampler with a
//! custom region, y-axis origin and parallel evaluation.

pub mod cardioid;
pub mod config;
pub mod error;
pub mod escape;
pub mod field;
pub mod grid;
pub mod screen;
pub mod summary;

pub use cardioid::main_cardioid;
pub use config::{GridConfig, Strategy};
pub use error::{Error, Result};
pub use escape::{escape_boundary, estimate};
pub use field::{CountField, Sample};
pub use grid::{sample_grid, AxisOrigin, Region};
pub use num_complex::Complex64;
pub use screen::Size;
pub use summary::Summary;
