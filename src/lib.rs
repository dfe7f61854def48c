//! Heatfield renders a density heatmap image from a set of 2D point
//! observations.
//!
//! # Pipeline overview
//!
//! 1. **Accumulate**: each point stamps a stack of concentric faint circles
//!    into a single-channel [`DensityGrid`]; overlaps darken toward opacity
//! 2. **Blur**: one fixed approximate-Gaussian pass smooths the discrete
//!    circle edges into a continuous field
//! 3. **Map**: residual lightness per cell inverts into an intensity level
//!    indexing a 256-entry [`GradientTable`] (five hue keyframes, linear
//!    alpha falloff, cached on disk between runs)
//! 4. **Composite**: gradient colours blend over the background image (or
//!    solid white) and the result is written out as lossless PNG
//!
//! The whole pipeline is synchronous and single-threaded; every buffer is
//! owned by the render call that created it. The gradient cache file is
//! the only state shared across calls — see [`GradientTable::build_or_load`]
//! for its (deliberately trusting) semantics.
#![forbid(unsafe_code)]

pub mod blur;
pub mod color;
pub mod composite;
pub mod config;
pub mod density;
pub mod error;
pub mod gradient;
pub mod heatmap;

pub use color::{Rgb, Rgba, hex_to_rgb};
pub use config::HeatmapConfig;
pub use density::{DensityGrid, Point};
pub use error::{HeatfieldError, HeatfieldResult};
pub use gradient::GradientTable;
pub use heatmap::Heatmap;
