pub mod components;
pub mod constants;
pub mod error;
pub mod geoms;
pub mod layer;
pub mod options;
pub mod plots;
pub mod registry;

pub use crate::layer::{AnyLayer, Layer, ViewLayer};
pub use crate::plots::heatmap::{Heatmap, HeatmapLayer};
