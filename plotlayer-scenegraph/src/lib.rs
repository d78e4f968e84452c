pub mod axis;
pub mod error;
pub mod geometry;
pub mod label;
pub mod marks;
pub mod recorder;
pub mod surface;
pub mod view;
