pub mod background;
pub mod component;
pub mod constants;
pub mod error;
pub mod legend;
pub mod padding;
