pub mod axis;
pub mod label;
