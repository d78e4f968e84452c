pub mod canvas;
pub mod config;
pub mod error;
pub mod merge;
pub mod types;
