pub mod group;
pub mod image;
pub mod mark;
pub mod rect;
pub mod text;
