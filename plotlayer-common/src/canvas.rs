use serde::{Deserialize, Serialize};

use crate::types::Rect;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDimensions {
    pub size: [f32; 2],
    pub scale: f32,
}

impl CanvasDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            scale: 1.0,
        }
    }

    pub fn to_physical_width(&self) -> u32 {
        (self.size[0] * self.scale) as u32
    }

    pub fn to_physical_height(&self) -> u32 {
        (self.size[1] * self.scale) as u32
    }

    /// The full canvas in logical coordinates
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size[0], self.size[1])
    }
}
