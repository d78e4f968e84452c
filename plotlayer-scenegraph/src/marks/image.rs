use plotlayer_common::types::Rect;
use serde::{Deserialize, Serialize};

use super::mark::SceneMark;

/// Image drawn from a location the engine resolves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneImageMark {
    pub name: String,
    pub src: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub zindex: Option<i32>,
}

impl SceneImageMark {
    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<SceneImageMark> for SceneMark {
    fn from(mark: SceneImageMark) -> Self {
        SceneMark::Image(mark)
    }
}
