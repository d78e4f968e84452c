use plotlayer_common::types::{ColorOrGradient, Rect};
use serde::{Deserialize, Serialize};

use super::mark::SceneMark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: ColorOrGradient,
    pub stroke: Option<ColorOrGradient>,
    pub stroke_width: Option<f32>,
    pub corner_radius: f32,
    pub zindex: Option<i32>,
}

impl SceneRectMark {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_fill(mut self, fill: ColorOrGradient) -> Self {
        self.fill = fill;
        self
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            fill: ColorOrGradient::transparent(),
            stroke: None,
            stroke_width: None,
            corner_radius: 0.0,
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}
