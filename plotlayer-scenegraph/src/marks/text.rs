use plotlayer_common::types::Rect;
use serde::{Deserialize, Serialize};

use super::mark::SceneMark;

/// Average glyph advance as a fraction of the font size, used when no text
/// measurer is available
pub const APPROX_CHAR_WIDTH_RATIO: f32 = 0.6;

pub const DEFAULT_FONT_SIZE: f32 = 12.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneTextMark {
    pub name: String,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: [f32; 4],
    pub font_size: f32,
    pub zindex: Option<i32>,
}

impl SceneTextMark {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            ..Default::default()
        }
    }

    pub fn estimated_width(&self) -> f32 {
        self.text.chars().count() as f32 * self.font_size * APPROX_CHAR_WIDTH_RATIO
    }

    /// Estimated bounds honoring alignment and baseline
    pub fn bounding_box(&self) -> Rect {
        let width = self.estimated_width();
        let height = self.font_size;
        let x = match self.align {
            TextAlign::Left => self.x,
            TextAlign::Center => self.x - width / 2.0,
            TextAlign::Right => self.x - width,
        };
        let y = match self.baseline {
            TextBaseline::Top => self.y,
            TextBaseline::Middle => self.y - height / 2.0,
            TextBaseline::Bottom => self.y - height,
        };
        Rect::new(x, y, width, height)
    }
}

impl Default for SceneTextMark {
    fn default() -> Self {
        Self {
            name: "text_mark".to_string(),
            text: String::new(),
            x: 0.0,
            y: 0.0,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            color: [0.0, 0.0, 0.0, 1.0],
            font_size: DEFAULT_FONT_SIZE,
            zindex: None,
        }
    }
}

impl From<SceneTextMark> for SceneMark {
    fn from(mark: SceneTextMark) -> Self {
        SceneMark::Text(mark)
    }
}
