use plotlayer_common::types::Rect;
use serde::{Deserialize, Serialize};

use crate::marks::group::SceneGroup;
use crate::marks::image::SceneImageMark;
use crate::marks::rect::SceneRectMark;
use crate::marks::text::SceneTextMark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneMark {
    Rect(SceneRectMark),
    Text(SceneTextMark),
    Image(SceneImageMark),
    Group(SceneGroup),
}

impl SceneMark {
    pub fn zindex(&self) -> Option<i32> {
        match self {
            Self::Rect(mark) => mark.zindex,
            Self::Text(mark) => mark.zindex,
            Self::Image(mark) => mark.zindex,
            Self::Group(mark) => mark.zindex,
        }
    }

    pub fn children(&self) -> &[SceneMark] {
        match self {
            Self::Group(mark) => &mark.marks,
            _ => &[],
        }
    }

    /// Bounds of the mark relative to its parent group
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Self::Rect(mark) => Some(mark.bounding_box()),
            Self::Text(mark) => Some(mark.bounding_box()),
            Self::Image(mark) => Some(mark.bounding_box()),
            Self::Group(mark) => mark.bounding_box(),
        }
    }
}
