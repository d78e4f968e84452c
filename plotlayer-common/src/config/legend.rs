use serde::{Deserialize, Serialize};
use strum::VariantNames;

use super::default_true;

#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LegendPosition {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    BottomCenter,
    BottomLeft,
    BottomRight,
    LeftTop,
    LeftCenter,
    LeftBottom,
    RightTop,
    RightCenter,
    RightBottom,
}

/// Edge of the plot a legend is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Placement of a legend along its edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendAlign {
    Start,
    Center,
    End,
}

impl LegendPosition {
    pub fn side(&self) -> LegendSide {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => LegendSide::Top,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => LegendSide::Bottom,
            Self::LeftTop | Self::LeftCenter | Self::LeftBottom => LegendSide::Left,
            Self::RightTop | Self::RightCenter | Self::RightBottom => LegendSide::Right,
        }
    }

    pub fn align(&self) -> LegendAlign {
        match self {
            Self::TopLeft | Self::BottomLeft | Self::LeftTop | Self::RightTop => LegendAlign::Start,
            Self::TopCenter | Self::BottomCenter | Self::LeftCenter | Self::RightCenter => {
                LegendAlign::Center
            }
            Self::TopRight | Self::BottomRight | Self::LeftBottom | Self::RightBottom => {
                LegendAlign::End
            }
        }
    }

    /// Legends on the top and bottom edges are laid out horizontally
    pub fn is_horizontal(&self) -> bool {
        matches!(self.side(), LegendSide::Top | LegendSide::Bottom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendTextConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub position: LegendPosition,
    /// Length of the color bar along the legend's main direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Thickness of the color bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<LegendTextConfig>,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            visible: true,
            position: LegendPosition::default(),
            width: None,
            height: None,
            text: None,
        }
    }
}
