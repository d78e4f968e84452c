use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDim {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrient {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisDim {
    /// Default edge an axis of this dimension is drawn on
    pub fn default_orient(&self) -> AxisOrient {
        match self {
            AxisDim::X => AxisOrient::Bottom,
            AxisDim::Y => AxisOrient::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTitleDescriptor {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f32>,
}

/// Axis the rendering engine should draw for a position field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisDescriptor {
    pub dim: AxisDim,
    pub field: String,
    pub visible: bool,
    pub orient: AxisOrient,
    pub grid: bool,
    pub line: bool,
    pub tick_line: bool,
    pub label: bool,
    pub auto_hide_label: bool,
    pub auto_rotate_label: bool,
    pub auto_rotate_title: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitleDescriptor>,
}
