use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_dash: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_style: Option<String>,
}

/// Point overlay drawn on top of the primary geometry.
///
/// Invisible unless the caller opts in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointConfig {
    #[serde(default)]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PointStyle>,
}
