use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Image,
}

/// Background box behind the plot area.
///
/// Only drawn with a fixed padding box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundConfig {
    #[serde(default, rename = "type")]
    pub kind: BackgroundKind,
    /// Fill color for `color` backgrounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Image location for `image` backgrounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}
