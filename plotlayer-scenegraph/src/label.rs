use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Middle,
}

/// Labels attached to a geometry.
///
/// Keys the engine understands are typed; anything else the caller put in the
/// label block is carried along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDescriptor {
    #[serde(rename = "type")]
    pub label_type: String,
    pub fields: Vec<String>,
    #[serde(default)]
    pub position: LabelPosition,
    #[serde(default)]
    pub offset: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
