use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::label::LabelDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeomRole {
    /// Draws the data
    Primary,
    /// Hosts secondary visuals such as labels without representing new data
    Guide,
}

/// Fields and/or constant values bound to one visual channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelBinding {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Value>,
}

impl ChannelBinding {
    pub fn fields<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            values: vec![],
        }
    }

    pub fn values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            fields: vec![],
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_values<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// A geometry the rendering engine should draw.
///
/// Built fresh on every render pass; optional style parameters left as `None`
/// are chosen by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub role: GeomRole,
    pub position: ChannelBinding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ChannelBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ChannelBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ChannelBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
    pub visible: bool,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelDescriptor>,
}

impl GeometryDescriptor {
    pub fn new(kind: impl Into<String>, role: GeomRole, position: ChannelBinding) -> Self {
        Self {
            kind: kind.into(),
            role,
            position,
            color: None,
            size: None,
            shape: None,
            radius: None,
            intensity: None,
            style: None,
            visible: true,
            active: true,
            label: None,
        }
    }

    /// Every field bound to any channel, position first
    pub fn bound_fields(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(&self.position)
            .chain(self.color.as_ref())
            .chain(self.size.as_ref())
            .chain(self.shape.as_ref())
            .flat_map(|binding| binding.fields.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_style_parameters_are_not_serialized() {
        let geom = GeometryDescriptor::new(
            "linearHeatmap",
            GeomRole::Primary,
            ChannelBinding::fields(["x", "y"]),
        );
        let value = serde_json::to_value(&geom).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("radius"));
        assert!(!object.contains_key("intensity"));
        assert_eq!(value["position"], json!({"fields": ["x", "y"]}));
    }

    #[test]
    fn test_bound_fields() {
        let mut geom =
            GeometryDescriptor::new("point", GeomRole::Guide, ChannelBinding::fields(["a", "b"]));
        geom.color = Some(ChannelBinding::fields(["c"]).with_values(["red", "blue"]));
        geom.size = Some(ChannelBinding::values([4]));
        assert_eq!(geom.bound_fields().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
