use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::default_true;

/// A visual sub-element that can be switched off and optionally styled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleConfig {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            visible: true,
            style: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTitleConfig {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
}

/// Axis block: visual toggles plus the scale hints folded into the field's
/// scale entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub auto_hide_label: bool,
    #[serde(default)]
    pub auto_rotate_label: bool,
    #[serde(default)]
    pub auto_rotate_title: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<ToggleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<ToggleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_line: Option<ToggleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<ToggleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitleConfig>,

    // Scale hints
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nice: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<Value>>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            visible: true,
            auto_hide_label: false,
            auto_rotate_label: false,
            auto_rotate_title: false,
            grid: None,
            line: None,
            tick_line: None,
            label: None,
            title: None,
            scale_type: None,
            nice: None,
            min: None,
            max: None,
            min_limit: None,
            max_limit: None,
            tick_count: None,
            tick_interval: None,
            mask: None,
            domain: None,
        }
    }
}

impl AxisConfig {
    /// Whether a toggle is switched on, treating an absent block as off
    pub fn is_enabled(toggle: &Option<ToggleConfig>) -> bool {
        toggle.as_ref().is_some_and(|t| t.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_axis_from_camel_case() {
        let axis: AxisConfig = serde_json::from_value(json!({
            "autoRotateLabel": true,
            "tickLine": {"visible": false},
            "title": {"offset": 12},
            "type": "cat",
            "tickCount": 5
        }))
        .unwrap();

        assert!(axis.visible);
        assert!(axis.auto_rotate_label);
        assert!(!AxisConfig::is_enabled(&axis.tick_line));
        assert!(!AxisConfig::is_enabled(&axis.grid));
        assert_eq!(axis.title.as_ref().and_then(|t| t.offset), Some(12.0));
        assert!(axis.title.as_ref().is_some_and(|t| t.visible));
        assert_eq!(axis.scale_type.as_deref(), Some("cat"));
        assert_eq!(axis.tick_count, Some(5));
    }

    #[test]
    fn test_malformed_axis_block() {
        let result = serde_json::from_value::<AxisConfig>(json!({"tickCount": "many"}));
        assert!(result.is_err());
    }
}
