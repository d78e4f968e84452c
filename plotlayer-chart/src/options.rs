use plotlayer_common::config::{AxisConfig, LegendConfig, PaddingSpec, TooltipConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::PlotLayerChartError;

/// Options shared by every view based layer.
///
/// Chart types embed this block (flattened) in their own options type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
    #[serde(default)]
    pub padding: PaddingSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,
    /// Free-form label block, interpreted by the label component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
}

impl ViewOptions {
    pub fn x_field(&self) -> Result<&str, PlotLayerChartError> {
        required_field(&self.x_field, "xField")
    }

    pub fn y_field(&self) -> Result<&str, PlotLayerChartError> {
        required_field(&self.y_field, "yField")
    }
}

/// Borrow a field binding, failing with the configuration key when it is unset
pub fn required_field<'a>(
    field: &'a Option<String>,
    key: &str,
) -> Result<&'a str, PlotLayerChartError> {
    field
        .as_deref()
        .ok_or_else(|| PlotLayerChartError::MissingField(key.to_string()))
}

/// Defaults shared by all view based layers. Built fresh on every call.
pub fn view_default_options() -> Value {
    json!({
        "padding": "auto",
        "data": [],
        "xAxis": {
            "visible": true,
            "grid": {"visible": false},
            "line": {"visible": true},
            "tickLine": {"visible": true},
            "label": {"visible": true},
            "title": {"visible": false}
        },
        "yAxis": {
            "visible": true,
            "grid": {"visible": true},
            "line": {"visible": false},
            "tickLine": {"visible": false},
            "label": {"visible": true},
            "title": {"visible": false}
        },
        "tooltip": {
            "visible": true,
            "shared": true
        },
        "legend": {
            "visible": true,
            "position": "bottom-center"
        },
        "animation": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotlayer_common::config::LegendPosition;

    #[test]
    fn test_defaults_deserialize() {
        let options: ViewOptions = serde_json::from_value(view_default_options()).unwrap();
        assert!(options.padding.is_auto());
        assert_eq!(
            options.legend.as_ref().map(|legend| legend.position),
            Some(LegendPosition::BottomCenter)
        );
        assert!(options.label.is_none());
        assert!(matches!(
            options.x_field(),
            Err(PlotLayerChartError::MissingField(key)) if key == "xField"
        ));
    }
}
