use plotlayer_common::config::{BackgroundConfig, PointConfig};
use plotlayer_common::merge::deep_merge;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::PlotLayerChartError;
use crate::options::{ViewOptions, required_field, view_default_options};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapOptions {
    #[serde(flatten)]
    pub view: ViewOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_field: Option<String>,
    /// Field bound to the size channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_field: Option<String>,
    /// Color ramp, low values first
    #[serde(default)]
    pub color: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<PointConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundConfig>,
}

impl HeatmapOptions {
    pub fn color_field(&self) -> Result<&str, PlotLayerChartError> {
        required_field(&self.color_field, "colorField")
    }
}

pub fn heatmap_default_options() -> Value {
    let heatmap = json!({
        "xAxis": {
            "visible": true,
            "autoHideLabel": true,
            "autoRotateLabel": true,
            "autoRotateTitle": false,
            "grid": {"visible": false},
            "line": {"visible": true},
            "tickLine": {"visible": true},
            "label": {"visible": true},
            "title": {"visible": true, "offset": 12}
        },
        "yAxis": {
            "visible": true,
            "autoHideLabel": true,
            "autoRotateLabel": false,
            "autoRotateTitle": true,
            "grid": {"visible": false},
            "line": {"visible": true},
            "tickLine": {"visible": true},
            "label": {"visible": true},
            "title": {"visible": true, "offset": 12}
        },
        "tooltip": {
            "visible": true,
            "crosshairs": {
                "type": "cross",
                "style": {"lineWidth": 2}
            }
        },
        "legend": {
            "visible": true,
            "position": "bottom-center"
        },
        "color": [
            "rgba(33,102,172,0)",
            "rgb(103,169,207)",
            "rgb(209,229,240)",
            "rgb(253,219,199)",
            "rgb(239,138,98)",
            "rgb(178,24,43)"
        ]
    });
    deep_merge(&view_default_options(), &heatmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let options: HeatmapOptions =
            serde_json::from_value(heatmap_default_options()).unwrap();
        assert_eq!(options.color.len(), 6);
        assert!(options.view.padding.is_auto());
        assert!(options.view.label.is_none());
        assert!(options.point.is_none());
        assert!(options.background.is_none());

        let y_axis = options.view.y_axis.unwrap();
        assert!(y_axis.auto_rotate_title);
        // Heatmap grid override wins over the shared defaults
        assert!(!y_axis.grid.unwrap().visible);
        assert!(matches!(
            options.view.tooltip.and_then(|t| t.crosshairs),
            Some(Value::Object(_))
        ));
    }

    #[test]
    fn test_missing_color_field() {
        let options: HeatmapOptions =
            serde_json::from_value(heatmap_default_options()).unwrap();
        assert!(matches!(
            options.color_field(),
            Err(PlotLayerChartError::MissingField(key)) if key == "colorField"
        ));
    }
}
