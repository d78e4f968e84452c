use plotlayer_common::config::AxisConfig;
use plotlayer_scenegraph::axis::{AxisDescriptor, AxisDim, AxisTitleDescriptor};
use serde::Deserialize;
use serde_json::Value;

use crate::error::PlotLayerChartError;
use crate::registry::{ComponentDescriptor, ComponentFactory};

#[derive(Debug, Deserialize)]
struct AxisComponentConfig {
    dim: AxisDim,
    field: String,
    #[serde(default)]
    axis: AxisConfig,
}

/// Axis component for `{dim, field, axis}`, where `axis` is the axis block
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisComponentFactory;

impl ComponentFactory for AxisComponentFactory {
    fn build(&self, config: &Value) -> Result<ComponentDescriptor, PlotLayerChartError> {
        let AxisComponentConfig { dim, field, axis } = serde_json::from_value(config.clone())?;
        let title = axis
            .title
            .as_ref()
            .filter(|title| title.visible)
            .map(|title| AxisTitleDescriptor {
                text: title.text.clone().unwrap_or_else(|| field.clone()),
                offset: title.offset,
            });
        Ok(ComponentDescriptor::Axis(AxisDescriptor {
            dim,
            orient: dim.default_orient(),
            visible: axis.visible,
            grid: AxisConfig::is_enabled(&axis.grid),
            line: AxisConfig::is_enabled(&axis.line),
            tick_line: AxisConfig::is_enabled(&axis.tick_line),
            label: AxisConfig::is_enabled(&axis.label),
            auto_hide_label: axis.auto_hide_label,
            auto_rotate_label: axis.auto_rotate_label,
            auto_rotate_title: axis.auto_rotate_title,
            title,
            field,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotlayer_scenegraph::axis::AxisOrient;
    use serde_json::json;

    #[test]
    fn test_axis_toggles() {
        let axis = AxisComponentFactory
            .build(&json!({
                "dim": "y",
                "field": "week",
                "axis": {
                    "autoRotateTitle": true,
                    "grid": {"visible": false},
                    "line": {"visible": true},
                    "title": {"visible": true, "offset": 12}
                }
            }))
            .and_then(ComponentDescriptor::into_axis)
            .unwrap();
        assert_eq!(axis.orient, AxisOrient::Left);
        assert!(axis.line);
        assert!(!axis.grid);
        assert!(!axis.tick_line);
        assert!(axis.auto_rotate_title);
        assert_eq!(
            axis.title,
            Some(AxisTitleDescriptor {
                text: "week".to_string(),
                offset: Some(12.0)
            })
        );
    }

    #[test]
    fn test_axis_component_is_not_a_label() {
        let result = AxisComponentFactory
            .build(&json!({"dim": "x", "field": "day"}))
            .and_then(ComponentDescriptor::into_label);
        assert!(matches!(result, Err(PlotLayerChartError::InternalError(_))));
    }
}
