use plotlayer_scenegraph::label::LabelDescriptor;
use serde_json::Value;

use crate::error::PlotLayerChartError;
use crate::registry::{ComponentDescriptor, ComponentFactory};

/// Label component built from a merged label block
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelComponentFactory;

impl ComponentFactory for LabelComponentFactory {
    fn build(&self, config: &Value) -> Result<ComponentDescriptor, PlotLayerChartError> {
        let mut config = config.clone();
        // Visibility was decided by the caller
        if let Some(object) = config.as_object_mut() {
            object.remove("visible");
        }
        let label: LabelDescriptor = serde_json::from_value(config)?;
        Ok(ComponentDescriptor::Label(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotlayer_scenegraph::label::LabelPosition;
    use serde_json::json;

    #[test]
    fn test_label_keeps_unknown_keys() {
        let label = LabelComponentFactory
            .build(&json!({
                "visible": true,
                "type": "scatterLabel",
                "fields": ["x", "y"],
                "position": "top",
                "offset": 4,
                "formatter": "{value}"
            }))
            .and_then(ComponentDescriptor::into_label)
            .unwrap();
        assert_eq!(label.label_type, "scatterLabel");
        assert_eq!(label.position, LabelPosition::Top);
        assert_eq!(label.offset, 4.0);
        assert_eq!(label.extra.get("formatter"), Some(&json!("{value}")));
        assert!(!label.extra.contains_key("visible"));
    }

    #[test]
    fn test_label_requires_type() {
        let result = LabelComponentFactory.build(&json!({"fields": ["x"]}));
        assert!(matches!(result, Err(PlotLayerChartError::InvalidConfig(_))));
    }
}
