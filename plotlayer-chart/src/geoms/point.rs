use plotlayer_common::config::PointConfig;
use plotlayer_scenegraph::geometry::{ChannelBinding, GeomRole, GeometryDescriptor};
use serde::Deserialize;
use serde_json::Value;

use crate::constants::POINT_GEOMETRY;
use crate::error::PlotLayerChartError;
use crate::options::required_field;
use crate::registry::GeomFactory;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointGeomOptions {
    #[serde(default)]
    x_field: Option<String>,
    #[serde(default)]
    y_field: Option<String>,
    #[serde(default)]
    point: Option<PointConfig>,
}

/// Point geometry at `[xField, yField]` styled by the `point` block
#[derive(Debug, Clone, Copy, Default)]
pub struct PointGeomFactory;

impl GeomFactory for PointGeomFactory {
    fn build(
        &self,
        role: GeomRole,
        options: &Value,
    ) -> Result<GeometryDescriptor, PlotLayerChartError> {
        let options: PointGeomOptions = serde_json::from_value(options.clone())?;
        let x_field = required_field(&options.x_field, "xField")?;
        let y_field = required_field(&options.y_field, "yField")?;
        let point = options.point.unwrap_or_default();

        let mut geom = GeometryDescriptor::new(
            POINT_GEOMETRY,
            role,
            ChannelBinding::fields([x_field, y_field]),
        );
        geom.visible = point.visible;
        geom.size = point.size.map(|size| ChannelBinding::values([size]));
        geom.shape = point.shape.map(|shape| ChannelBinding::values([shape]));
        geom.color = point.color.map(|color| ChannelBinding::values([color]));
        geom.style = point.style.map(serde_json::to_value).transpose()?;
        Ok(geom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point_from_block() {
        let geom = PointGeomFactory
            .build(
                GeomRole::Guide,
                &json!({
                    "xField": "a",
                    "yField": "b",
                    "point": {"visible": true, "size": 3, "shape": "circle", "style": {"lineWidth": 2}}
                }),
            )
            .unwrap();
        assert_eq!(geom.kind, POINT_GEOMETRY);
        assert_eq!(geom.role, GeomRole::Guide);
        assert_eq!(geom.position, ChannelBinding::fields(["a", "b"]));
        assert!(geom.visible);
        assert_eq!(geom.size, Some(ChannelBinding::values([3.0f32])));
        assert_eq!(geom.shape, Some(ChannelBinding::values(["circle"])));
        assert_eq!(geom.style, Some(json!({"lineWidth": 2.0})));
    }

    #[test]
    fn test_point_without_block_is_hidden() {
        let geom = PointGeomFactory
            .build(GeomRole::Guide, &json!({"xField": "a", "yField": "b"}))
            .unwrap();
        assert!(!geom.visible);
        assert_eq!(geom.size, None);
    }

    #[test]
    fn test_point_requires_position() {
        let result = PointGeomFactory.build(GeomRole::Guide, &json!({"xField": "a"}));
        assert!(matches!(result, Err(PlotLayerChartError::MissingField(key)) if key == "yField"));
    }
}
