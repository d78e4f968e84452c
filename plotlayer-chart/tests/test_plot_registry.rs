//! Tests for plot type, geometry and component lookup

use std::sync::Arc;

use plotlayer_chart::constants::{HEATMAP_PLOT_TYPE, POINT_GEOMETRY};
use plotlayer_chart::error::PlotLayerChartError;
use plotlayer_chart::plots::heatmap::HeatmapLayer;
use plotlayer_chart::plots::register_builtin_plots;
use plotlayer_chart::registry::{
    ComponentDescriptor, ComponentFactory, ComponentRegistry, GeomFactory, GeometryRegistry,
    PlotRegistry, Registries,
};
use plotlayer_common::canvas::CanvasDimensions;
use plotlayer_scenegraph::geometry::{ChannelBinding, GeomRole, GeometryDescriptor};
use plotlayer_scenegraph::label::LabelPosition;
use plotlayer_scenegraph::recorder::SceneRecorder;
use serde_json::{Value, json};

fn builtin_registry() -> PlotRegistry {
    let mut registry = PlotRegistry::new(Arc::new(Registries::with_builtins()));
    register_builtin_plots(&mut registry).unwrap();
    registry
}

#[test]
fn test_create_heatmap_by_name() {
    let registry = builtin_registry();
    assert_eq!(registry.plot_types().collect::<Vec<_>>(), vec![HEATMAP_PLOT_TYPE]);

    let recorder = SceneRecorder::new(CanvasDimensions::new(400.0, 300.0));
    let mut layer = registry
        .create(
            HEATMAP_PLOT_TYPE,
            Box::new(recorder.clone()),
            json!({"xField": "x", "yField": "y", "colorField": "v"}),
        )
        .unwrap();
    assert_eq!(layer.type_name(), HEATMAP_PLOT_TYPE);

    layer.render().unwrap();
    assert_eq!(layer.render_count(), 1);
    assert_eq!(layer.view(), recorder.view().as_ref());

    layer.destroy();
    assert!(layer.is_destroyed());
}

#[test]
fn test_unknown_plot_type() {
    let registry = builtin_registry();
    let recorder = SceneRecorder::new(CanvasDimensions::new(400.0, 300.0));
    let result = registry.create("sankey", Box::new(recorder), Value::Null);
    assert!(matches!(
        result,
        Err(PlotLayerChartError::PlotTypeLookupError(name)) if name == "sankey"
    ));
}

#[test]
fn test_duplicate_plot_type_rejected() {
    let mut registry = builtin_registry();
    assert!(matches!(
        registry.register::<HeatmapLayer>(),
        Err(PlotLayerChartError::DuplicatePlotType(name)) if name == HEATMAP_PLOT_TYPE
    ));
    assert!(matches!(
        register_builtin_plots(&mut registry),
        Err(PlotLayerChartError::DuplicatePlotType(_))
    ));
}

#[test]
fn test_unknown_geometry_and_component() {
    let registries = Registries::with_builtins();
    assert!(matches!(
        registries
            .geometries
            .get_geom("violin", GeomRole::Primary, &json!({})),
        Err(PlotLayerChartError::GeometryTypeLookupError(kind)) if kind == "violin"
    ));
    assert!(matches!(
        registries.components.get_component("annotation", &json!({})),
        Err(PlotLayerChartError::ComponentTypeLookupError(kind)) if kind == "annotation"
    ));
}

struct SquareFactory;

impl GeomFactory for SquareFactory {
    fn build(
        &self,
        role: GeomRole,
        _options: &Value,
    ) -> Result<GeometryDescriptor, PlotLayerChartError> {
        Ok(GeometryDescriptor::new(
            "square",
            role,
            ChannelBinding::fields(["x", "y"]),
        ))
    }
}

struct FixedLabelFactory;

impl ComponentFactory for FixedLabelFactory {
    fn build(&self, config: &Value) -> Result<ComponentDescriptor, PlotLayerChartError> {
        let mut config = config.clone();
        config["position"] = json!("bottom");
        if let Some(object) = config.as_object_mut() {
            object.remove("visible");
        }
        Ok(ComponentDescriptor::Label(serde_json::from_value(config)?))
    }
}

#[test]
fn test_custom_factories() {
    let mut geometries = GeometryRegistry::with_builtins();
    geometries.register("square", SquareFactory);
    assert_eq!(
        geometries.kinds().collect::<Vec<_>>(),
        vec![POINT_GEOMETRY, "square"]
    );
    let square = geometries
        .get_geom("square", GeomRole::Guide, &json!({}))
        .unwrap();
    assert_eq!(square.role, GeomRole::Guide);

    let mut components = ComponentRegistry::with_builtins();
    components.register("label", FixedLabelFactory);
    let label = components
        .get_component("label", &json!({"type": "scatterLabel", "fields": ["x"]}))
        .and_then(ComponentDescriptor::into_label)
        .unwrap();
    assert_eq!(label.position, LabelPosition::Bottom);
}

#[test]
fn test_layer_uses_supplied_registries() {
    let mut registries = Registries::with_builtins();
    registries.components.register("label", FixedLabelFactory);
    let mut registry = PlotRegistry::new(Arc::new(registries));
    register_builtin_plots(&mut registry).unwrap();

    let recorder = SceneRecorder::new(CanvasDimensions::new(400.0, 300.0));
    let mut layer = registry
        .create(
            HEATMAP_PLOT_TYPE,
            Box::new(recorder.clone()),
            json!({"xField": "x", "yField": "y", "colorField": "v"}),
        )
        .unwrap();
    layer.render().unwrap();

    let view = recorder.view().unwrap();
    let label = view.geometries[1].label.as_ref().unwrap();
    assert_eq!(label.position, LabelPosition::Bottom);
}
