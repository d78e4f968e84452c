use std::fmt::Debug;
use std::sync::Arc;

use indexmap::IndexMap;
use plotlayer_scenegraph::axis::AxisDescriptor;
use plotlayer_scenegraph::geometry::{GeomRole, GeometryDescriptor};
use plotlayer_scenegraph::label::LabelDescriptor;
use plotlayer_scenegraph::surface::RenderSurface;
use serde_json::Value;

use crate::components::axis::AxisComponentFactory;
use crate::components::label::LabelComponentFactory;
use crate::constants::{AXIS_COMPONENT, LABEL_COMPONENT, POINT_GEOMETRY};
use crate::error::PlotLayerChartError;
use crate::geoms::point::PointGeomFactory;
use crate::layer::{AnyLayer, Layer, ViewLayer};

/// Builds a geometry descriptor of one kind from a layer's options
pub trait GeomFactory: Send + Sync {
    fn build(&self, role: GeomRole, options: &Value)
    -> Result<GeometryDescriptor, PlotLayerChartError>;
}

/// Builds a component descriptor of one kind from its configuration block
pub trait ComponentFactory: Send + Sync {
    fn build(&self, config: &Value) -> Result<ComponentDescriptor, PlotLayerChartError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComponentDescriptor {
    Label(LabelDescriptor),
    Axis(AxisDescriptor),
}

impl ComponentDescriptor {
    pub fn into_label(self) -> Result<LabelDescriptor, PlotLayerChartError> {
        match self {
            ComponentDescriptor::Label(label) => Ok(label),
            other => Err(PlotLayerChartError::InternalError(format!(
                "expected a label component, got {other:?}"
            ))),
        }
    }

    pub fn into_axis(self) -> Result<AxisDescriptor, PlotLayerChartError> {
        match self {
            ComponentDescriptor::Axis(axis) => Ok(axis),
            other => Err(PlotLayerChartError::InternalError(format!(
                "expected an axis component, got {other:?}"
            ))),
        }
    }
}

/// Geometry factories keyed by geometry kind
#[derive(Clone, Default)]
pub struct GeometryRegistry {
    factories: IndexMap<String, Arc<dyn GeomFactory>>,
}

impl GeometryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(POINT_GEOMETRY, PointGeomFactory);
        registry
    }

    /// Add a factory, replacing any factory registered for the same kind
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        factory: impl GeomFactory + 'static,
    ) -> &mut Self {
        self.factories.insert(kind.into(), Arc::new(factory));
        self
    }

    pub fn get_geom(
        &self,
        kind: &str,
        role: GeomRole,
        options: &Value,
    ) -> Result<GeometryDescriptor, PlotLayerChartError> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| PlotLayerChartError::GeometryTypeLookupError(kind.to_string()))?;
        factory.build(role, options)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Debug for GeometryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

/// Component factories keyed by component kind
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    factories: IndexMap<String, Arc<dyn ComponentFactory>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(LABEL_COMPONENT, LabelComponentFactory)
            .register(AXIS_COMPONENT, AxisComponentFactory);
        registry
    }

    pub fn register(
        &mut self,
        kind: impl Into<String>,
        factory: impl ComponentFactory + 'static,
    ) -> &mut Self {
        self.factories.insert(kind.into(), Arc::new(factory));
        self
    }

    pub fn get_component(
        &self,
        kind: &str,
        config: &Value,
    ) -> Result<ComponentDescriptor, PlotLayerChartError> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| PlotLayerChartError::ComponentTypeLookupError(kind.to_string()))?;
        factory.build(config)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

/// The factory catalogs a layer resolves geometries and components from
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub geometries: GeometryRegistry,
    pub components: ComponentRegistry,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        Self {
            geometries: GeometryRegistry::with_builtins(),
            components: ComponentRegistry::with_builtins(),
        }
    }
}

pub type PlotConstructor = Arc<
    dyn Fn(Box<dyn RenderSurface>, Value, Arc<Registries>) -> Box<dyn AnyLayer> + Send + Sync,
>;

/// Plot types that can be created by name.
///
/// Populated explicitly by the application, see
/// [`register_builtin_plots`](crate::plots::register_builtin_plots).
#[derive(Clone)]
pub struct PlotRegistry {
    constructors: IndexMap<String, PlotConstructor>,
    registries: Arc<Registries>,
}

impl PlotRegistry {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self {
            constructors: IndexMap::new(),
            registries,
        }
    }

    pub fn register_plot_type(
        &mut self,
        name: impl Into<String>,
        constructor: PlotConstructor,
    ) -> Result<(), PlotLayerChartError> {
        let name = name.into();
        if self.constructors.contains_key(&name) {
            return Err(PlotLayerChartError::DuplicatePlotType(name));
        }
        tracing::debug!(plot_type = %name, "registered plot type");
        self.constructors.insert(name, constructor);
        Ok(())
    }

    /// Register a layer type under its own type name
    pub fn register<P: ViewLayer>(&mut self) -> Result<(), PlotLayerChartError> {
        self.register_plot_type(
            P::TYPE_NAME,
            Arc::new(
                |surface: Box<dyn RenderSurface>,
                 config: Value,
                 registries: Arc<Registries>|
                 -> Box<dyn AnyLayer> {
                    Box::new(Layer::<P>::with_registries(surface, config, registries))
                },
            ),
        )
    }

    pub fn create(
        &self,
        name: &str,
        surface: Box<dyn RenderSurface>,
        config: Value,
    ) -> Result<Box<dyn AnyLayer>, PlotLayerChartError> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| PlotLayerChartError::PlotTypeLookupError(name.to_string()))?;
        Ok(constructor(surface, config, self.registries.clone()))
    }

    pub fn plot_types(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl Debug for PlotRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotRegistry")
            .field("plot_types", &self.plot_types().collect::<Vec<_>>())
            .field("registries", &self.registries)
            .finish()
    }
}
