//! Render lifecycle shared by every chart type.
//!
//! A chart type implements [`ViewLayer`], overriding the pipeline hooks it
//! needs, and is driven by a [`Layer`]. One call to [`Layer::render`] runs:
//!
//! scale → coord → axis → tooltip → add_geometry → legend → animation →
//! padding resolution → draw → after_render
//!
//! and [`Layer::destroy`] tears the chart type's components down before the
//! surface itself is cleared.

use std::fmt::Debug;
use std::sync::Arc;

use plotlayer_common::merge::deep_merge;
use plotlayer_common::types::Padding;
use plotlayer_guides::component::ComponentContext;
use plotlayer_guides::padding::PaddingController;
use plotlayer_scales::extract::{ScaleBinding, configure_scales};
use plotlayer_scenegraph::axis::AxisDim;
use plotlayer_scenegraph::surface::RenderSurface;
use plotlayer_scenegraph::view::{ViewRegion, ViewSpec};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::constants::{AXIS_COMPONENT, DEFAULT_AUTO_PADDING};
use crate::error::PlotLayerChartError;
use crate::options::{ViewOptions, view_default_options};
use crate::registry::Registries;

/// State the build hooks of one render pass write into
pub struct BuildContext<'a> {
    pub view: &'a mut ViewSpec,
    pub registries: &'a Registries,
}

/// What `after_render` sees once the view has been drawn
pub struct RenderedContext<'a> {
    pub components: ComponentContext<'a>,
    pub view: &'a ViewSpec,
    pub region: ViewRegion,
    /// Passes completed before this one
    pub render_count: usize,
}

/// Hooks of the render pipeline. Every hook except `add_geometry` has a
/// default suitable for a plain cartesian view.
pub trait ViewLayer: Debug + Default + Send + 'static {
    type Options: DeserializeOwned + Debug + Clone + Send;

    const TYPE_NAME: &'static str;

    /// Static defaults of the chart type, built fresh on every call
    fn default_options() -> Value {
        view_default_options()
    }

    fn view_options(options: &Self::Options) -> &ViewOptions;

    /// One scale entry per bound position field
    fn scale(
        &mut self,
        options: &Self::Options,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        let view_options = Self::view_options(options);
        let bindings = [
            (&view_options.x_field, &view_options.x_axis),
            (&view_options.y_field, &view_options.y_axis),
        ]
        .into_iter()
        .filter_map(|(field, axis)| {
            field
                .as_deref()
                .map(|field| ScaleBinding::new(field, axis.as_ref()))
        });
        ctx.view.scales = configure_scales(bindings)?;
        Ok(())
    }

    fn coord(
        &mut self,
        _options: &Self::Options,
        _ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        Ok(())
    }

    /// Visible axes for the bound position fields
    fn axis(
        &mut self,
        options: &Self::Options,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        let view_options = Self::view_options(options);
        let axes = [
            (AxisDim::X, &view_options.x_field, &view_options.x_axis),
            (AxisDim::Y, &view_options.y_field, &view_options.y_axis),
        ];
        for (dim, field, axis) in axes {
            let (Some(field), Some(axis)) = (field, axis) else {
                continue;
            };
            if !axis.visible {
                continue;
            }
            let config = json!({"dim": dim, "field": field, "axis": axis});
            let descriptor = ctx
                .registries
                .components
                .get_component(AXIS_COMPONENT, &config)?
                .into_axis()?;
            ctx.view.axes.push(descriptor);
        }
        Ok(())
    }

    fn tooltip(
        &mut self,
        options: &Self::Options,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        ctx.view.tooltip = Self::view_options(options)
            .tooltip
            .clone()
            .filter(|tooltip| tooltip.visible);
        Ok(())
    }

    fn add_geometry(
        &mut self,
        options: &Self::Options,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError>;

    /// Whether the engine draws its own legends
    fn legend(
        &mut self,
        options: &Self::Options,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        ctx.view.legends = Self::view_options(options)
            .legend
            .as_ref()
            .is_some_and(|legend| legend.visible);
        Ok(())
    }

    fn animation(
        &mut self,
        options: &Self::Options,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        ctx.view.animate = Self::view_options(options).animation;
        Ok(())
    }

    fn after_render(
        &mut self,
        _options: &Self::Options,
        _ctx: &mut RenderedContext,
    ) -> Result<(), PlotLayerChartError> {
        Ok(())
    }

    /// Tear down the chart type's own components
    fn destroy(&mut self, _ctx: &mut ComponentContext) {}
}

/// A layer whose chart type is only known at runtime
pub trait AnyLayer: Debug + Send {
    fn type_name(&self) -> &'static str;

    fn render(&mut self) -> Result<ViewRegion, PlotLayerChartError>;

    fn destroy(&mut self);

    fn config(&self) -> &Value;

    fn view(&self) -> Option<&ViewSpec>;

    fn render_count(&self) -> usize;

    fn is_destroyed(&self) -> bool;
}

/// One renderable chart instance
#[derive(Debug)]
pub struct Layer<P: ViewLayer> {
    plot: P,
    config: Value,
    options: Option<P::Options>,
    view: Option<ViewSpec>,
    region: Option<ViewRegion>,
    surface: Box<dyn RenderSurface>,
    padding: PaddingController,
    registries: Arc<Registries>,
    render_count: usize,
    destroyed: bool,
}

impl<P: ViewLayer> Layer<P> {
    pub fn new(surface: Box<dyn RenderSurface>, config: Value) -> Self {
        Self::with_registries(surface, config, Arc::new(Registries::with_builtins()))
    }

    /// Create a layer whose effective configuration is `config` merged over
    /// the chart type's defaults. A `null` config keeps the defaults.
    pub fn with_registries(
        surface: Box<dyn RenderSurface>,
        config: Value,
        registries: Arc<Registries>,
    ) -> Self {
        let defaults = P::default_options();
        let config = if config.is_null() {
            defaults
        } else {
            deep_merge(&defaults, &config)
        };
        Self {
            plot: P::default(),
            config,
            options: None,
            view: None,
            region: None,
            surface,
            padding: PaddingController::new(),
            registries,
            render_count: 0,
            destroyed: false,
        }
    }

    pub fn default_options() -> Value {
        P::default_options()
    }

    /// Effective configuration
    pub fn config(&self) -> &Value {
        &self.config
    }

    /// Options decoded on the last render pass
    pub fn options(&self) -> Option<&P::Options> {
        self.options.as_ref()
    }

    /// View drawn on the last render pass
    pub fn view(&self) -> Option<&ViewSpec> {
        self.view.as_ref()
    }

    pub fn region(&self) -> Option<ViewRegion> {
        self.region
    }

    pub fn plot(&self) -> &P {
        &self.plot
    }

    pub fn padding_controller(&self) -> &PaddingController {
        &self.padding
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn resolve_padding(&self, options: &ViewOptions) -> Result<Padding, PlotLayerChartError> {
        Ok(match options.padding.fixed()? {
            Some(padding) => padding,
            None => DEFAULT_AUTO_PADDING + self.padding.outer_padding(),
        })
    }

    #[tracing::instrument(skip_all, fields(plot = P::TYPE_NAME, pass = self.render_count))]
    pub fn render(&mut self) -> Result<ViewRegion, PlotLayerChartError> {
        if self.destroyed {
            return Err(PlotLayerChartError::LayerDestroyed(P::TYPE_NAME.to_string()));
        }
        tracing::debug!("render pass start");

        let options: P::Options = serde_json::from_value(self.config.clone())?;
        let view_options = P::view_options(&options);
        let mut view = ViewSpec::new(self.surface.dimensions());
        view.data = view_options.data.clone();

        let mut ctx = BuildContext {
            view: &mut view,
            registries: &self.registries,
        };
        self.plot.scale(&options, &mut ctx)?;
        self.plot.coord(&options, &mut ctx)?;
        self.plot.axis(&options, &mut ctx)?;
        self.plot.tooltip(&options, &mut ctx)?;
        self.plot.add_geometry(&options, &mut ctx)?;
        self.plot.legend(&options, &mut ctx)?;
        self.plot.animation(&options, &mut ctx)?;

        view.padding = self.resolve_padding(view_options)?;
        let region = self.surface.render_view(&view)?;
        let view = self.view.insert(view);
        self.region = Some(region);

        let mut ctx = RenderedContext {
            components: ComponentContext {
                surface: self.surface.as_mut(),
                padding: &mut self.padding,
            },
            view,
            region,
            render_count: self.render_count,
        };
        let result = self.plot.after_render(&options, &mut ctx);
        self.options = Some(options);
        self.render_count += 1;
        tracing::debug!(ok = result.is_ok(), "render pass complete");
        result.map(|_| region)
    }

    /// Destroy the chart type's components, then clear the surface. Safe to
    /// call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        let mut ctx = ComponentContext {
            surface: self.surface.as_mut(),
            padding: &mut self.padding,
        };
        self.plot.destroy(&mut ctx);

        if self.render_count > 0 {
            self.surface.clear();
        }
        self.padding.clear();
        self.view = None;
        self.region = None;
        self.destroyed = true;
        tracing::debug!(plot = P::TYPE_NAME, "layer destroyed");
    }
}

impl<P: ViewLayer> AnyLayer for Layer<P> {
    fn type_name(&self) -> &'static str {
        P::TYPE_NAME
    }

    fn render(&mut self) -> Result<ViewRegion, PlotLayerChartError> {
        Layer::render(self)
    }

    fn destroy(&mut self) {
        Layer::destroy(self)
    }

    fn config(&self) -> &Value {
        &self.config
    }

    fn view(&self) -> Option<&ViewSpec> {
        self.view.as_ref()
    }

    fn render_count(&self) -> usize {
        self.render_count
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
