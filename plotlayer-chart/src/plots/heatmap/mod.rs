pub mod options;

use plotlayer_common::merge::deep_merge;
use plotlayer_guides::background::HeatmapBackground;
use plotlayer_guides::component::{AuxiliaryComponent, ComponentContext};
use plotlayer_guides::error::PlotLayerGuidesError;
use plotlayer_guides::legend::color_domain;
use plotlayer_guides::legend::heatmap::{HeatmapLegend, HeatmapLegendOptions};
use plotlayer_scales::extract::{ScaleBinding, configure_scales};
use plotlayer_scenegraph::geometry::{ChannelBinding, GeomRole, GeometryDescriptor};
use plotlayer_scenegraph::label::LabelDescriptor;
use serde_json::{Value, json};

use crate::constants::{
    HEATMAP_GEOMETRY, HEATMAP_PLOT_TYPE, LABEL_COMPONENT, LEGEND_REBUILD_PASSES, POINT_GEOMETRY,
    SCATTER_LABEL,
};
use crate::error::PlotLayerChartError;
use crate::layer::{BuildContext, Layer, RenderedContext, ViewLayer};
use crate::options::ViewOptions;
use crate::registry::ComponentRegistry;

pub use options::{HeatmapOptions, heatmap_default_options};

pub type Heatmap = Layer<HeatmapLayer>;

/// Heatmap chart type: a continuous density geometry with a hidden point
/// guide, a gradient legend and an optional background.
#[derive(Debug, Default)]
pub struct HeatmapLayer {
    legend: Option<HeatmapLegend>,
    background: Option<HeatmapBackground>,
}

impl HeatmapLayer {
    pub fn legend(&self) -> Option<&HeatmapLegend> {
        self.legend.as_ref()
    }

    pub fn background(&self) -> Option<&HeatmapBackground> {
        self.background.as_ref()
    }

    fn build_legend(
        &mut self,
        options: &HeatmapOptions,
        ctx: &mut RenderedContext,
    ) -> Result<(), PlotLayerGuidesError> {
        let Some(config) = options.view.legend.as_ref().filter(|legend| legend.visible) else {
            return Ok(());
        };
        if ctx.render_count >= LEGEND_REBUILD_PASSES {
            tracing::debug!("legend kept from previous pass");
            return Ok(());
        }
        if let Some(mut previous) = self.legend.take() {
            previous.destroy(&mut ctx.components);
        }

        let domain = options
            .color_field
            .as_deref()
            .and_then(|field| color_domain(&options.view.data, field));
        let mut legend = HeatmapLegend::new(
            HeatmapLegendOptions::new(config, options.color.clone(), domain),
            ctx.region,
        );
        legend.render(&mut ctx.components)?;
        tracing::debug!(request = ?legend.padding_request(), "legend rebuilt");
        self.legend = Some(legend);
        Ok(())
    }

    fn build_background(
        &mut self,
        options: &HeatmapOptions,
        ctx: &mut RenderedContext,
    ) -> Result<(), PlotLayerGuidesError> {
        let Some(config) = options.background.as_ref() else {
            return Ok(());
        };
        if options.view.padding.is_auto() {
            tracing::debug!("background skipped with auto padding");
            return Ok(());
        }
        if let Some(mut previous) = self.background.take() {
            previous.destroy(&mut ctx.components);
        }

        let mut background = HeatmapBackground::new(config.clone(), ctx.region);
        background.render(&mut ctx.components)?;
        self.background = Some(background);
        Ok(())
    }
}

/// Label descriptor for the guide geometry, `None` when labels are switched
/// off.
///
/// The caller's label block is merged over a scatter label centered on each
/// cell and resolved through the `label` component factory.
pub fn extract_label(
    options: &ViewOptions,
    components: &ComponentRegistry,
) -> Result<Option<LabelDescriptor>, PlotLayerChartError> {
    let label = options.label.as_ref().filter(|label| !label.is_null());
    if label.and_then(|label| label.get("visible")) == Some(&Value::Bool(false)) {
        return Ok(None);
    }

    let (x_field, y_field) = (options.x_field()?, options.y_field()?);
    let baseline = json!({
        "type": SCATTER_LABEL,
        "fields": [x_field, y_field],
        "position": "middle",
        "offset": 0
    });
    let merged = match label {
        Some(label) => deep_merge(&baseline, label),
        None => baseline,
    };
    components
        .get_component(LABEL_COMPONENT, &merged)?
        .into_label()
        .map(Some)
}

impl ViewLayer for HeatmapLayer {
    type Options = HeatmapOptions;

    const TYPE_NAME: &'static str = HEATMAP_PLOT_TYPE;

    fn default_options() -> Value {
        heatmap_default_options()
    }

    fn view_options(options: &HeatmapOptions) -> &ViewOptions {
        &options.view
    }

    fn scale(
        &mut self,
        options: &HeatmapOptions,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        let view = &options.view;
        ctx.view.scales = configure_scales([
            ScaleBinding::new(view.x_field()?, view.x_axis.as_ref()),
            ScaleBinding::new(view.y_field()?, view.y_axis.as_ref()),
        ])?;
        Ok(())
    }

    fn add_geometry(
        &mut self,
        options: &HeatmapOptions,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        let x_field = options.view.x_field()?;
        let y_field = options.view.y_field()?;

        let mut primary = GeometryDescriptor::new(
            HEATMAP_GEOMETRY,
            GeomRole::Primary,
            ChannelBinding::fields([x_field, y_field]),
        );
        primary.color = Some(
            ChannelBinding::fields([options.color_field()?]).with_values(options.color.clone()),
        );
        primary.size = options
            .radius_field
            .as_deref()
            .map(|field| ChannelBinding::fields([field]));
        // Zero leaves the engine default in place
        primary.radius = options.radius.filter(|radius| *radius > 0.0);
        primary.intensity = options.intensity.filter(|intensity| *intensity > 0.0);

        // Hidden unless the caller opted in
        let hidden = json!({"visible": false, "size": 0});
        let point = match &options.point {
            Some(point) if point.visible => deep_merge(&hidden, &serde_json::to_value(point)?),
            _ => hidden,
        };
        let mut guide = ctx.registries.geometries.get_geom(
            POINT_GEOMETRY,
            GeomRole::Guide,
            &json!({"xField": x_field, "yField": y_field, "point": point}),
        )?;
        guide.active = false;
        guide.label = extract_label(&options.view, &ctx.registries.components)?;

        ctx.view.geometries.push(primary);
        ctx.view.geometries.push(guide);
        Ok(())
    }

    /// Legends are drawn by [`HeatmapLegend`] instead of the engine
    fn legend(
        &mut self,
        _options: &HeatmapOptions,
        ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        ctx.view.legends = false;
        Ok(())
    }

    fn animation(
        &mut self,
        _options: &HeatmapOptions,
        _ctx: &mut BuildContext,
    ) -> Result<(), PlotLayerChartError> {
        Ok(())
    }

    fn after_render(
        &mut self,
        options: &HeatmapOptions,
        ctx: &mut RenderedContext,
    ) -> Result<(), PlotLayerChartError> {
        // Each component is attempted even when the other fails
        let legend = self.build_legend(options, ctx).inspect_err(|err| {
            tracing::warn!(%err, "heatmap legend failed to render");
        });
        let background = self.build_background(options, ctx).inspect_err(|err| {
            tracing::warn!(%err, "heatmap background failed to render");
        });
        legend.and(background)?;
        Ok(())
    }

    fn destroy(&mut self, ctx: &mut ComponentContext) {
        if let Some(mut legend) = self.legend.take() {
            legend.destroy(ctx);
        }
        if let Some(mut background) = self.background.take() {
            background.destroy(ctx);
        }
    }
}
