use plotlayer_common::config::{
    LegendAlign, LegendConfig, LegendPosition, LegendSide, LegendTextConfig,
};
use plotlayer_common::types::{
    color_ramp_stops, parse_css_color, ColorOrGradient, Gradient, LinearGradient, Padding, Rect,
};
use plotlayer_scenegraph::marks::group::SceneGroup;
use plotlayer_scenegraph::marks::mark::SceneMark;
use plotlayer_scenegraph::marks::rect::SceneRectMark;
use plotlayer_scenegraph::marks::text::{SceneTextMark, TextAlign, TextBaseline};
use plotlayer_scenegraph::surface::{DrawLayer, GroupHandle};
use plotlayer_scenegraph::view::ViewRegion;

use crate::component::{AuxiliaryComponent, ComponentContext, ComponentId, ComponentState};
use crate::constants::{
    LEGEND_BAR_LENGTH, LEGEND_BAR_THICKNESS, LEGEND_FONT_SIZE, LEGEND_GROUP_NAME,
    LEGEND_LABEL_GAP, LEGEND_MARGIN, LEGEND_TEXT_FILL,
};
use crate::error::PlotLayerGuidesError;
use crate::padding::PaddingSide;

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapLegendOptions {
    pub position: LegendPosition,
    /// Bar length along the legend direction
    pub width: Option<f32>,
    /// Bar thickness
    pub height: Option<f32>,
    pub text: LegendTextConfig,
    /// Ordered CSS colors spread along the bar
    pub colors: Vec<String>,
    /// Values shown at the two ends of the bar
    pub domain: Option<[f64; 2]>,
}

impl HeatmapLegendOptions {
    pub fn new(config: &LegendConfig, colors: Vec<String>, domain: Option<[f64; 2]>) -> Self {
        Self {
            position: config.position,
            width: config.width,
            height: config.height,
            text: config.text.clone().unwrap_or_default(),
            colors,
            domain,
        }
    }
}

/// Continuous color legend placed outside the view on one of its edges
#[derive(Debug)]
pub struct HeatmapLegend {
    id: ComponentId,
    options: HeatmapLegendOptions,
    region: ViewRegion,
    state: ComponentState,
    handle: Option<GroupHandle>,
    bbox: Option<Rect>,
}

impl HeatmapLegend {
    pub fn new(options: HeatmapLegendOptions, region: ViewRegion) -> Self {
        Self {
            id: ComponentId::next(),
            options,
            region,
            state: ComponentState::Absent,
            handle: None,
            bbox: None,
        }
    }

    pub fn options(&self) -> &HeatmapLegendOptions {
        &self.options
    }

    pub fn handle(&self) -> Option<GroupHandle> {
        self.handle
    }

    /// Lay out the gradient bar and its end labels around the view region
    pub fn make_marks(&self) -> Result<SceneGroup, PlotLayerGuidesError> {
        let stops = color_ramp_stops(&self.options.colors)?;
        let font_size = self.options.text.font_size.unwrap_or(LEGEND_FONT_SIZE);
        let text_color = parse_css_color(
            self.options
                .text
                .fill
                .as_deref()
                .unwrap_or(LEGEND_TEXT_FILL),
        )?;
        let thickness = self.options.height.unwrap_or(LEGEND_BAR_THICKNESS);
        let view = self.region.bbox;
        let side = self.options.position.side();
        let align = self.options.position.align();

        let label = |text: String| SceneTextMark {
            name: "legend_label".to_string(),
            text,
            color: text_color,
            font_size,
            ..Default::default()
        };
        let (min_label, max_label) = match self.options.domain {
            Some([lo, hi]) => (Some(label(format!("{lo}"))), Some(label(format!("{hi}")))),
            None => (None, None),
        };

        let mut marks: Vec<SceneMark> = Vec::with_capacity(3);
        let gradient;
        if self.options.position.is_horizontal() {
            let length = self.options.width.unwrap_or(LEGEND_BAR_LENGTH.min(view.width));
            let extent = |mark: &Option<SceneTextMark>| {
                mark.as_ref()
                    .map_or(0.0, |m| m.estimated_width() + LEGEND_LABEL_GAP)
            };
            let (min_extent, max_extent) = (extent(&min_label), extent(&max_label));
            let total_width = min_extent + length + max_extent;
            let total_height = thickness.max(font_size);

            let x = align_start(view.x, view.width, total_width, align);
            let y = match side {
                LegendSide::Top => view.y - LEGEND_MARGIN - total_height,
                _ => view.bottom() + LEGEND_MARGIN,
            };
            let mid_y = y + total_height / 2.0;

            gradient = LinearGradient {
                x0: 0.0,
                y0: 0.0,
                x1: 1.0,
                y1: 0.0,
                stops,
            };
            marks.push(
                SceneRectMark {
                    name: "legend_bar".to_string(),
                    ..SceneRectMark::new(x + min_extent, mid_y - thickness / 2.0, length, thickness)
                }
                .with_fill(ColorOrGradient::GradientIndex(0))
                .into(),
            );
            if let Some(mark) = min_label {
                marks.push(
                    SceneTextMark {
                        x,
                        y: mid_y,
                        align: TextAlign::Left,
                        baseline: TextBaseline::Middle,
                        ..mark
                    }
                    .into(),
                );
            }
            if let Some(mark) = max_label {
                marks.push(
                    SceneTextMark {
                        x: x + total_width,
                        y: mid_y,
                        align: TextAlign::Right,
                        baseline: TextBaseline::Middle,
                        ..mark
                    }
                    .into(),
                );
            }
        } else {
            let length = self.options.width.unwrap_or(LEGEND_BAR_LENGTH.min(view.height));
            let label_extent = |mark: &Option<SceneTextMark>| {
                mark.as_ref().map_or(0.0, |_| font_size + LEGEND_LABEL_GAP)
            };
            let (min_extent, max_extent) = (label_extent(&min_label), label_extent(&max_label));
            let total_height = max_extent + length + min_extent;
            let total_width = [&min_label, &max_label]
                .into_iter()
                .flatten()
                .map(SceneTextMark::estimated_width)
                .fold(thickness, f32::max);

            let x = match side {
                LegendSide::Left => view.x - LEGEND_MARGIN - total_width,
                _ => view.right() + LEGEND_MARGIN,
            };
            let y = align_start(view.y, view.height, total_height, align);
            let mid_x = x + total_width / 2.0;

            // Low values at the bottom of the bar
            gradient = LinearGradient {
                x0: 0.0,
                y0: 1.0,
                x1: 0.0,
                y1: 0.0,
                stops,
            };
            marks.push(
                SceneRectMark {
                    name: "legend_bar".to_string(),
                    ..SceneRectMark::new(mid_x - thickness / 2.0, y + max_extent, thickness, length)
                }
                .with_fill(ColorOrGradient::GradientIndex(0))
                .into(),
            );
            if let Some(mark) = max_label {
                marks.push(
                    SceneTextMark {
                        x: mid_x,
                        y,
                        align: TextAlign::Center,
                        baseline: TextBaseline::Top,
                        ..mark
                    }
                    .into(),
                );
            }
            if let Some(mark) = min_label {
                marks.push(
                    SceneTextMark {
                        x: mid_x,
                        y: y + total_height,
                        align: TextAlign::Center,
                        baseline: TextBaseline::Bottom,
                        ..mark
                    }
                    .into(),
                );
            }
        }

        Ok(SceneGroup {
            gradients: vec![Gradient::LinearGradient(gradient)],
            ..SceneGroup::new(LEGEND_GROUP_NAME).with_marks(marks)
        })
    }

    fn draw(&mut self, ctx: &mut ComponentContext) -> Result<(), PlotLayerGuidesError> {
        let group = self.make_marks()?;
        let bbox = group.bounding_box();
        if let Some(previous) = self.handle.take() {
            ctx.surface.remove_group(previous);
        }
        self.handle = Some(ctx.surface.add_group(DrawLayer::Front, group)?);
        self.bbox = bbox;
        self.state = ComponentState::Rendered;
        ctx.padding.register_padding(&*self, PaddingSide::Outer);
        Ok(())
    }
}

/// Offset along an edge of `extent` starting at `start` for content of `size`
fn align_start(start: f32, extent: f32, size: f32, align: LegendAlign) -> f32 {
    match align {
        LegendAlign::Start => start,
        LegendAlign::Center => start + (extent - size) / 2.0,
        LegendAlign::End => start + extent - size,
    }
}

impl AuxiliaryComponent for HeatmapLegend {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &str {
        LEGEND_GROUP_NAME
    }

    fn state(&self) -> ComponentState {
        self.state
    }

    fn bbox(&self) -> Option<Rect> {
        self.bbox
    }

    fn padding_request(&self) -> Padding {
        let Some(bbox) = self.bbox else {
            return Padding::default();
        };
        match self.options.position.side() {
            LegendSide::Top => Padding::new(bbox.height + LEGEND_MARGIN, 0.0, 0.0, 0.0),
            LegendSide::Right => Padding::new(0.0, bbox.width + LEGEND_MARGIN, 0.0, 0.0),
            LegendSide::Bottom => Padding::new(0.0, 0.0, bbox.height + LEGEND_MARGIN, 0.0),
            LegendSide::Left => Padding::new(0.0, 0.0, 0.0, bbox.width + LEGEND_MARGIN),
        }
    }

    fn render(&mut self, ctx: &mut ComponentContext) -> Result<(), PlotLayerGuidesError> {
        if self.state == ComponentState::Destroyed {
            return Err(PlotLayerGuidesError::ComponentDestroyed(
                LEGEND_GROUP_NAME.to_string(),
            ));
        }
        if let Err(err) = self.draw(ctx) {
            self.destroy(ctx);
            return Err(err);
        }
        Ok(())
    }

    fn destroy(&mut self, ctx: &mut ComponentContext) {
        if let Some(handle) = self.handle.take() {
            ctx.surface.remove_group(handle);
        }
        ctx.padding.release(self.id);
        self.bbox = None;
        if self.state != ComponentState::Destroyed {
            tracing::debug!(component = LEGEND_GROUP_NAME, "destroyed");
            self.state = ComponentState::Destroyed;
        }
    }
}
