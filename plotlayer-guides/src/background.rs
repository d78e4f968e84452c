use plotlayer_common::config::{BackgroundConfig, BackgroundKind};
use plotlayer_common::types::{parse_css_color, ColorOrGradient, Rect};
use plotlayer_scenegraph::marks::group::SceneGroup;
use plotlayer_scenegraph::marks::image::SceneImageMark;
use plotlayer_scenegraph::marks::mark::SceneMark;
use plotlayer_scenegraph::marks::rect::SceneRectMark;
use plotlayer_scenegraph::surface::{DrawLayer, GroupHandle};
use plotlayer_scenegraph::view::ViewRegion;

use crate::component::{AuxiliaryComponent, ComponentContext, ComponentId, ComponentState};
use crate::constants::{BACKGROUND_GROUP_NAME, BACKGROUND_ZINDEX};
use crate::error::PlotLayerGuidesError;

/// Color or image drawn behind the plot area
#[derive(Debug)]
pub struct HeatmapBackground {
    id: ComponentId,
    config: BackgroundConfig,
    region: ViewRegion,
    state: ComponentState,
    handle: Option<GroupHandle>,
}

impl HeatmapBackground {
    pub fn new(config: BackgroundConfig, region: ViewRegion) -> Self {
        Self {
            id: ComponentId::next(),
            config,
            region,
            state: ComponentState::Absent,
            handle: None,
        }
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn handle(&self) -> Option<GroupHandle> {
        self.handle
    }

    pub fn make_marks(&self) -> Result<SceneGroup, PlotLayerGuidesError> {
        let area = self.region.plot_area;
        let mark: SceneMark = match self.config.kind {
            BackgroundKind::Color => {
                let value = self.config.value.as_deref().ok_or_else(|| {
                    PlotLayerGuidesError::MissingBackgroundSource {
                        kind: "color".to_string(),
                        key: "value".to_string(),
                    }
                })?;
                SceneRectMark {
                    name: "background_rect".to_string(),
                    ..SceneRectMark::new(area.x, area.y, area.width, area.height)
                }
                .with_fill(ColorOrGradient::Color(parse_css_color(value)?))
                .into()
            }
            BackgroundKind::Image => {
                let src = self.config.src.clone().ok_or_else(|| {
                    PlotLayerGuidesError::MissingBackgroundSource {
                        kind: "image".to_string(),
                        key: "src".to_string(),
                    }
                })?;
                SceneImageMark {
                    name: "background_image".to_string(),
                    src,
                    x: area.x,
                    y: area.y,
                    width: area.width,
                    height: area.height,
                    zindex: None,
                }
                .into()
            }
        };
        Ok(SceneGroup {
            zindex: Some(BACKGROUND_ZINDEX),
            ..SceneGroup::new(BACKGROUND_GROUP_NAME).with_marks(vec![mark])
        })
    }

    fn draw(&mut self, ctx: &mut ComponentContext) -> Result<(), PlotLayerGuidesError> {
        let group = self.make_marks()?;
        if let Some(previous) = self.handle.take() {
            ctx.surface.remove_group(previous);
        }
        self.handle = Some(ctx.surface.add_group(DrawLayer::Back, group)?);
        self.state = ComponentState::Rendered;
        Ok(())
    }
}

impl AuxiliaryComponent for HeatmapBackground {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &str {
        BACKGROUND_GROUP_NAME
    }

    fn state(&self) -> ComponentState {
        self.state
    }

    fn bbox(&self) -> Option<Rect> {
        self.handle.map(|_| self.region.plot_area)
    }

    fn render(&mut self, ctx: &mut ComponentContext) -> Result<(), PlotLayerGuidesError> {
        if self.state == ComponentState::Destroyed {
            return Err(PlotLayerGuidesError::ComponentDestroyed(
                BACKGROUND_GROUP_NAME.to_string(),
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
        if self.state != ComponentState::Destroyed {
            tracing::debug!(component = BACKGROUND_GROUP_NAME, "destroyed");
            self.state = ComponentState::Destroyed;
        }
    }
}
