use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use plotlayer_common::canvas::CanvasDimensions;
use plotlayer_common::types::Rect;
use serde::Serialize;

use crate::axis::AxisOrient;
use crate::error::PlotLayerSceneGraphError;
use crate::marks::group::SceneGroup;
use crate::surface::{DrawLayer, GroupHandle, RenderSurface};
use crate::view::{ViewRegion, ViewSpec};

/// Space an axis occupies outside the plot area
pub const RECORDED_AXIS_EXTENT: f32 = 24.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum SurfaceEvent {
    RenderView {
        pass: usize,
    },
    AddGroup {
        handle: GroupHandle,
        layer: DrawLayer,
        name: String,
    },
    RemoveGroup {
        handle: GroupHandle,
        name: String,
    },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedGroup {
    pub handle: GroupHandle,
    pub layer: DrawLayer,
    pub group: SceneGroup,
}

/// Everything currently drawn on a recorder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedScene {
    pub dimensions: CanvasDimensions,
    pub view: Option<ViewSpec>,
    pub region: Option<ViewRegion>,
    pub groups: Vec<RecordedGroup>,
}

#[derive(Debug)]
struct RecorderState {
    dimensions: CanvasDimensions,
    next_handle: u64,
    passes: usize,
    view: Option<ViewSpec>,
    region: Option<ViewRegion>,
    groups: IndexMap<GroupHandle, (DrawLayer, SceneGroup)>,
    events: Vec<SurfaceEvent>,
}

/// In-memory surface that keeps what was drawn instead of rasterizing it.
///
/// Clones share state, so a caller can hand one clone to a layer and inspect
/// the scene through another.
#[derive(Debug, Clone)]
pub struct SceneRecorder {
    state: Arc<Mutex<RecorderState>>,
}

impl SceneRecorder {
    pub fn new(dimensions: CanvasDimensions) -> Self {
        Self {
            state: Arc::new(Mutex::new(RecorderState {
                dimensions,
                next_handle: 0,
                passes: 0,
                view: None,
                region: None,
                groups: IndexMap::new(),
                events: vec![],
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.lock().events.clone()
    }

    pub fn view(&self) -> Option<ViewSpec> {
        self.lock().view.clone()
    }

    pub fn region(&self) -> Option<ViewRegion> {
        self.lock().region
    }

    /// Number of times a view has been drawn
    pub fn passes(&self) -> usize {
        self.lock().passes
    }

    pub fn groups(&self) -> Vec<RecordedGroup> {
        self.lock()
            .groups
            .iter()
            .map(|(handle, (layer, group))| RecordedGroup {
                handle: *handle,
                layer: *layer,
                group: group.clone(),
            })
            .collect()
    }

    /// Currently drawn groups with the given name
    pub fn groups_named(&self, name: &str) -> Vec<RecordedGroup> {
        self.groups()
            .into_iter()
            .filter(|recorded| recorded.group.name == name)
            .collect()
    }

    pub fn contains(&self, handle: GroupHandle) -> bool {
        self.lock().groups.contains_key(&handle)
    }

    pub fn snapshot(&self) -> RecordedScene {
        let state = self.lock();
        RecordedScene {
            dimensions: state.dimensions,
            view: state.view.clone(),
            region: state.region,
            groups: state
                .groups
                .iter()
                .map(|(handle, (layer, group))| RecordedGroup {
                    handle: *handle,
                    layer: *layer,
                    group: group.clone(),
                })
                .collect(),
        }
    }
}

fn view_bbox(view: &ViewSpec, plot_area: Rect) -> Rect {
    let (mut top, mut right, mut bottom, mut left) = (0.0, 0.0, 0.0, 0.0);
    for axis in view.axes.iter().filter(|axis| axis.visible) {
        match axis.orient {
            AxisOrient::Top => top = RECORDED_AXIS_EXTENT,
            AxisOrient::Right => right = RECORDED_AXIS_EXTENT,
            AxisOrient::Bottom => bottom = RECORDED_AXIS_EXTENT,
            AxisOrient::Left => left = RECORDED_AXIS_EXTENT,
        }
    }
    Rect::new(
        plot_area.x - left,
        plot_area.y - top,
        plot_area.width + left + right,
        plot_area.height + top + bottom,
    )
}

impl RenderSurface for SceneRecorder {
    fn dimensions(&self) -> CanvasDimensions {
        self.lock().dimensions
    }

    fn render_view(&mut self, view: &ViewSpec) -> Result<ViewRegion, PlotLayerSceneGraphError> {
        view.validate()?;
        let plot_area = view.plot_area();
        let region = ViewRegion {
            plot_area,
            bbox: view_bbox(view, plot_area),
        };

        let mut state = self.lock();
        state.passes += 1;
        let pass = state.passes;
        state.view = Some(view.clone());
        state.region = Some(region);
        state.events.push(SurfaceEvent::RenderView { pass });
        tracing::debug!(pass, ?plot_area, "recorded view");
        Ok(region)
    }

    fn add_group(
        &mut self,
        layer: DrawLayer,
        group: SceneGroup,
    ) -> Result<GroupHandle, PlotLayerSceneGraphError> {
        let mut state = self.lock();
        let handle = GroupHandle(state.next_handle);
        state.next_handle += 1;
        state.events.push(SurfaceEvent::AddGroup {
            handle,
            layer,
            name: group.name.clone(),
        });
        state.groups.insert(handle, (layer, group));
        Ok(handle)
    }

    fn remove_group(&mut self, handle: GroupHandle) -> bool {
        let mut state = self.lock();
        match state.groups.shift_remove(&handle) {
            Some((_, group)) => {
                state.events.push(SurfaceEvent::RemoveGroup {
                    handle,
                    name: group.name,
                });
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        let mut state = self.lock();
        state.view = None;
        state.region = None;
        state.groups.clear();
        state.events.push(SurfaceEvent::Clear);
    }
}
