use std::fmt::Debug;

use plotlayer_common::canvas::CanvasDimensions;
use serde::{Deserialize, Serialize};

use crate::error::PlotLayerSceneGraphError;
use crate::marks::group::SceneGroup;
use crate::view::{ViewRegion, ViewSpec};

/// Identifies a group previously added to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupHandle(pub u64);

/// Drawing layer a group is placed on relative to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawLayer {
    /// Beneath the view, used for backgrounds
    Back,
    /// Above the view, used for legends
    Front,
}

/// The container a layer renders into.
///
/// A surface owns the drawn view and any auxiliary groups. Layers and
/// components only hold handles to what they added.
pub trait RenderSurface: Debug + Send {
    fn dimensions(&self) -> CanvasDimensions;

    /// Draw (or redraw) the view, replacing any previously drawn view
    fn render_view(&mut self, view: &ViewSpec) -> Result<ViewRegion, PlotLayerSceneGraphError>;

    fn add_group(
        &mut self,
        layer: DrawLayer,
        group: SceneGroup,
    ) -> Result<GroupHandle, PlotLayerSceneGraphError>;

    /// Remove a group, returning whether it was present
    fn remove_group(&mut self, handle: GroupHandle) -> bool;

    /// Remove the view and every group
    fn clear(&mut self);
}
