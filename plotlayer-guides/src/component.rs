use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use plotlayer_common::types::{Padding, Rect};
use plotlayer_scenegraph::surface::RenderSurface;
use serde::{Deserialize, Serialize};

use crate::error::PlotLayerGuidesError;
use crate::padding::PaddingController;

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Allocate an id not shared with any other component in this process
    pub fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentState {
    /// Constructed but not drawn yet
    Absent,
    Rendered,
    Destroyed,
}

/// What a component needs from its owning layer while rendering or destroying
pub struct ComponentContext<'a> {
    pub surface: &'a mut dyn RenderSurface,
    pub padding: &'a mut PaddingController,
}

/// A visual element with its own lifecycle that lives beside the view.
///
/// `render` replaces the component's previously drawn group rather than adding
/// a second one. `destroy` is idempotent, releases any padding registration
/// and is safe to call on a component that never rendered. A component that
/// fails to render is left destroyed.
pub trait AuxiliaryComponent: Debug {
    fn id(&self) -> ComponentId;

    fn name(&self) -> &str;

    fn state(&self) -> ComponentState;

    /// Area covered by the drawn component
    fn bbox(&self) -> Option<Rect>;

    /// Space the component asks to reserve around the view
    fn padding_request(&self) -> Padding {
        Padding::default()
    }

    fn render(&mut self, ctx: &mut ComponentContext) -> Result<(), PlotLayerGuidesError>;

    fn destroy(&mut self, ctx: &mut ComponentContext);
}
