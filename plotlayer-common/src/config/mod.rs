//! Typed configuration blocks of a layer.
//!
//! Each block deserializes from the camelCase JSON shape callers use.
//! Blocks that are absent from the effective configuration are represented
//! as `None` by the layer options that embed them.

pub mod axis;
pub mod background;
pub mod legend;
pub mod padding;
pub mod point;
pub mod tooltip;

pub use axis::{AxisConfig, AxisTitleConfig, ToggleConfig};
pub use background::{BackgroundConfig, BackgroundKind};
pub use legend::{LegendAlign, LegendConfig, LegendPosition, LegendSide, LegendTextConfig};
pub use padding::{PaddingBox, PaddingKeyword, PaddingSpec};
pub use point::{PointConfig, PointStyle};
pub use tooltip::TooltipConfig;

pub(crate) fn default_true() -> bool {
    true
}
