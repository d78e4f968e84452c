use plotlayer_common::types::Padding;

/// View padding in auto mode before auxiliary components add their requests
pub const DEFAULT_AUTO_PADDING: Padding = Padding {
    top: 20.0,
    right: 20.0,
    bottom: 40.0,
    left: 50.0,
};

pub const HEATMAP_PLOT_TYPE: &str = "heatmap";
pub const HEATMAP_GEOMETRY: &str = "linearHeatmap";
pub const POINT_GEOMETRY: &str = "point";

pub const LABEL_COMPONENT: &str = "label";
pub const AXIS_COMPONENT: &str = "axis";
pub const SCATTER_LABEL: &str = "scatterLabel";

/// Render passes on which the heatmap legend is rebuilt. The second pass picks
/// up the padding negotiated on the first.
pub const LEGEND_REBUILD_PASSES: usize = 2;
