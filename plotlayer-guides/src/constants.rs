/// Gap between the view and a legend
pub const LEGEND_MARGIN: f32 = 8.0;

/// Gap between the legend bar and its labels
pub const LEGEND_LABEL_GAP: f32 = 4.0;

pub const LEGEND_BAR_LENGTH: f32 = 120.0;
pub const LEGEND_BAR_THICKNESS: f32 = 12.0;
pub const LEGEND_FONT_SIZE: f32 = 12.0;
pub const LEGEND_TEXT_FILL: &str = "#595959";

pub const LEGEND_GROUP_NAME: &str = "heatmap-legend";
pub const BACKGROUND_GROUP_NAME: &str = "heatmap-background";

pub const BACKGROUND_ZINDEX: i32 = -1;
