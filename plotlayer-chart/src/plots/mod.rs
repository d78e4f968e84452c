pub mod heatmap;

use crate::error::PlotLayerChartError;
use crate::registry::PlotRegistry;

/// Register every chart type shipped with this crate
pub fn register_builtin_plots(registry: &mut PlotRegistry) -> Result<(), PlotLayerChartError> {
    registry.register::<heatmap::HeatmapLayer>()?;
    Ok(())
}
