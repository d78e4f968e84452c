use plotlayer_common::canvas::CanvasDimensions;
use plotlayer_common::config::TooltipConfig;
use plotlayer_common::types::{Padding, Rect};
use plotlayer_scales::config::ScaleMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::axis::AxisDescriptor;
use crate::error::PlotLayerSceneGraphError;
use crate::geometry::GeometryDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub transposed: bool,
}

impl Default for CoordSpec {
    fn default() -> Self {
        Self {
            kind: "rect".to_string(),
            transposed: false,
        }
    }
}

/// Everything the rendering engine needs to draw one view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSpec {
    pub dimensions: CanvasDimensions,
    pub padding: Padding,
    pub data: Vec<Map<String, Value>>,
    pub scales: ScaleMap,
    pub coord: CoordSpec,
    pub axes: Vec<AxisDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipConfig>,
    pub geometries: Vec<GeometryDescriptor>,
    /// Whether the engine draws its own legends
    pub legends: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
}

impl ViewSpec {
    pub fn new(dimensions: CanvasDimensions) -> Self {
        Self {
            dimensions,
            padding: Padding::default(),
            data: vec![],
            scales: ScaleMap::new(),
            coord: CoordSpec::default(),
            axes: vec![],
            tooltip: None,
            geometries: vec![],
            legends: true,
            animate: None,
        }
    }

    /// Area left for the geometry once padding is removed
    pub fn plot_area(&self) -> Rect {
        self.dimensions.bounds().inset(&self.padding)
    }

    /// Check that every position field of every geometry has a scale entry
    pub fn validate(&self) -> Result<(), PlotLayerSceneGraphError> {
        for geometry in &self.geometries {
            if geometry.position.fields.is_empty() {
                return Err(PlotLayerSceneGraphError::MissingPosition(
                    geometry.kind.clone(),
                ));
            }
            if let Some(field) = geometry
                .position
                .fields
                .iter()
                .find(|field| !self.scales.contains_key(field.as_str()))
            {
                return Err(PlotLayerSceneGraphError::MissingScale {
                    geometry: geometry.kind.clone(),
                    field: field.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Regions of the canvas occupied by a drawn view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRegion {
    /// Area inside the padding where geometry is drawn
    pub plot_area: Rect,
    /// Plot area plus the axes drawn around it
    pub bbox: Rect,
}
