use plotlayer_common::error::PlotLayerCommonError;
use plotlayer_guides::error::PlotLayerGuidesError;
use plotlayer_scales::error::PlotLayerScaleError;
use plotlayer_scenegraph::error::PlotLayerSceneGraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotLayerChartError {
    #[error("Internal error: `{0}`")]
    InternalError(String),

    #[error("Missing required field binding: `{0}`")]
    MissingField(String),

    #[error("Invalid layer configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("No geometry factory registered for geometry type: `{0}`")]
    GeometryTypeLookupError(String),

    #[error("No component factory registered for component type: `{0}`")]
    ComponentTypeLookupError(String),

    #[error("No plot type registered with name: `{0}`")]
    PlotTypeLookupError(String),

    #[error("Plot type already registered: `{0}`")]
    DuplicatePlotType(String),

    #[error("Layer of type `{0}` was destroyed")]
    LayerDestroyed(String),

    #[error("Configuration error: `{0}`")]
    CommonError(#[from] PlotLayerCommonError),

    #[error("Scale error: `{0}`")]
    ScaleError(#[from] PlotLayerScaleError),

    #[error("SceneGraph error: `{0}`")]
    SceneGraphError(#[from] PlotLayerSceneGraphError),

    #[error("Guide error: `{0}`")]
    GuidesError(#[from] PlotLayerGuidesError),
}
