use plotlayer_common::error::PlotLayerCommonError;
use plotlayer_scenegraph::error::PlotLayerSceneGraphError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotLayerGuidesError {
    #[error("Component `{0}` was destroyed and cannot be rendered again")]
    ComponentDestroyed(String),

    #[error("Background of type `{kind}` requires `{key}`")]
    MissingBackgroundSource { kind: String, key: String },

    #[error("Invalid value: {0}")]
    InvalidValue(#[from] PlotLayerCommonError),

    #[error("Surface error: {0}")]
    SurfaceError(#[from] PlotLayerSceneGraphError),
}
