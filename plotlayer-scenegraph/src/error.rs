use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotLayerSceneGraphError {
    #[error("Internal error: `{0}`")]
    InternalError(String),

    #[error("Geometry `{geometry}` binds field `{field}` that has no scale entry")]
    MissingScale { geometry: String, field: String },

    #[error("Geometry `{0}` has no position fields")]
    MissingPosition(String),
}
