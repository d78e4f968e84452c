#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotLayerScaleError {
    #[error("Unknown scale type `{0}` for field `{1}`")]
    UnknownScaleType(String, String),

    #[error("Scale min ({min}) is greater than max ({max}) for field `{field}`")]
    InvertedBounds { field: String, min: f64, max: f64 },

    #[error("Scale tickCount must be positive for field `{0}`")]
    ZeroTickCount(String),

    #[error("Scale tickInterval must be positive for field `{field}` (got {value})")]
    NonPositiveTickInterval { field: String, value: f64 },
}
