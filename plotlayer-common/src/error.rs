use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotLayerCommonError {
    #[error("Invalid CSS color: `{0}`")]
    InvalidColor(String),

    #[error("Invalid padding shorthand, expected 1 to 4 values but got {0}")]
    InvalidPaddingShorthand(usize),

    #[error("Empty color ramp")]
    EmptyColorRamp,
}
