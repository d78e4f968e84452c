use serde::{Deserialize, Serialize};

use crate::error::PlotLayerCommonError;
use crate::types::Padding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingKeyword {
    Auto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingBox {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// The `padding` setting of a layer.
///
/// `"auto"` lets auxiliary components negotiate the space around the plot;
/// every other form is a fixed box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingSpec {
    Keyword(PaddingKeyword),
    Uniform(f32),
    Shorthand(Vec<f32>),
    Box(PaddingBox),
}

impl Default for PaddingSpec {
    fn default() -> Self {
        Self::Keyword(PaddingKeyword::Auto)
    }
}

impl PaddingSpec {
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Keyword(PaddingKeyword::Auto))
    }

    /// The fixed padding box, or `None` in auto mode
    pub fn fixed(&self) -> Result<Option<Padding>, PlotLayerCommonError> {
        match self {
            Self::Keyword(PaddingKeyword::Auto) => Ok(None),
            Self::Uniform(value) => Ok(Some(Padding::uniform(*value))),
            Self::Shorthand(values) => Padding::from_shorthand(values).map(Some),
            Self::Box(b) => Ok(Some(Padding::new(b.top, b.right, b.bottom, b.left))),
        }
    }
}
