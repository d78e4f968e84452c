use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, VariantNames};

/// Scale kinds understood by the rendering engine
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ScaleType {
    Linear,
    Log,
    Pow,
    Time,
    TimeCat,
    Cat,
    Quantize,
    Quantile,
    Identity,
}

/// Per-field scale configuration handed to the rendering engine.
///
/// Every hint is optional. An entry with no hints (the default) lets the
/// engine infer the scale from the data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleEntry {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nice: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    /// Explicit domain values, replacing the inferred domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
}

impl ScaleEntry {
    /// Whether no hint has been applied
    pub fn is_default(&self) -> bool {
        *self == ScaleEntry::default()
    }
}

/// Scale entries keyed by field name, in binding order
pub type ScaleMap = IndexMap<String, ScaleEntry>;
