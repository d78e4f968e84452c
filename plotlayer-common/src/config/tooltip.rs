use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::default_true;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crosshairs: Option<Value>,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            visible: true,
            shared: None,
            crosshairs: None,
        }
    }
}
