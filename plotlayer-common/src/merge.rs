//! Deep merging of configuration values.
//!
//! Layer configuration is plain structured data. A chart type declares its
//! defaults as a [`Value`] and the caller supplies overrides in the same shape;
//! the effective configuration is the deep merge of the two.

use serde_json::{Map, Value};

/// Deep merge `overrides` on top of `defaults`, returning a new value.
///
/// Objects present on both sides are merged key by key, recursively. For every
/// other combination the override replaces the default wholesale. In
/// particular arrays are never merged element-wise and an explicit `null`
/// override clears the default. Neither input is modified.
pub fn deep_merge(defaults: &Value, overrides: &Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(base), Value::Object(over)) => Value::Object(merge_objects(base, over)),
        (_, over) => over.clone(),
    }
}

/// Merge a sequence of layers left to right, later layers winning.
pub fn deep_merge_all<'a>(layers: impl IntoIterator<Item = &'a Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Object(Map::new()), |acc, layer| deep_merge(&acc, layer))
}

fn merge_objects(base: &Map<String, Value>, over: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in over {
        let next = match merged.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_override_keeps_siblings() {
        let defaults = json!({"legend": {"visible": true, "position": "bottom-center"}});
        let overrides = json!({"legend": {"position": "top-left"}});

        let merged = deep_merge(&defaults, &overrides);
        assert_eq!(
            merged,
            json!({"legend": {"visible": true, "position": "top-left"}})
        );
    }

    #[test]
    fn test_arrays_are_replaced() {
        let defaults = json!({"color": ["red", "green", "blue"]});
        let overrides = json!({"color": ["black"]});

        let merged = deep_merge(&defaults, &overrides);
        assert_eq!(merged, json!({"color": ["black"]}));
    }

    #[test]
    fn test_defaults_are_not_modified() {
        let defaults = json!({"xAxis": {"grid": {"visible": false}}});
        let snapshot = defaults.clone();
        let overrides = json!({"xAxis": {"grid": {"visible": true}, "nice": true}});

        let merged = deep_merge(&defaults, &overrides);
        assert_eq!(defaults, snapshot);
        assert_eq!(merged["xAxis"]["grid"]["visible"], json!(true));
        assert_eq!(merged["xAxis"]["nice"], json!(true));
    }

    #[test]
    fn test_null_override_clears_default() {
        let defaults = json!({"xAxis": {"visible": true}, "padding": "auto"});
        let overrides = json!({"xAxis": null});

        let merged = deep_merge(&defaults, &overrides);
        assert_eq!(merged, json!({"xAxis": null, "padding": "auto"}));
    }

    #[test]
    fn test_object_replaces_scalar_and_vice_versa() {
        let merged = deep_merge(&json!({"padding": "auto"}), &json!({"padding": {"top": 10}}));
        assert_eq!(merged, json!({"padding": {"top": 10}}));

        let merged = deep_merge(&json!({"padding": {"top": 10}}), &json!({"padding": "auto"}));
        assert_eq!(merged, json!({"padding": "auto"}));
    }

    #[test]
    fn test_merge_all_is_order_stable() {
        let a = json!({"a": 1, "nested": {"x": 1, "y": 1}});
        let b = json!({"nested": {"y": 2}});
        let c = json!({"a": 3, "nested": {"z": 3}});

        let merged = deep_merge_all([&a, &b, &c]);
        assert_eq!(merged, json!({"a": 3, "nested": {"x": 1, "y": 2, "z": 3}}));
    }
}
