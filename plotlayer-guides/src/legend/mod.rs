pub mod heatmap;

use serde_json::{Map, Value};

/// Numeric extent of `field` across `rows`, skipping rows where it is missing
/// or not a number
pub fn color_domain(rows: &[Map<String, Value>], field: &str) -> Option<[f64; 2]> {
    rows.iter()
        .filter_map(|row| row.get(field).and_then(Value::as_f64))
        .fold(None, |extent, value| match extent {
            None => Some([value, value]),
            Some([lo, hi]) => Some([lo.min(value), hi.max(value)]),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Map<String, Value>> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_color_domain() {
        let data = rows(json!([
            {"v": 3}, {"v": -1.5}, {"v": "n/a"}, {"other": 100}, {"v": 12}
        ]));
        assert_eq!(color_domain(&data, "v"), Some([-1.5, 12.0]));
        assert_eq!(color_domain(&data, "missing"), None);
        assert_eq!(color_domain(&[], "v"), None);
    }
}
