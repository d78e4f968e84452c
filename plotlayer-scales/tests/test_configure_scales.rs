use plotlayer_common::config::{AxisConfig, ToggleConfig};
use plotlayer_scales::config::{ScaleEntry, ScaleType};
use plotlayer_scales::error::PlotLayerScaleError;
use plotlayer_scales::extract::{configure_scales, ScaleBinding};
use rstest::rstest;
use serde_json::json;

#[test]
fn test_unconfigured_fields_get_default_entries() {
    let scales = configure_scales([ScaleBinding::new("x", None), ScaleBinding::new("y", None)])
        .unwrap();

    assert_eq!(scales.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    assert!(scales["x"].is_default());
    assert!(scales["y"].is_default());
}

#[test]
fn test_visual_only_axis_leaves_entry_default() {
    // Axis blocks that only toggle visuals carry no scale hints
    let axis = AxisConfig {
        auto_rotate_label: true,
        grid: Some(ToggleConfig {
            visible: false,
            style: None,
        }),
        ..Default::default()
    };
    let scales = configure_scales([
        ScaleBinding::new("x", Some(&axis)),
        ScaleBinding::new("y", Some(&axis)),
    ])
    .unwrap();

    assert!(scales["x"].is_default());
    assert!(scales["y"].is_default());
}

#[test]
fn test_axis_hints_fold_into_entry() {
    let x_axis: AxisConfig = serde_json::from_value(json!({
        "type": "cat",
        "domain": ["Mon", "Tue", "Wed"]
    }))
    .unwrap();
    let y_axis: AxisConfig = serde_json::from_value(json!({
        "nice": true,
        "min": 0,
        "max": 100,
        "tickCount": 5
    }))
    .unwrap();

    let scales = configure_scales([
        ScaleBinding::new("day", Some(&x_axis)),
        ScaleBinding::new("hour", Some(&y_axis)),
    ])
    .unwrap();

    assert_eq!(
        scales["day"],
        ScaleEntry {
            scale_type: Some(ScaleType::Cat),
            values: Some(vec![json!("Mon"), json!("Tue"), json!("Wed")]),
            ..Default::default()
        }
    );
    assert_eq!(
        scales["hour"],
        ScaleEntry {
            nice: Some(true),
            min: Some(0.0),
            max: Some(100.0),
            tick_count: Some(5),
            ..Default::default()
        }
    );
}

#[test]
fn test_field_bound_twice_keeps_last_binding() {
    let axis: AxisConfig = serde_json::from_value(json!({"nice": true})).unwrap();
    let scales = configure_scales([
        ScaleBinding::new("v", Some(&axis)),
        ScaleBinding::new("v", None),
    ])
    .unwrap();

    assert_eq!(scales.len(), 1);
    assert!(scales["v"].is_default());
}

#[rstest]
#[case(json!({"type": "spiral"}), PlotLayerScaleError::UnknownScaleType("spiral".to_string(), "x".to_string()))]
#[case(json!({"min": 5, "max": 1}), PlotLayerScaleError::InvertedBounds { field: "x".to_string(), min: 5.0, max: 1.0 })]
#[case(json!({"tickCount": 0}), PlotLayerScaleError::ZeroTickCount("x".to_string()))]
#[case(json!({"tickInterval": -2}), PlotLayerScaleError::NonPositiveTickInterval { field: "x".to_string(), value: -2.0 })]
fn test_malformed_hints_are_rejected(
    #[case] axis: serde_json::Value,
    #[case] expected: PlotLayerScaleError,
) {
    let axis: AxisConfig = serde_json::from_value(axis).unwrap();
    let err = configure_scales([ScaleBinding::new("x", Some(&axis))]).unwrap_err();
    assert_eq!(err, expected);
}
