use std::str::FromStr;

use plotlayer_common::config::AxisConfig;

use crate::config::{ScaleEntry, ScaleMap, ScaleType};
use crate::error::PlotLayerScaleError;

/// A bound field together with the axis block that configures it
#[derive(Debug, Clone, Copy)]
pub struct ScaleBinding<'a> {
    pub field: &'a str,
    pub axis: Option<&'a AxisConfig>,
}

impl<'a> ScaleBinding<'a> {
    pub fn new(field: &'a str, axis: Option<&'a AxisConfig>) -> Self {
        Self { field, axis }
    }
}

/// Fold the scale hints of an axis block into a scale entry.
///
/// Returns a new entry; hints absent from the axis block keep the value they
/// have in `entry`.
pub fn extract_scale(
    field: &str,
    entry: &ScaleEntry,
    axis: &AxisConfig,
) -> Result<ScaleEntry, PlotLayerScaleError> {
    let scale_type = match axis.scale_type.as_deref() {
        Some(name) => Some(
            ScaleType::from_str(name).map_err(|_| {
                PlotLayerScaleError::UnknownScaleType(name.to_string(), field.to_string())
            })?,
        ),
        None => entry.scale_type,
    };

    let extracted = ScaleEntry {
        scale_type,
        nice: axis.nice.or(entry.nice),
        min: axis.min.or(entry.min),
        max: axis.max.or(entry.max),
        min_limit: axis.min_limit.or(entry.min_limit),
        max_limit: axis.max_limit.or(entry.max_limit),
        tick_count: axis.tick_count.or(entry.tick_count),
        tick_interval: axis.tick_interval.or(entry.tick_interval),
        mask: axis.mask.clone().or_else(|| entry.mask.clone()),
        values: axis.domain.clone().or_else(|| entry.values.clone()),
    };
    validate(field, &extracted)?;
    Ok(extracted)
}

fn validate(field: &str, entry: &ScaleEntry) -> Result<(), PlotLayerScaleError> {
    if let (Some(min), Some(max)) = (entry.min, entry.max) {
        if min > max {
            return Err(PlotLayerScaleError::InvertedBounds {
                field: field.to_string(),
                min,
                max,
            });
        }
    }
    if entry.tick_count == Some(0) {
        return Err(PlotLayerScaleError::ZeroTickCount(field.to_string()));
    }
    if let Some(value) = entry.tick_interval {
        if value <= 0.0 {
            return Err(PlotLayerScaleError::NonPositiveTickInterval {
                field: field.to_string(),
                value,
            });
        }
    }
    Ok(())
}

/// Build one scale entry per bound field.
///
/// Each binding starts from an empty entry; when it has an axis block the
/// block's hints are folded in. A field bound twice keeps the entry of its
/// last binding.
pub fn configure_scales<'a>(
    bindings: impl IntoIterator<Item = ScaleBinding<'a>>,
) -> Result<ScaleMap, PlotLayerScaleError> {
    let mut scales = ScaleMap::new();
    for binding in bindings {
        let entry = match binding.axis {
            Some(axis) => extract_scale(binding.field, &ScaleEntry::default(), axis)?,
            None => ScaleEntry::default(),
        };
        scales.insert(binding.field.to_string(), entry);
    }
    Ok(scales)
}
