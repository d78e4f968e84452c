use css_color_parser::Color;
use serde::{Deserialize, Serialize};

use crate::error::PlotLayerCommonError;

/// Axis aligned rectangle in logical canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Shrink by `padding`, clamping the size at zero
    pub fn inset(&self, padding: &Padding) -> Rect {
        Rect::new(
            self.x + padding.left,
            self.y + padding.top,
            (self.width - padding.left - padding.right).max(0.0),
            (self.height - padding.top - padding.bottom).max(0.0),
        )
    }
}

/// Resolved padding around a plot area
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Expand CSS style shorthand (`[all]`, `[vertical, horizontal]`,
    /// `[top, horizontal, bottom]`, `[top, right, bottom, left]`)
    pub fn from_shorthand(values: &[f32]) -> Result<Self, PlotLayerCommonError> {
        match *values {
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self::new(vertical, horizontal, vertical, horizontal)),
            [top, horizontal, bottom] => Ok(Self::new(top, horizontal, bottom, horizontal)),
            [top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            _ => Err(PlotLayerCommonError::InvalidPaddingShorthand(values.len())),
        }
    }
}

impl std::ops::Add for Padding {
    type Output = Padding;

    fn add(self, rhs: Padding) -> Padding {
        Padding::new(
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
            self.left + rhs.left,
        )
    }
}

impl std::ops::AddAssign for Padding {
    fn add_assign(&mut self, rhs: Padding) {
        *self = *self + rhs;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorOrGradient {
    Color([f32; 4]),
    GradientIndex(u32),
}

impl ColorOrGradient {
    pub fn transparent() -> Self {
        ColorOrGradient::Color([0.0, 0.0, 0.0, 0.0])
    }

    pub fn color_or_transparent(&self) -> [f32; 4] {
        match self {
            ColorOrGradient::Color(c) => *c,
            _ => [0.0, 0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gradient {
    LinearGradient(LinearGradient),
}

impl Gradient {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::LinearGradient(grad) => grad.stops.as_slice(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: [f32; 4],
}

/// Parse a CSS color string into normalized RGBA components
pub fn parse_css_color(value: &str) -> Result<[f32; 4], PlotLayerCommonError> {
    value
        .trim()
        .parse::<Color>()
        .map(|color| {
            [
                color.r as f32 / 255.0,
                color.g as f32 / 255.0,
                color.b as f32 / 255.0,
                color.a,
            ]
        })
        .map_err(|_| PlotLayerCommonError::InvalidColor(value.to_string()))
}

/// Spread an ordered color ramp evenly over `[0, 1]`
pub fn color_ramp_stops<S: AsRef<str>>(
    ramp: &[S],
) -> Result<Vec<GradientStop>, PlotLayerCommonError> {
    if ramp.is_empty() {
        return Err(PlotLayerCommonError::EmptyColorRamp);
    }
    let last = (ramp.len() - 1).max(1) as f32;
    ramp.iter()
        .enumerate()
        .map(|(i, color)| {
            Ok(GradientStop {
                offset: if ramp.len() == 1 { 0.0 } else { i as f32 / last },
                color: parse_css_color(color.as_ref())?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[10.0], Padding::uniform(10.0))]
    #[case(&[10.0, 20.0], Padding::new(10.0, 20.0, 10.0, 20.0))]
    #[case(&[1.0, 2.0, 3.0], Padding::new(1.0, 2.0, 3.0, 2.0))]
    #[case(&[1.0, 2.0, 3.0, 4.0], Padding::new(1.0, 2.0, 3.0, 4.0))]
    fn test_padding_shorthand(#[case] values: &[f32], #[case] expected: Padding) {
        assert_eq!(Padding::from_shorthand(values), Ok(expected));
    }

    #[test]
    fn test_padding_shorthand_rejects_bad_length() {
        assert_eq!(
            Padding::from_shorthand(&[]),
            Err(PlotLayerCommonError::InvalidPaddingShorthand(0))
        );
        assert_eq!(
            Padding::from_shorthand(&[1.0; 5]),
            Err(PlotLayerCommonError::InvalidPaddingShorthand(5))
        );
    }

    #[test]
    fn test_rect_inset_clamps() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = rect.inset(&Padding::new(10.0, 20.0, 60.0, 5.0));
        assert_eq!(inner, Rect::new(5.0, 10.0, 75.0, 0.0));
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 20.0, 5.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
    }

    #[test]
    fn test_parse_css_color() {
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0.5)"), Ok([0.0, 0.0, 0.0, 0.5]));
        assert_eq!(parse_css_color("#ffffff"), Ok([1.0, 1.0, 1.0, 1.0]));
        assert_eq!(
            parse_css_color("not-a-color"),
            Err(PlotLayerCommonError::InvalidColor("not-a-color".to_string()))
        );
    }

    #[test]
    fn test_color_ramp_stops() {
        let stops = color_ramp_stops(&["red", "lime", "blue"]).unwrap();
        let offsets: Vec<_> = stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(stops[1].color, [0.0, 1.0, 0.0, 1.0]);

        let empty: [&str; 0] = [];
        assert_eq!(
            color_ramp_stops(&empty),
            Err(PlotLayerCommonError::EmptyColorRamp)
        );
    }
}
