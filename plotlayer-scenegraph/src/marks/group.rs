use plotlayer_common::types::{Gradient, Rect};
use serde::{Deserialize, Serialize};

use crate::marks::mark::SceneMark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    pub name: String,
    pub origin: [f32; 2],
    pub marks: Vec<SceneMark>,
    pub gradients: Vec<Gradient>,
    pub zindex: Option<i32>,
}

impl SceneGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_marks(mut self, marks: Vec<SceneMark>) -> Self {
        self.marks = marks;
        self
    }

    /// Union of the children's bounds, offset by the group origin.
    ///
    /// Empty groups have no bounds.
    pub fn bounding_box(&self) -> Option<Rect> {
        let bounds = self
            .marks
            .iter()
            .filter_map(|mark| mark.bounding_box())
            .reduce(|acc, rect| acc.union(&rect))?;
        Some(Rect::new(
            bounds.x + self.origin[0],
            bounds.y + self.origin[1],
            bounds.width,
            bounds.height,
        ))
    }

    /// Number of marks in this group and all nested groups, groups excluded
    pub fn leaf_count(&self) -> usize {
        self.marks
            .iter()
            .map(|mark| match mark {
                SceneMark::Group(group) => group.leaf_count(),
                _ => 1,
            })
            .sum()
    }
}

impl Default for SceneGroup {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            origin: [0.0, 0.0],
            marks: vec![],
            gradients: vec![],
            zindex: None,
        }
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(mark: SceneGroup) -> Self {
        SceneMark::Group(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::rect::SceneRectMark;
    use crate::marks::text::SceneTextMark;

    #[test]
    fn test_bounding_box_unions_children() {
        let group = SceneGroup {
            origin: [10.0, 20.0],
            marks: vec![
                SceneRectMark::new(0.0, 0.0, 100.0, 10.0).into(),
                SceneRectMark::new(50.0, -5.0, 10.0, 30.0).into(),
            ],
            ..Default::default()
        };
        assert_eq!(
            group.bounding_box(),
            Some(Rect::new(10.0, 15.0, 100.0, 30.0))
        );
    }

    #[test]
    fn test_empty_group_has_no_bounds() {
        assert_eq!(SceneGroup::new("empty").bounding_box(), None);
    }

    #[test]
    fn test_leaf_count_descends() {
        let inner = SceneGroup::new("inner").with_marks(vec![
            SceneTextMark::new("a", 0.0, 0.0).into(),
            SceneTextMark::new("b", 0.0, 0.0).into(),
        ]);
        let outer = SceneGroup::new("outer").with_marks(vec![
            inner.into(),
            SceneRectMark::new(0.0, 0.0, 1.0, 1.0).into(),
        ]);
        assert_eq!(outer.leaf_count(), 3);
    }
}
