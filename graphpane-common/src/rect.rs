use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An axis-aligned rectangle in pixel coordinates, origin at the top-left.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
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

    /// A zero-size rectangle at the origin.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the point lies inside the rectangle. Points on the left/top
    /// edges are inside, points on the right/bottom edges are outside.
    pub fn contains(&self, point: [f32; 2]) -> bool {
        !self.is_empty()
            && point[0] >= self.left()
            && point[0] < self.right()
            && point[1] >= self.top()
            && point[1] < self.bottom()
    }
}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        [self.x, self.y, self.width, self.height]
            .iter()
            .for_each(|v| OrderedFloat::from(*v).hash(state));
    }
}
