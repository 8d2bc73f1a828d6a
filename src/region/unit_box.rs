use super::{check_dimension, BoxWindow, Bounds};
use crate::error::Result;

/// Midpoint of a unit box, either shared by every axis or given per axis
#[derive(Clone, Debug, PartialEq)]
pub enum Center {
    Scalar(f64),
    Vector(Vec<f64>),
}
impl From<f64> for Center {
    fn from(value: f64) -> Self {
        Center::Scalar(value)
    }
}
impl From<Vec<f64>> for Center {
    fn from(value: Vec<f64>) -> Self {
        Center::Vector(value)
    }
}
impl From<&[f64]> for Center {
    fn from(value: &[f64]) -> Self {
        Center::Vector(value.to_vec())
    }
}
impl<const D: usize> From<[f64; D]> for Center {
    fn from(value: [f64; D]) -> Self {
        Center::Vector(value.to_vec())
    }
}

/// Hypercube of side 1 centered on `center`, with `dimension` axes
pub fn unit_box_window(center: impl Into<Center>, dimension: usize) -> Result<BoxWindow> {
    let half_side = |c: f64| Bounds::new(c - 0.5, c + 0.5);
    let bounds = match center.into() {
        Center::Scalar(c) => vec![half_side(c); dimension],
        Center::Vector(c) => {
            check_dimension(dimension, c.len())?;
            c.into_iter().map(half_side).collect()
        }
    };
    BoxWindow::new(bounds)
}

impl BoxWindow {
    /// See [`unit_box_window`]
    pub fn unit(center: impl Into<Center>, dimension: usize) -> Result<Self> {
        unit_box_window(center, dimension)
    }
}
