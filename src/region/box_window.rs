use std::fmt;

use num_traits::AsPrimitive;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{check_dimension, Region};
use crate::error::{Error, Result};

/// Inclusive lower and upper extent of one axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Bounds {
    lo: f64,
    hi: f64,
}
impl Bounds {
    /// Bounds are only checked once they are part of a [`BoxWindow`]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
    pub fn lo(&self) -> f64 {
        self.lo
    }
    pub fn hi(&self) -> f64 {
        self.hi
    }
    pub fn length(&self) -> f64 {
        self.hi - self.lo
    }
    pub fn center(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
    fn validate(&self, axis: usize) -> Result<()> {
        // uniform sampling scales the length by 1 / (1 - EPSILON), which must stay finite
        let sample_scale = self.length() / (1.0 - f64::EPSILON);
        if !self.lo.is_finite() || !self.hi.is_finite() || !sample_scale.is_finite() {
            return Err(Error::NonFiniteBounds {
                axis,
                lo: self.lo,
                hi: self.hi,
            });
        }
        if self.lo > self.hi {
            return Err(Error::InvertedBounds {
                axis,
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }
}
impl<T: AsPrimitive<f64>> From<[T; 2]> for Bounds {
    fn from([lo, hi]: [T; 2]) -> Self {
        Self::new(lo.as_(), hi.as_())
    }
}
impl<T: AsPrimitive<f64>> From<(T, T)> for Bounds {
    fn from((lo, hi): (T, T)) -> Self {
        Self::new(lo.as_(), hi.as_())
    }
}
impl From<Bounds> for [f64; 2] {
    fn from(value: Bounds) -> Self {
        [value.lo, value.hi]
    }
}
impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Axis-aligned box in any dimension, one [`Bounds`] per axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bounds>", into = "Vec<Bounds>")]
pub struct BoxWindow {
    bounds: Vec<Bounds>,
}
impl BoxWindow {
    // Creation

    /// Create a box from per-axis `(lower, upper)` pairs.
    ///
    /// Fails if any bound is not finite or if a lower bound exceeds its upper
    /// bound. Equal bounds give a degenerate axis of length zero.
    pub fn new<B: Into<Bounds>>(bounds: impl IntoIterator<Item = B>) -> Result<Self> {
        let bounds: Vec<Bounds> = bounds.into_iter().map(Into::into).collect();
        for (axis, b) in bounds.iter().enumerate() {
            if let Err(e) = b.validate(axis) {
                debug!(axis, lo = b.lo, hi = b.hi, "rejected box window bounds");
                return Err(e);
            }
        }
        debug!(dimension = bounds.len(), "created box window");
        Ok(Self { bounds })
    }
    /// Create a box from a table with one `[lower, upper]` row per axis
    pub fn from_rows<T, R>(rows: &[R]) -> Result<Self>
    where
        T: AsPrimitive<f64>,
        R: AsRef<[T]>,
    {
        let bounds = rows
            .iter()
            .enumerate()
            .map(|(axis, row)| match *row.as_ref() {
                [lo, hi] => Ok(Bounds::new(lo.as_(), hi.as_())),
                ref other => Err(Error::RaggedBounds {
                    axis,
                    len: other.len(),
                }),
            })
            .collect::<Result<Vec<Bounds>>>()?;
        Self::new(bounds)
    }

    // Getters

    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }
    pub fn lower(&self) -> Vec<f64> {
        self.bounds.iter().map(Bounds::lo).collect()
    }
    pub fn upper(&self) -> Vec<f64> {
        self.bounds.iter().map(Bounds::hi).collect()
    }
    pub fn lengths(&self) -> Vec<f64> {
        self.bounds.iter().map(Bounds::length).collect()
    }
    pub fn center(&self) -> Vec<f64> {
        self.bounds.iter().map(Bounds::center).collect()
    }
    /// Number of axes, same as [`Region::dimension`]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}
impl TryFrom<Vec<Bounds>> for BoxWindow {
    type Error = Error;

    fn try_from(value: Vec<Bounds>) -> Result<Self> {
        Self::new(value)
    }
}
impl From<BoxWindow> for Vec<Bounds> {
    fn from(value: BoxWindow) -> Self {
        value.bounds
    }
}
impl fmt::Display for BoxWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxWindow: ")?;
        for (i, b) in self.bounds.iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}
impl Region for BoxWindow {
    fn dimension(&self) -> usize {
        self.bounds.len()
    }
    fn contains(&self, point: &[f64]) -> Result<bool> {
        check_dimension(self.dimension(), point.len())?;
        // every axis is compared, even after one has failed
        Ok(self
            .bounds
            .iter()
            .zip(point)
            .fold(true, |inside, (b, &x)| inside & b.contains(x)))
    }
    fn volume(&self) -> f64 {
        self.bounds.iter().map(Bounds::length).product()
    }
    fn rand_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Vec<f64>> {
        let axes: Vec<Uniform<f64>> = self
            .bounds
            .iter()
            .map(|b| Uniform::new_inclusive(b.lo, b.hi))
            .collect();
        debug!(n, dimension = self.dimension(), "sampling box window");
        (0..n)
            .map(|_| axes.iter().map(|u| u.sample(&mut *rng)).collect())
            .collect()
    }
}
