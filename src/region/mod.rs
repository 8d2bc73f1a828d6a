pub mod box_window;
pub mod unit_box;
pub use box_window::{BoxWindow, Bounds};
pub use unit_box::{unit_box_window, Center};

use rand::Rng;
use tracing::trace;

use crate::{
    error::{Error, Result},
    utils::{random_number_generator, Indicator, Points, RngSource},
};

/// Geometric queries shared by regions of any dimension
pub trait Region {
    /// Number of coordinates a point of this region has
    fn dimension(&self) -> usize;
    /// Whether `point` lies in the region, boundary included.
    ///
    /// Fails if the point does not have [`Region::dimension`] coordinates.
    fn contains(&self, point: &[f64]) -> Result<bool>;
    fn volume(&self) -> f64;
    /// Draw `n` points uniformly from the region using `rng`
    fn rand_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Vec<f64>>;

    /// Draw `n` points uniformly from the region, one row per point
    fn rand(&self, n: usize, source: RngSource<'_>) -> Vec<Vec<f64>> {
        let mut rng = random_number_generator(source);
        self.rand_with(n, &mut rng)
    }
    /// 1 if the point is in the region, else 0
    fn indicator_one(&self, point: &[f64]) -> Result<u8> {
        Ok(u8::from(self.contains(point)?))
    }
    /// Indicator of each row of `points`, in order
    fn indicator_many<P: AsRef<[f64]>>(&self, points: &[P]) -> Result<Vec<u8>> {
        points
            .iter()
            .map(|p| self.indicator_one(p.as_ref()))
            .collect()
    }
    fn indicator_function(&self, points: Points<'_>) -> Result<Indicator> {
        trace!(num_points = points.len(), "evaluating indicator");
        match points {
            Points::One(p) => self.indicator_one(p).map(Indicator::One),
            Points::Many(rows) => self.indicator_many(rows).map(Indicator::Many),
        }
    }
}

/// Fails unless a point or center has one coordinate per axis
fn check_dimension(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_check() {
        assert_eq!(check_dimension(3, 3), Ok(()));
        assert_eq!(
            check_dimension(3, 2),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn indicator_function_keeps_input_shape() {
        let b = BoxWindow::new([[0, 5], [0, 5]]).unwrap();
        let one = [2.5, 2.5];
        assert_eq!(
            b.indicator_function(Points::from(&one)),
            Ok(Indicator::One(1))
        );
        let rows: Vec<Vec<f64>> = Vec::new();
        assert_eq!(
            b.indicator_function(Points::from(&rows)),
            Ok(Indicator::Many(Vec::new()))
        );
    }
}
