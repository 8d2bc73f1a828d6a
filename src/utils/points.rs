/// Input of the indicator function: a single point or a table with one point per row
#[derive(Clone, Copy, Debug)]
pub enum Points<'a> {
    One(&'a [f64]),
    Many(&'a [Vec<f64>]),
}
impl Points<'_> {
    pub fn len(&self) -> usize {
        match self {
            Points::One(_) => 1,
            Points::Many(rows) => rows.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
impl<'a> From<&'a [f64]> for Points<'a> {
    fn from(value: &'a [f64]) -> Self {
        Points::One(value)
    }
}
impl<'a, const D: usize> From<&'a [f64; D]> for Points<'a> {
    fn from(value: &'a [f64; D]) -> Self {
        Points::One(value)
    }
}
impl<'a> From<&'a [Vec<f64>]> for Points<'a> {
    fn from(value: &'a [Vec<f64>]) -> Self {
        Points::Many(value)
    }
}
impl<'a> From<&'a Vec<Vec<f64>>> for Points<'a> {
    fn from(value: &'a Vec<Vec<f64>>) -> Self {
        Points::Many(value)
    }
}

/// Output of the indicator function, shaped like its input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indicator {
    One(u8),
    Many(Vec<u8>),
}
impl Indicator {
    pub fn to_vec(&self) -> Vec<u8> {
        match self {
            Indicator::One(i) => vec![*i],
            Indicator::Many(v) => v.clone(),
        }
    }
}
