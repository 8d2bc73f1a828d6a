/// Tagged inputs and outputs of the indicator function
pub mod points;
/// Resolution of random number generators
pub mod rng;

pub use points::{Indicator, Points};
pub use rng::{random_number_generator, Generator, RngSource};
