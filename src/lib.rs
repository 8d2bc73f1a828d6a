pub mod error;
pub mod prelude;
pub mod region;
pub mod utils;

pub use error::{Error, Result};
pub use region::*;
pub use utils::{random_number_generator, Generator, Indicator, Points, RngSource};
