pub use super::error::{Error, Result};
pub use super::region::{unit_box_window, Bounds, BoxWindow, Center, Region};
pub use super::utils::{Indicator, Points, RngSource};
