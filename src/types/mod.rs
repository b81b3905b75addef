//! Type definitions for gapless

mod error;
mod period;
mod series;

pub use error::*;
pub use period::*;
pub use series::*;
