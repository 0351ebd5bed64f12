//! Font traits and font requests.

mod request;
mod traits;

pub use request::{AvailableFace, FontRequest};
pub use traits::{FontAngle, FontWeight, FontWidth};
