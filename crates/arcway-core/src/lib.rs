pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{ArcwayError, Result};
pub use tolerance::Tolerance;
