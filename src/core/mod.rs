pub mod error;

pub use error::{LabError, Result};
