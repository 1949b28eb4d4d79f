pub mod prompt;
pub mod validate;

pub use prompt::Console;
