pub mod core;
pub mod console;
pub mod grid;
pub mod text;
