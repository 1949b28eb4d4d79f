pub mod board;
pub mod fill;
pub mod menu;
pub mod mines;

pub use board::Board;
