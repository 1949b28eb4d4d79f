pub mod generate;
pub mod records;
pub mod session;
pub mod stats;
