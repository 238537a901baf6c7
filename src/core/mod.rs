pub mod log;
pub mod punch;
