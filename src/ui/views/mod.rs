pub mod completion;
pub mod quiz;
pub mod start;
