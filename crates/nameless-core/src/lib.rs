pub mod common;
pub mod context;
pub mod term;
