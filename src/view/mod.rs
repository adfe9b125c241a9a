pub mod tables;

pub use tables::*;
