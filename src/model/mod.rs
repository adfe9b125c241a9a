pub mod station;
pub mod types;

pub use station::*;
pub use types::*;
