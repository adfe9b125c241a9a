pub mod club_points;
pub mod context;
pub mod rank;
pub mod sort_utils;

pub use club_points::*;
pub use context::*;
pub use rank::*;
pub use sort_utils::*;
