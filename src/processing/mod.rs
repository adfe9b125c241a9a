pub mod clock;
pub mod club;
pub mod station_mapper;
pub mod team;

pub use clock::*;
pub use club::*;
pub use station_mapper::*;
pub use team::*;
