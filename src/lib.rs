pub mod error;
pub mod model;
pub mod processing;
pub mod score;
pub mod view;

pub use error::PipelineError;
pub use score::context::{PipelineConfig, ResultTables, process_snapshot};
