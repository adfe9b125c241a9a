use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PipelineError {
    #[error("record '{team}' reached scoring without an assigned rank")]
    UnrankedRecord { team: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for PipelineError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for PipelineError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
