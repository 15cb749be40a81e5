use thiserror::Error;

/// Failures while reading the hand-authored content embedded in the binary.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content '{source_name}' is not valid JSON: {error}")]
    Parse {
        source_name: &'static str,
        #[source]
        error: serde_json::Error,
    },
    #[error("content '{source_name}' entry {position} is not a valid record: {error}")]
    Entry {
        source_name: &'static str,
        position: usize,
        #[source]
        error: serde_json::Error,
    },
    #[error("content '{source_name}' has a record with an empty id (position {position})")]
    EmptyId {
        source_name: &'static str,
        position: usize,
    },
    #[error("content '{source_name}' repeats the id '{id}'")]
    DuplicateId { source_name: &'static str, id: String },
}
