use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum FlattenError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("Document has no `layers` array")]
    MissingLayers,
    #[error("Malformed layer #{index} ({name:?}): {source}")]
    MalformedLayer {
        index: usize,
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse json {0}")]
    JsonParsing(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
}
