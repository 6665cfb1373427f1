use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("unrecognized file extension: {0}")]
    UnknownExtension(String),
    #[error("no editor is registered for {0} files")]
    NoEditor(String),
    #[error("malformed asset: {0}")]
    MalformedAsset(String),
    #[error("window state error: {0}")]
    WindowState(String),
    #[error("process error: {0}")]
    Process(String),
    #[error("project error: {0}")]
    Project(String),
}
