use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors at the reader/writer boundary: malformed input and
/// external-format write failures, each its own error site.
#[derive(Error, Debug)]
pub enum Error {
    #[error("OFF parse error: {0}")]
    OffParse(String),

    #[error("STL write error: {0}")]
    StlWrite(String),

    #[error("frame pipe error: {0}")]
    FramePipe(String),

    #[error("geometry core error: {0}")]
    Geometry(#[from] triangulate_geometry::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
