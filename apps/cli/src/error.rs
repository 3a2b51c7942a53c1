use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Thin wrapper bridging the library crates' error types to a single type
/// the binary can propagate from `main`, in the same `#[from]`-conversion
/// idiom this codebase family uses at its own process boundary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Geometry(#[from] triangulate_geometry::Error),

    #[error(transparent)]
    Io(#[from] triangulate_io::Error),

    #[error("could not open {path}: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create {path}: {source}")]
    CreateFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
