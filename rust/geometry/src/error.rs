use thiserror::Error;

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of an operation that may legitimately do nothing.
///
/// Mirrors the reference source's non-error status codes: `NoOp` means
/// preconditions were unmet and state is unchanged, not that anything
/// went wrong. The "non-fatal" class from the status-code table is
/// reserved and unused upstream, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NoOp,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Fatal errors propagated to the top of the polyhedron driver.
///
/// Each variant is one error site from the reference source's tagged
/// status codes (allocation/reallocation failures and malformed input).
#[derive(Error, Debug)]
pub enum Error {
    #[error("vertex store reallocation failed: requested capacity {requested}, max {max}")]
    VertexStoreRealloc { requested: usize, max: usize },

    #[error("edge store reallocation failed: requested capacity {requested}, max {max}")]
    EdgeStoreRealloc { requested: usize, max: usize },

    #[error("triangulation reallocation failed: requested capacity {requested}, max {max}")]
    TriangulationRealloc { requested: usize, max: usize },

    #[error("face has fewer than 3 vertices: {0}")]
    DegenerateFace(String),

    #[error("vertex index {index} out of range (len {len})")]
    VertexIndexOutOfRange { index: usize, len: usize },
}
