use thiserror::Error;

/// Top-level error type for the vertex snapping tool.
#[derive(Debug, Error)]
pub enum SnapError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised when a handle no longer resolves to a live scene element.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("object not found")]
    ObjectNotFound,

    #[error("vertex {index} not found")]
    VertexNotFound { index: u32 },

    #[error("'{0}' has no mesh shape")]
    NotAMesh(String),
}

/// Errors in how the user designated sources and targets.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("select exactly one mesh object as the source ({0} selected)")]
    SourceCount(usize),

    #[error("'{0}' is not a valid mesh object")]
    SourceNotMesh(String),

    #[error("no source model set, or the source has been deleted")]
    SourceMissing,

    #[error("select the target vertices to move")]
    NoTargetVertices,

    #[error("target vertices are not loaded; load targets first")]
    TargetsNotLoaded,

    #[error("source vertices are not loaded; load sources first")]
    SourcesNotLoaded,

    #[error("source or target object has been deleted; reload the vertices")]
    StaleVertices,
}

/// Errors raised by the snap operation itself.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("no vertices to move")]
    EmptyMovableSet,

    #[error("no reference positions to snap to")]
    EmptyReferenceSet,
}

/// Convenience type alias for results using [`SnapError`].
pub type Result<T> = std::result::Result<T, SnapError>;
