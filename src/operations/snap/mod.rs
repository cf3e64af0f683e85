mod input;

pub use input::{MovableSet, MovableVertex, ReferenceSet, SnapInput};

use std::fmt;

use tracing::{debug, info};

use crate::error::{OperationError, Result};
use crate::math::nearest_point;
use crate::scene::{Scene, UndoChunk};

/// Outcome of a snap batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapReport {
    /// Vertices moved onto a reference position.
    pub processed: usize,
    /// Vertices skipped because their handle no longer resolved.
    pub skipped: usize,
}

impl SnapReport {
    /// Returns `true` if the batch moved nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processed == 0
    }
}

impl fmt::Display for SnapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snapped {} vertex(es)", self.processed)?;
        if self.skipped > 0 {
            write!(f, ", skipped {}", self.skipped)?;
        }
        Ok(())
    }
}

/// Moves every movable vertex onto its nearest reference position.
///
/// Each vertex's current world position is re-read from the scene; the
/// capture-time snapshot is not used. All writes land in one undo step.
pub struct SnapVertices {
    input: SnapInput,
}

impl SnapVertices {
    /// Creates a new `SnapVertices` operation.
    #[must_use]
    pub fn new(input: SnapInput) -> Self {
        Self { input }
    }

    /// Executes the snap, returning how many vertices were moved.
    ///
    /// A vertex whose handle no longer resolves is skipped and does not stop
    /// the batch.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the scene, if either set is empty.
    pub fn execute<S: Scene + ?Sized>(&self, scene: &mut S) -> Result<SnapReport> {
        let movable = &self.input.movable;
        let references = self.input.references.points();
        if movable.is_empty() {
            return Err(OperationError::EmptyMovableSet.into());
        }
        if references.is_empty() {
            return Err(OperationError::EmptyReferenceSet.into());
        }

        let mut report = SnapReport::default();
        let mut chunk = UndoChunk::open(scene);

        for entry in movable {
            let vertex = entry.vertex;
            if !chunk.vertex_exists(vertex) {
                debug!(index = vertex.index, "vertex gone, skipping");
                report.skipped += 1;
                continue;
            }
            let from = match chunk.vertex_position(vertex) {
                Ok(p) => p,
                Err(err) => {
                    debug!(index = vertex.index, %err, "cannot read vertex, skipping");
                    report.skipped += 1;
                    continue;
                }
            };
            let Some(nearest) = nearest_point(&from, references) else {
                continue;
            };
            match chunk.set_vertex_position(vertex, nearest.point) {
                Ok(()) => {
                    debug!(
                        index = vertex.index,
                        reference = nearest.index,
                        distance_squared = nearest.distance_squared,
                        "snapped vertex"
                    );
                    report.processed += 1;
                }
                Err(err) => {
                    debug!(index = vertex.index, %err, "cannot write vertex, skipping");
                    report.skipped += 1;
                }
            }
        }

        drop(chunk);
        info!(
            processed = report.processed,
            skipped = report.skipped,
            references = references.len(),
            "snap finished"
        );
        Ok(report)
    }
}
