use tracing::debug;

use crate::error::{Result, SelectionError};
use crate::operations::snap::{MovableSet, ReferenceSet, SnapInput};
use crate::scene::{ObjectId, Scene};

/// Picks the selected object as the reference mesh.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesignateSource;

impl DesignateSource {
    /// Creates a new `DesignateSource` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the single selected object, if it carries a mesh shape.
    ///
    /// # Errors
    ///
    /// Returns an error if zero or several objects are selected, or if the
    /// selected object has no mesh.
    pub fn execute<S: Scene + ?Sized>(&self, scene: &S) -> Result<ObjectId> {
        let selected = scene.selected_objects();
        let &[source] = selected.as_slice() else {
            return Err(SelectionError::SourceCount(selected.len()).into());
        };
        if !scene.has_mesh(source) {
            let name = scene.object_name(source)?;
            return Err(SelectionError::SourceNotMesh(name).into());
        }
        Ok(source)
    }
}

/// Builds a snap input from the selected vertices and every vertex of a
/// reference mesh.
///
/// Reference positions are read when this runs, so edits to the reference
/// mesh after it was designated are picked up.
pub struct AssembleAuto {
    source: Option<ObjectId>,
}

impl AssembleAuto {
    /// Creates a new `AssembleAuto` operation for the designated source.
    #[must_use]
    pub fn new(source: Option<ObjectId>) -> Self {
        Self { source }
    }

    /// Executes the assembly.
    ///
    /// # Errors
    ///
    /// Returns an error if no source is designated or it was deleted, or if
    /// no vertices are selected.
    pub fn execute<S: Scene + ?Sized>(&self, scene: &S) -> Result<SnapInput> {
        let source = self
            .source
            .filter(|id| scene.object_exists(*id))
            .ok_or(SelectionError::SourceMissing)?;

        let targets = scene.selected_vertices();
        if targets.is_empty() {
            return Err(SelectionError::NoTargetVertices.into());
        }

        let reference_verts = scene.mesh_vertices(source)?;
        let references = ReferenceSet::read(scene, &reference_verts);
        let movable = MovableSet::capture(scene, &targets);
        debug!(
            targets = movable.len(),
            references = references.len(),
            "assembled automatic snap"
        );
        Ok(SnapInput::new(movable, references))
    }
}
