use tracing::debug;

use crate::error::{Result, SelectionError};
use crate::operations::snap::{MovableSet, ReferenceSet, SnapInput};
use crate::scene::{Scene, VertexRef};

/// Builds a snap input from two previously loaded vertex sets.
///
/// The current selection is not consulted. Reference positions are re-read
/// through their handles; reference vertices that no longer exist are dropped.
pub struct AssembleManual<'a> {
    targets: &'a MovableSet,
    references: &'a [VertexRef],
}

impl<'a> AssembleManual<'a> {
    /// Creates a new `AssembleManual` operation.
    #[must_use]
    pub fn new(targets: &'a MovableSet, references: &'a [VertexRef]) -> Self {
        Self {
            targets,
            references,
        }
    }

    /// Executes the assembly.
    ///
    /// # Errors
    ///
    /// Returns an error if either set was never loaded, or if the first
    /// vertex of either set has been deleted since it was loaded.
    pub fn execute<S: Scene + ?Sized>(&self, scene: &S) -> Result<SnapInput> {
        let Some(first_target) = self.targets.first() else {
            return Err(SelectionError::TargetsNotLoaded.into());
        };
        let Some(&first_reference) = self.references.first() else {
            return Err(SelectionError::SourcesNotLoaded.into());
        };
        if !scene.vertex_exists(first_target.vertex) || !scene.vertex_exists(first_reference) {
            return Err(SelectionError::StaleVertices.into());
        }

        let references = ReferenceSet::read(scene, self.references);
        debug!(
            targets = self.targets.len(),
            references = references.len(),
            dropped = self.references.len() - references.len(),
            "assembled manual snap"
        );
        Ok(SnapInput::new(self.targets.clone(), references))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SnapError;
    use crate::math::Point3;
    use crate::scene::MemoryScene;

    fn setup() -> (MemoryScene, Vec<VertexRef>, Vec<VertexRef>) {
        let mut scene = MemoryScene::new();
        let t = scene.add_mesh("|t", vec![Point3::new(0.1, 0.0, 0.0)]);
        let r = scene.add_mesh(
            "|r",
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
        );
        (
            scene,
            vec![VertexRef::new(t, 0)],
            vec![VertexRef::new(r, 0), VertexRef::new(r, 1)],
        )
    }

    #[test]
    fn assembles_loaded_sets() {
        let (scene, targets, refs) = setup();
        let movable = MovableSet::capture(&scene, &targets);
        let input = AssembleManual::new(&movable, &refs).execute(&scene).unwrap();
        assert_eq!(input.movable, movable);
        assert_eq!(input.references.len(), 2);
    }

    #[test]
    fn reports_which_set_is_missing() {
        let (scene, targets, refs) = setup();
        let empty = MovableSet::default();
        let err = AssembleManual::new(&empty, &refs).execute(&scene).unwrap_err();
        assert!(matches!(
            err,
            SnapError::Selection(SelectionError::TargetsNotLoaded)
        ));

        let movable = MovableSet::capture(&scene, &targets);
        let err = AssembleManual::new(&movable, &[]).execute(&scene).unwrap_err();
        assert!(matches!(
            err,
            SnapError::Selection(SelectionError::SourcesNotLoaded)
        ));
    }

    #[test]
    fn targets_checked_before_sources() {
        let (scene, _, _) = setup();
        let empty = MovableSet::default();
        let err = AssembleManual::new(&empty, &[]).execute(&scene).unwrap_err();
        assert!(matches!(
            err,
            SnapError::Selection(SelectionError::TargetsNotLoaded)
        ));
    }

    #[test]
    fn stale_first_vertex_is_rejected() {
        let (mut scene, targets, refs) = setup();
        let movable = MovableSet::capture(&scene, &targets);
        scene.remove_object(refs[0].object).unwrap();
        let err = AssembleManual::new(&movable, &refs).execute(&scene).unwrap_err();
        assert!(matches!(
            err,
            SnapError::Selection(SelectionError::StaleVertices)
        ));

        let (mut scene, targets, refs) = setup();
        let movable = MovableSet::capture(&scene, &targets);
        scene.remove_object(targets[0].object).unwrap();
        let err = AssembleManual::new(&movable, &refs).execute(&scene).unwrap_err();
        assert!(matches!(
            err,
            SnapError::Selection(SelectionError::StaleVertices)
        ));
    }

    #[test]
    fn references_reread_at_call_time() {
        let (mut scene, targets, refs) = setup();
        let movable = MovableSet::capture(&scene, &targets);
        scene
            .set_vertex_position(refs[1], Point3::new(0.0, 3.0, 0.0))
            .unwrap();
        let input = AssembleManual::new(&movable, &refs).execute(&scene).unwrap();
        assert_eq!(input.references.points()[1], Point3::new(0.0, 3.0, 0.0));
    }
}
