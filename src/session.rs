use tracing::debug;

use crate::error::Result;
use crate::operations::{
    AssembleAuto, AssembleManual, DesignateSource, MovableSet, SnapReport, SnapVertices,
};
use crate::scene::{ObjectId, Scene, VertexRef};

/// State held by one snapping tool window.
///
/// The designated reference model drives automatic snaps; the two loaded
/// vertex sets drive manual snaps. Nothing here outlives the session.
#[derive(Debug, Default, Clone)]
pub struct SnapSession {
    reference_model: Option<ObjectId>,
    verts_to_move: MovableSet,
    reference_verts: Vec<VertexRef>,
}

impl SnapSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mesh automatic snaps read reference positions from.
    #[must_use]
    pub fn reference_model(&self) -> Option<ObjectId> {
        self.reference_model
    }

    /// Vertices loaded for a manual snap to move.
    #[must_use]
    pub fn verts_to_move(&self) -> &MovableSet {
        &self.verts_to_move
    }

    /// Vertices loaded for a manual snap to provide positions.
    #[must_use]
    pub fn reference_verts(&self) -> &[VertexRef] {
        &self.reference_verts
    }

    // --- Automatic mode ---

    /// Designates the selected mesh object as the reference model.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the current designation in place, unless
    /// exactly one mesh object is selected.
    pub fn load_reference_model<S: Scene + ?Sized>(&mut self, scene: &S) -> Result<ObjectId> {
        let source = DesignateSource::new().execute(scene)?;
        self.reference_model = Some(source);
        debug!("reference model designated");
        Ok(source)
    }

    /// Snaps the selected vertices onto the reference model's vertices.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the scene, if the reference model
    /// is unset or deleted, or no vertices are selected.
    pub fn snap_to_reference_model<S: Scene + ?Sized>(&self, scene: &mut S) -> Result<SnapReport> {
        let input = AssembleAuto::new(self.reference_model).execute(&*scene)?;
        SnapVertices::new(input).execute(scene)
    }

    // --- Manual mode ---

    /// Replaces the vertices to move with the current vertex selection.
    ///
    /// Returns the number of vertices loaded, which may be zero.
    pub fn load_verts_to_move<S: Scene + ?Sized>(&mut self, scene: &S) -> usize {
        self.verts_to_move = MovableSet::capture(scene, &scene.selected_vertices());
        self.verts_to_move.len()
    }

    /// Forgets the vertices to move.
    pub fn clear_verts_to_move(&mut self) {
        self.verts_to_move = MovableSet::default();
    }

    /// Replaces the reference vertices with the current vertex selection.
    ///
    /// Returns the number of vertices loaded, which may be zero.
    pub fn load_reference_verts<S: Scene + ?Sized>(&mut self, scene: &S) -> usize {
        self.reference_verts = scene.selected_vertices();
        self.reference_verts.len()
    }

    /// Forgets the reference vertices.
    pub fn clear_reference_verts(&mut self) {
        self.reference_verts.clear();
    }

    /// Snaps the loaded vertices onto the loaded reference vertices.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the scene, if either set is not
    /// loaded or its first vertex has been deleted.
    pub fn snap_loaded<S: Scene + ?Sized>(&self, scene: &mut S) -> Result<SnapReport> {
        let input =
            AssembleManual::new(&self.verts_to_move, &self.reference_verts).execute(&*scene)?;
        SnapVertices::new(input).execute(scene)
    }
}
