pub mod feedback;
pub mod handle;
pub mod memory;

pub use feedback::{Feedback, Message, MessageLevel, RecordedFeedback, TracingFeedback};
pub use handle::{short_name, ObjectId, VertexRef};
pub use memory::{MemoryScene, MeshData, ObjectData, SelectionItem};

use std::ops::{Deref, DerefMut};

use crate::error::SceneError;
use crate::math::Point3;

/// The host application's scene, as seen by the snapping tool.
///
/// Handles are resolved on every call; implementors must tolerate handles
/// whose object has since been deleted.
pub trait Scene {
    /// Returns the whole objects in the current selection.
    fn selected_objects(&self) -> Vec<ObjectId>;

    /// Returns the selected vertex components, flattened to one entry per vertex.
    fn selected_vertices(&self) -> Vec<VertexRef>;

    /// Returns `true` if the object still exists.
    fn object_exists(&self, object: ObjectId) -> bool;

    /// Returns `true` if the vertex's object exists and the index is in range.
    fn vertex_exists(&self, vertex: VertexRef) -> bool;

    /// Returns the long name of the object.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    fn object_name(&self, object: ObjectId) -> Result<String, SceneError>;

    /// Returns `true` if the object carries a mesh shape.
    fn has_mesh(&self, object: ObjectId) -> bool;

    /// Returns every vertex of the object's mesh, in index order.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist or has no mesh.
    fn mesh_vertices(&self, object: ObjectId) -> Result<Vec<VertexRef>, SceneError>;

    /// Returns the current world-space position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex no longer exists.
    fn vertex_position(&self, vertex: VertexRef) -> Result<Point3, SceneError>;

    /// Moves a vertex to an absolute world-space position.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex no longer exists.
    fn set_vertex_position(&mut self, vertex: VertexRef, position: Point3)
        -> Result<(), SceneError>;

    /// Starts grouping subsequent edits into one undo step.
    fn open_undo_chunk(&mut self);

    /// Ends the group started by [`Scene::open_undo_chunk`].
    fn close_undo_chunk(&mut self);
}

/// An open undo chunk that closes when dropped.
///
/// Scene edits go through the guard, so the chunk is closed exactly once even
/// if the batch returns early or unwinds.
pub struct UndoChunk<'a, S: Scene + ?Sized> {
    scene: &'a mut S,
}

impl<'a, S: Scene + ?Sized> UndoChunk<'a, S> {
    /// Opens an undo chunk on `scene`.
    pub fn open(scene: &'a mut S) -> Self {
        scene.open_undo_chunk();
        Self { scene }
    }
}

impl<S: Scene + ?Sized> Deref for UndoChunk<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.scene
    }
}

impl<S: Scene + ?Sized> DerefMut for UndoChunk<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.scene
    }
}

impl<S: Scene + ?Sized> Drop for UndoChunk<'_, S> {
    fn drop(&mut self) {
        self.scene.close_undo_chunk();
    }
}
