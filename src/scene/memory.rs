use std::collections::HashSet;
use std::ops::Range;

use slotmap::SlotMap;
use tracing::{debug, warn};

use super::handle::{ObjectId, VertexRef};
use super::Scene;
use crate::error::SceneError;
use crate::math::{Isometry3, Point3};

/// Vertex positions of a mesh shape, in the object's local space.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub points: Vec<Point3>,
}

impl MeshData {
    /// Creates a mesh from local-space vertex positions.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }
}

/// A scene object: a named transform with an optional mesh shape.
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// Long `|`-separated name.
    pub name: String,
    /// Local-to-world transform.
    pub transform: Isometry3,
    /// The mesh shape, if the object has one.
    pub mesh: Option<MeshData>,
}

impl ObjectData {
    /// Creates an object with no shape at the world origin.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Isometry3::identity(),
            mesh: None,
        }
    }

    /// Attaches a mesh shape.
    #[must_use]
    pub fn with_mesh(mut self, points: Vec<Point3>) -> Self {
        self.mesh = Some(MeshData::new(points));
        self
    }

    /// Sets the local-to-world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Isometry3) -> Self {
        self.transform = transform;
        self
    }
}

/// One entry of the scene selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionItem {
    /// A whole object.
    Object(ObjectId),
    /// A run of vertex components (`obj.vtx[start:end]`, end exclusive).
    Vertices { object: ObjectId, range: Range<u32> },
}

/// Previous local position of a vertex, kept for undo.
#[derive(Debug, Clone, Copy)]
struct PositionChange {
    vertex: VertexRef,
    previous: Point3,
}

/// An in-memory host scene.
///
/// Objects live in a generational arena, so handles to deleted objects stop
/// resolving instead of aliasing newer ones. Vertex edits are recorded on an
/// undo stack: everything between the outermost open and close of an undo
/// chunk is one step, and edits made outside a chunk are a step each.
#[derive(Debug, Default)]
pub struct MemoryScene {
    objects: SlotMap<ObjectId, ObjectData>,
    selection: Vec<SelectionItem>,
    undo_steps: Vec<Vec<PositionChange>>,
    pending: Vec<PositionChange>,
    chunk_depth: usize,
}

impl MemoryScene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Objects ---

    /// Inserts an object and returns its ID.
    pub fn add_object(&mut self, data: ObjectData) -> ObjectId {
        self.objects.insert(data)
    }

    /// Inserts a mesh object at the world origin.
    pub fn add_mesh(&mut self, name: impl Into<String>, points: Vec<Point3>) -> ObjectId {
        self.add_object(ObjectData::new(name).with_mesh(points))
    }

    /// Deletes an object and drops it from the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn remove_object(&mut self, id: ObjectId) -> Result<ObjectData, SceneError> {
        let data = self.objects.remove(id).ok_or(SceneError::ObjectNotFound)?;
        self.selection.retain(|item| match item {
            SelectionItem::Object(object) | SelectionItem::Vertices { object, .. } => {
                *object != id
            }
        });
        debug!(name = %data.name, "removed object");
        Ok(data)
    }

    /// Returns a reference to the object data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn object(&self, id: ObjectId) -> Result<&ObjectData, SceneError> {
        self.objects.get(id).ok_or(SceneError::ObjectNotFound)
    }

    /// Returns a mutable reference to the object data, or an error if not found.
    ///
    /// Edits made through this reference bypass the undo stack.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut ObjectData, SceneError> {
        self.objects.get_mut(id).ok_or(SceneError::ObjectNotFound)
    }

    fn mesh(&self, id: ObjectId) -> Result<&MeshData, SceneError> {
        let data = self.object(id)?;
        data.mesh
            .as_ref()
            .ok_or_else(|| SceneError::NotAMesh(data.name.clone()))
    }

    // --- Selection ---

    /// Replaces the selection.
    pub fn select(&mut self, items: impl IntoIterator<Item = SelectionItem>) {
        self.selection = items.into_iter().collect();
    }

    /// Replaces the selection with a single whole object.
    pub fn select_object(&mut self, id: ObjectId) {
        self.select([SelectionItem::Object(id)]);
    }

    /// Replaces the selection with a run of vertices of one object.
    pub fn select_vertices(&mut self, object: ObjectId, range: Range<u32>) {
        self.select([SelectionItem::Vertices { object, range }]);
    }

    /// Adds an item to the selection.
    pub fn add_to_selection(&mut self, item: SelectionItem) {
        self.selection.push(item);
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns the raw selection entries.
    #[must_use]
    pub fn selection(&self) -> &[SelectionItem] {
        &self.selection
    }

    // --- Undo ---

    /// Returns the number of undo steps recorded.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_steps.len()
    }

    /// Returns `true` while an undo chunk is open.
    #[must_use]
    pub fn is_chunk_open(&self) -> bool {
        self.chunk_depth > 0
    }

    /// Reverts the most recent undo step. Returns `false` if there was none,
    /// or if a chunk is still open.
    ///
    /// Changes to vertices that no longer exist are dropped.
    pub fn undo(&mut self) -> bool {
        if self.is_chunk_open() {
            warn!("undo requested while an undo chunk is open");
            return false;
        }
        let Some(step) = self.undo_steps.pop() else {
            return false;
        };
        for change in step.iter().rev() {
            if let Some(point) = self.local_point_mut(change.vertex) {
                *point = change.previous;
            }
        }
        debug!(changes = step.len(), "undo");
        true
    }

    fn local_point_mut(&mut self, vertex: VertexRef) -> Option<&mut Point3> {
        self.objects
            .get_mut(vertex.object)?
            .mesh
            .as_mut()?
            .points
            .get_mut(vertex.index as usize)
    }

    fn record(&mut self, change: PositionChange) {
        if self.is_chunk_open() {
            self.pending.push(change);
        } else {
            self.undo_steps.push(vec![change]);
        }
    }
}

impl Scene for MemoryScene {
    fn selected_objects(&self) -> Vec<ObjectId> {
        let mut seen = HashSet::new();
        self.selection
            .iter()
            .filter_map(|item| match item {
                SelectionItem::Object(id) => Some(*id),
                SelectionItem::Vertices { .. } => None,
            })
            .filter(|id| self.objects.contains_key(*id) && seen.insert(*id))
            .collect()
    }

    fn selected_vertices(&self) -> Vec<VertexRef> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for item in &self.selection {
            if let SelectionItem::Vertices { object, range } = item {
                for index in range.clone() {
                    let vertex = VertexRef::new(*object, index);
                    if self.vertex_exists(vertex) && seen.insert(vertex) {
                        out.push(vertex);
                    }
                }
            }
        }
        out
    }

    fn object_exists(&self, object: ObjectId) -> bool {
        self.objects.contains_key(object)
    }

    fn vertex_exists(&self, vertex: VertexRef) -> bool {
        self.mesh(vertex.object)
            .is_ok_and(|mesh| (vertex.index as usize) < mesh.points.len())
    }

    fn object_name(&self, object: ObjectId) -> Result<String, SceneError> {
        Ok(self.object(object)?.name.clone())
    }

    fn has_mesh(&self, object: ObjectId) -> bool {
        self.objects
            .get(object)
            .is_some_and(|data| data.mesh.is_some())
    }

    fn mesh_vertices(&self, object: ObjectId) -> Result<Vec<VertexRef>, SceneError> {
        let mesh = self.mesh(object)?;
        Ok((0..mesh.points.len())
            .filter_map(|i| u32::try_from(i).ok())
            .map(|index| VertexRef::new(object, index))
            .collect())
    }

    fn vertex_position(&self, vertex: VertexRef) -> Result<Point3, SceneError> {
        let data = self.object(vertex.object)?;
        let local = self
            .mesh(vertex.object)?
            .points
            .get(vertex.index as usize)
            .ok_or(SceneError::VertexNotFound {
                index: vertex.index,
            })?;
        Ok(data.transform.transform_point(local))
    }

    fn set_vertex_position(
        &mut self,
        vertex: VertexRef,
        position: Point3,
    ) -> Result<(), SceneError> {
        let transform = self.object(vertex.object)?.transform;
        let point = self
            .local_point_mut(vertex)
            .ok_or(SceneError::VertexNotFound {
                index: vertex.index,
            })?;
        let previous = *point;
        *point = transform.inverse_transform_point(&position);
        self.record(PositionChange { vertex, previous });
        Ok(())
    }

    fn open_undo_chunk(&mut self) {
        self.chunk_depth += 1;
    }

    fn close_undo_chunk(&mut self) {
        if self.chunk_depth == 0 {
            warn!("undo chunk closed without a matching open");
            return;
        }
        self.chunk_depth -= 1;
        if self.chunk_depth == 0 && !self.pending.is_empty() {
            let step = std::mem::take(&mut self.pending);
            debug!(changes = step.len(), "recorded undo step");
            self.undo_steps.push(step);
        }
    }
}
