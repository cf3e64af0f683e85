slotmap::new_key_type! {
    /// Opaque identifier for a scene object.
    ///
    /// Generational, so a deleted object's ID never resolves to a later one.
    pub struct ObjectId;
}

/// A single vertex component of a mesh object (`obj.vtx[index]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexRef {
    /// The object owning the mesh.
    pub object: ObjectId,
    /// Index of the vertex within the mesh.
    pub index: u32,
}

impl VertexRef {
    /// Creates a reference to vertex `index` of `object`.
    #[must_use]
    pub fn new(object: ObjectId, index: u32) -> Self {
        Self { object, index }
    }
}

/// Returns the short name of a `|`-separated long object name.
#[must_use]
pub fn short_name(long_name: &str) -> &str {
    long_name.rsplit('|').next().unwrap_or(long_name)
}
