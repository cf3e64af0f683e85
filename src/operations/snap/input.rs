use crate::math::Point3;
use crate::scene::{Scene, VertexRef};

/// A vertex to relocate, with its world position at capture time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovableVertex {
    pub vertex: VertexRef,
    pub snapshot: Point3,
}

/// Ordered vertices to relocate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovableSet {
    entries: Vec<MovableVertex>,
}

impl MovableSet {
    /// Creates a set from already captured entries.
    #[must_use]
    pub fn new(entries: Vec<MovableVertex>) -> Self {
        Self { entries }
    }

    /// Captures the current world position of each vertex.
    ///
    /// Vertices that no longer resolve are left out.
    pub fn capture<S: Scene + ?Sized>(scene: &S, vertices: &[VertexRef]) -> Self {
        let entries = vertices
            .iter()
            .filter_map(|&vertex| {
                scene
                    .vertex_position(vertex)
                    .ok()
                    .map(|snapshot| MovableVertex { vertex, snapshot })
            })
            .collect();
        Self { entries }
    }

    /// Returns the first entry, if any.
    #[must_use]
    pub fn first(&self) -> Option<&MovableVertex> {
        self.entries.first()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, MovableVertex> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MovableSet {
    type Item = &'a MovableVertex;
    type IntoIter = std::slice::Iter<'a, MovableVertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Candidate target positions, in world space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceSet {
    points: Vec<Point3>,
}

impl ReferenceSet {
    /// Creates a reference set from world-space points.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Reads the current world position of each vertex.
    ///
    /// Vertices that no longer resolve are left out.
    pub fn read<S: Scene + ?Sized>(scene: &S, vertices: &[VertexRef]) -> Self {
        let points = vertices
            .iter()
            .filter_map(|&vertex| scene.vertex_position(vertex).ok())
            .collect();
        Self { points }
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The two sets a snap consumes, however they were assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapInput {
    pub movable: MovableSet,
    pub references: ReferenceSet,
}

impl SnapInput {
    /// Pairs a movable set with a reference set.
    #[must_use]
    pub fn new(movable: MovableSet, references: ReferenceSet) -> Self {
        Self {
            movable,
            references,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scene::MemoryScene;

    #[test]
    fn capture_skips_dead_vertices() {
        let mut scene = MemoryScene::new();
        let a = scene.add_mesh("|a", vec![Point3::new(1.0, 2.0, 3.0)]);
        let set = MovableSet::capture(&scene, &[VertexRef::new(a, 0), VertexRef::new(a, 5)]);

        assert_eq!(set.len(), 1);
        let first = set.first().unwrap();
        assert_eq!(first.vertex, VertexRef::new(a, 0));
        assert_eq!(first.snapshot, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn read_references_in_order() {
        let mut scene = MemoryScene::new();
        let a = scene.add_mesh(
            "|a",
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)],
        );
        let refs = ReferenceSet::read(&scene, &[VertexRef::new(a, 1), VertexRef::new(a, 0)]);
        assert_eq!(
            refs.points(),
            &[Point3::new(2.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)]
        );
    }
}
