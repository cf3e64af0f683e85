pub mod assemble;
pub mod snap;

pub use assemble::{AssembleAuto, AssembleManual, DesignateSource};
pub use snap::{MovableSet, MovableVertex, ReferenceSet, SnapInput, SnapReport, SnapVertices};
