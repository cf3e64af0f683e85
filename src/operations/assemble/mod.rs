//! Strategies that build a [`SnapInput`](crate::operations::snap::SnapInput)
//! from the scene and the tool's loaded state.

mod auto;
mod manual;

pub use auto::{AssembleAuto, DesignateSource};
pub use manual::AssembleManual;
