pub mod nearest;

pub use nearest::{nearest_point, Nearest};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Rigid world transform of a scene object.
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
