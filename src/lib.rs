pub mod error;
pub mod math;
pub mod operations;
pub mod scene;
pub mod session;
pub mod tool;

pub use error::{Result, SnapError};
pub use scene::{Feedback, MemoryScene, Scene};
pub use session::SnapSession;
pub use tool::SnapTool;
