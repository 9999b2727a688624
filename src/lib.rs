pub mod camera;
pub mod cover;
pub mod error;
pub mod pane;
pub mod region;
pub mod span;
