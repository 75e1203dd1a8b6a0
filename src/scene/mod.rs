// Scene module - declarative device wiring for the remote

pub mod builder;
pub mod types;

pub use builder::{Scene, SceneBuilder, SceneError};
pub use types::{BindingSpec, CommandSpec, DeviceKind, DeviceSpec, SceneSpec};
