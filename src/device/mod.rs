// Device receivers - stateful endpoints driven by commands

pub mod fan;
pub mod light;

pub use fan::{Fan, FanSpeed};
pub use light::{Light, LightState};
