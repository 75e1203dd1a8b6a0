// Home Remote - Library exports for tests and benchmarks

pub mod command;
pub mod device;
pub mod messaging;
pub mod scene;

// Re-export commonly used types for convenience
pub use command::{
    CommandError, CommandResult, FanHandle, FanSpeedCommand, HomeState, LightHandle,
    LightSwitchCommand, NoCommand, RemoteControl, SharedCommand, UndoableCommand, shared,
};
pub use device::{Fan, FanSpeed, Light, LightState};
pub use messaging::channels::{
    NotificationConsumer, NotificationProducer, create_notification_channel,
};
pub use messaging::notification::{Notification, NotificationCategory, NotificationLevel};
pub use scene::{Scene, SceneBuilder, SceneError, SceneSpec};
