// Scene document types
//
// A scene declares the devices in a home and the slot bindings of the
// remote. Documents are plain JSON; the closed enums reject unknown device
// kinds and command actions at parse time.

use serde::{Deserialize, Serialize};

/// Complete scene: devices plus slot bindings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSpec {
    pub devices: Vec<DeviceSpec>,
    pub bindings: Vec<BindingSpec>,
}

/// One device to register, addressed by `name` in bindings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub name: String,
    pub kind: DeviceKind,
    pub location: String,
}

/// Kind of device a document entry materializes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    Fan,
}

/// One slot of the remote with its on/off command pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingSpec {
    pub slot: usize,
    pub on: CommandSpec,
    pub off: CommandSpec,
}

/// Command to materialize for one side of a binding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CommandSpec {
    LightOn { device: String },
    LightOff { device: String },
    FanHigh { device: String },
    FanMedium { device: String },
    FanLow { device: String },
    FanOff { device: String },
    None,
}
