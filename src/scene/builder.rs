// Scene builder - validates a scene document and wires the remote

use crate::command::commands::{FanSpeedCommand, LightSwitchCommand, NoCommand};
use crate::command::manager::{DEFAULT_MAX_HISTORY, DEFAULT_SLOT_COUNT, RemoteControl};
use crate::command::state::{FanHandle, HomeState, LightHandle};
use crate::command::trait_def::{CommandError, SharedCommand, shared};
use crate::messaging::channels::NotificationProducer;
use crate::scene::types::{CommandSpec, DeviceKind, SceneSpec};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Scene construction error types
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("duplicate device name: {0}")]
    DuplicateDevice(String),

    #[error("binding references unknown device: {0}")]
    UnknownDevice(String),

    #[error("device {name} is not a {expected}")]
    WrongDeviceKind { name: String, expected: &'static str },

    #[error("binding error: {0}")]
    Binding(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A materialized scene, ready to dispatch
///
/// The handle maps are keyed by the document's device names, so callers
/// can reach the diagnostic accessors or wire further commands.
pub struct Scene {
    pub state: HomeState,
    pub remote: RemoteControl,
    pub lights: HashMap<String, LightHandle>,
    pub fans: HashMap<String, FanHandle>,
}

/// Builds scenes from documents
///
/// Validation is all-or-nothing: any unknown name or kind, duplicate
/// device, or out-of-range slot fails the build before a scene is
/// returned.
pub struct SceneBuilder {
    /// Number of addressable slots on the remote
    pub slot_count: usize,
    /// Undo history limit of the remote
    pub max_history: usize,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize a scene document
    pub fn build(
        &self,
        spec: &SceneSpec,
        notification_sender: NotificationProducer,
    ) -> Result<Scene, SceneError> {
        let mut state = HomeState::new(notification_sender);
        let mut lights: HashMap<String, LightHandle> = HashMap::new();
        let mut fans: HashMap<String, FanHandle> = HashMap::new();

        for device in &spec.devices {
            if lights.contains_key(&device.name) || fans.contains_key(&device.name) {
                return Err(SceneError::DuplicateDevice(device.name.clone()));
            }
            match device.kind {
                DeviceKind::Light => {
                    lights.insert(device.name.clone(), state.add_light(device.location.clone()));
                }
                DeviceKind::Fan => {
                    fans.insert(device.name.clone(), state.add_fan(device.location.clone()));
                }
            }
        }

        let mut remote = RemoteControl::with_capacity(self.slot_count, self.max_history);
        for binding in &spec.bindings {
            let on = make_command(&binding.on, &lights, &fans)?;
            let off = make_command(&binding.off, &lights, &fans)?;
            remote.bind(binding.slot, on, off)?;
        }

        Ok(Scene {
            state,
            remote,
            lights,
            fans,
        })
    }

    /// Parse and materialize a scene from a JSON string
    pub fn load_from_str(
        &self,
        json: &str,
        notification_sender: NotificationProducer,
    ) -> Result<Scene, SceneError> {
        let spec: SceneSpec = serde_json::from_str(json)?;
        self.build(&spec, notification_sender)
    }

    /// Parse and materialize a scene from a JSON file
    pub fn load_from_file(
        &self,
        path: impl AsRef<Path>,
        notification_sender: NotificationProducer,
    ) -> Result<Scene, SceneError> {
        let file = File::open(path)?;
        let spec: SceneSpec = serde_json::from_reader(BufReader::new(file))?;
        self.build(&spec, notification_sender)
    }
}

fn make_command(
    spec: &CommandSpec,
    lights: &HashMap<String, LightHandle>,
    fans: &HashMap<String, FanHandle>,
) -> Result<SharedCommand, SceneError> {
    let command = match spec {
        CommandSpec::LightOn { device } => {
            shared(LightSwitchCommand::on(resolve_light(device, lights, fans)?))
        }
        CommandSpec::LightOff { device } => {
            shared(LightSwitchCommand::off(resolve_light(device, lights, fans)?))
        }
        CommandSpec::FanHigh { device } => {
            shared(FanSpeedCommand::high(resolve_fan(device, lights, fans)?))
        }
        CommandSpec::FanMedium { device } => {
            shared(FanSpeedCommand::medium(resolve_fan(device, lights, fans)?))
        }
        CommandSpec::FanLow { device } => {
            shared(FanSpeedCommand::low(resolve_fan(device, lights, fans)?))
        }
        CommandSpec::FanOff { device } => {
            shared(FanSpeedCommand::off(resolve_fan(device, lights, fans)?))
        }
        CommandSpec::None => shared(NoCommand),
    };
    Ok(command)
}

fn resolve_light(
    name: &str,
    lights: &HashMap<String, LightHandle>,
    fans: &HashMap<String, FanHandle>,
) -> Result<LightHandle, SceneError> {
    if let Some(handle) = lights.get(name) {
        return Ok(*handle);
    }
    if fans.contains_key(name) {
        return Err(SceneError::WrongDeviceKind {
            name: name.to_string(),
            expected: "light",
        });
    }
    Err(SceneError::UnknownDevice(name.to_string()))
}

fn resolve_fan(
    name: &str,
    lights: &HashMap<String, LightHandle>,
    fans: &HashMap<String, FanHandle>,
) -> Result<FanHandle, SceneError> {
    if let Some(handle) = fans.get(name) {
        return Ok(*handle);
    }
    if lights.contains_key(name) {
        return Err(SceneError::WrongDeviceKind {
            name: name.to_string(),
            expected: "fan",
        });
    }
    Err(SceneError::UnknownDevice(name.to_string()))
}
