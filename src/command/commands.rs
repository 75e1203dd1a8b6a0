// Concrete command implementations

use crate::command::state::{FanHandle, HomeState, LightHandle};
use crate::command::trait_def::{CommandError, CommandResult, UndoableCommand};
use crate::device::fan::FanSpeed;
use crate::device::light::LightState;
use crate::messaging::notification::{Notification, NotificationCategory};

/// Command to switch a light on or off
///
/// The binary complement of the target is self-evident, so undo drives the
/// opposite value without snapshotting the prior state.
pub struct LightSwitchCommand {
    light: LightHandle,
    target: LightState,
}

impl LightSwitchCommand {
    /// Command that turns the light on
    pub fn on(light: LightHandle) -> Self {
        Self {
            light,
            target: LightState::On,
        }
    }

    /// Command that turns the light off
    pub fn off(light: LightHandle) -> Self {
        Self {
            light,
            target: LightState::Off,
        }
    }

    fn drive(&self, state: &mut HomeState, target: LightState) -> CommandResult<()> {
        let light = state.light_mut(self.light)?;
        match target {
            LightState::On => light.on(),
            LightState::Off => light.off(),
        }
        let message = light.status_message();
        state.send_notification(Notification::info(NotificationCategory::Light, message));
        Ok(())
    }
}

impl UndoableCommand for LightSwitchCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        self.drive(state, self.target)
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        self.drive(state, self.target.toggled())
    }

    fn description(&self) -> String {
        match self.target {
            LightState::On => "Switch light ON".to_string(),
            LightState::Off => "Switch light OFF".to_string(),
        }
    }
}

/// Command to set a fan to a fixed speed
///
/// Execute snapshots the fan's current level before changing it. Undo
/// replays the snapshot through the generalized setter, so any prior level
/// is restored exactly without enumerating the four cases.
pub struct FanSpeedCommand {
    fan: FanHandle,
    target: FanSpeed,
    previous: Option<FanSpeed>,
}

impl FanSpeedCommand {
    pub fn new(fan: FanHandle, target: FanSpeed) -> Self {
        Self {
            fan,
            target,
            previous: None,
        }
    }

    pub fn high(fan: FanHandle) -> Self {
        Self::new(fan, FanSpeed::High)
    }

    pub fn medium(fan: FanHandle) -> Self {
        Self::new(fan, FanSpeed::Medium)
    }

    pub fn low(fan: FanHandle) -> Self {
        Self::new(fan, FanSpeed::Low)
    }

    pub fn off(fan: FanHandle) -> Self {
        Self::new(fan, FanSpeed::Off)
    }

    fn drive(&self, state: &mut HomeState, target: FanSpeed) -> CommandResult<()> {
        let fan = state.fan_mut(self.fan)?;
        fan.set_speed(target);
        let message = fan.status_message();
        state.send_notification(Notification::info(NotificationCategory::Fan, message));
        Ok(())
    }
}

impl UndoableCommand for FanSpeedCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        // Snapshot before mutating; the snapshot stays valid until the next
        // execute on this instance overwrites it
        self.previous = Some(state.fan(self.fan)?.speed());
        self.drive(state, self.target)
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        let previous = self.previous.ok_or(CommandError::MissingSnapshot)?;
        self.drive(state, previous)
    }

    fn description(&self) -> String {
        format!("Set fan to {}", self.target)
    }
}

/// Sentinel command bound to every slot by default
///
/// Both operations are no-ops, which keeps every slot invocable without
/// null checks at the call sites.
pub struct NoCommand;

impl UndoableCommand for NoCommand {
    fn execute(&mut self, _state: &mut HomeState) -> CommandResult<()> {
        Ok(())
    }

    fn undo(&mut self, _state: &mut HomeState) -> CommandResult<()> {
        Ok(())
    }

    fn description(&self) -> String {
        "Do nothing".to_string()
    }
}
