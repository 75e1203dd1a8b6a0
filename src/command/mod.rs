// Command Pattern for dispatch and undo
//
// All receiver mutations go through UndoableCommand instances bound to the
// RemoteControl's slots.
//
// Architecture:
// - UndoableCommand trait: defines execute(), undo(), description()
// - RemoteControl: slot register plus the LIFO undo history
// - HomeState: owns the receivers and the notification channel
// - Concrete commands: LightSwitchCommand, FanSpeedCommand, NoCommand
//
// The slot register and the history share command instances, so the state
// a command snapshots at execute time is exactly what its undo consumes.

pub mod commands;
pub mod manager;
pub mod state;
pub mod trait_def;

pub use commands::{FanSpeedCommand, LightSwitchCommand, NoCommand};
pub use manager::RemoteControl;
pub use state::{FanHandle, HomeState, LightHandle};
pub use trait_def::{CommandError, CommandResult, SharedCommand, UndoableCommand, shared};
