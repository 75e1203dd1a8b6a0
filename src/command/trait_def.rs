// UndoableCommand trait definition

use crate::command::state::{FanHandle, HomeState, LightHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during dispatch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Slot index outside the register's capacity
    #[error("slot {slot} is out of range (capacity {capacity})")]
    SlotOutOfRange { slot: usize, capacity: usize },

    /// Command references a light that was never registered
    #[error("no light registered for {0:?}")]
    UnknownLight(LightHandle),

    /// Command references a fan that was never registered
    #[error("no fan registered for {0:?}")]
    UnknownFan(FanHandle),

    /// Undo requested on a command that has never executed
    #[error("no prior state captured for undo")]
    MissingSnapshot,
}

/// Trait for commands that support undo
///
/// All receiver mutations go through a command. Execute drives the bound
/// receiver to the command's fixed target; when the prior state cannot be
/// re-derived from that target, execute must capture it before mutating so
/// undo can restore it exactly.
///
/// # Example
/// ```no_run
/// use home_remote::command::state::{HomeState, LightHandle};
/// use home_remote::command::trait_def::{CommandResult, UndoableCommand};
///
/// struct HallwayLightOn {
///     light: LightHandle,
/// }
///
/// impl UndoableCommand for HallwayLightOn {
///     fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
///         state.light_mut(self.light)?.on();
///         Ok(())
///     }
///
///     fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
///         state.light_mut(self.light)?.off();
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         "Switch hallway light ON".to_string()
///     }
/// }
/// ```
pub trait UndoableCommand {
    /// Execute the command
    ///
    /// Drives the bound receiver to the target state, capturing the prior
    /// state first when undo will need it.
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()>;

    /// Undo the command
    ///
    /// Restores the receiver to the state immediately preceding the most
    /// recent execute on this same instance. The invoker only calls this on
    /// commands it has executed.
    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()>;

    /// Human-readable description, used for transcript display
    fn description(&self) -> String;
}

/// Shared command reference
///
/// The slot register and the undo history refer to the same instance, so
/// the snapshot written during execute is the one the later undo reads.
/// The core is single-threaded; embedding code that needs concurrency
/// wraps the whole register/state pair in one exclusion boundary.
pub type SharedCommand = Rc<RefCell<dyn UndoableCommand>>;

/// Wrap a command for binding into the register
pub fn shared<C: UndoableCommand + 'static>(command: C) -> SharedCommand {
    Rc::new(RefCell::new(command))
}
