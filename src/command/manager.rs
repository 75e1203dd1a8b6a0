// RemoteControl - slot register and undo history
//
// Binds (on, off) command pairs to addressable slots, dispatches presses
// and keeps the LIFO record of executed commands. The history is owned by
// the instance, so independent remotes can coexist and be tested in
// isolation.

use crate::command::commands::NoCommand;
use crate::command::state::HomeState;
use crate::command::trait_def::{CommandError, CommandResult, SharedCommand, shared};
use crate::messaging::notification::{Notification, NotificationCategory};
use std::collections::VecDeque;

/// Default number of addressable slots
pub const DEFAULT_SLOT_COUNT: usize = 7;

/// Default maximum number of commands to keep in history
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Slot register and dispatcher
///
/// Every slot always holds an executable command; unbound slots share a
/// single no-op sentinel. When a press succeeds, the executed instance is
/// pushed onto the history; at capacity the oldest entry is dropped so
/// recent actions stay undoable.
pub struct RemoteControl {
    on_commands: Vec<SharedCommand>,
    off_commands: Vec<SharedCommand>,

    /// Executed commands, most recent at the back
    undo_stack: VecDeque<SharedCommand>,

    /// Maximum number of commands to keep in history
    max_history: usize,
}

impl RemoteControl {
    /// Create a remote with default slot count and history limit
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SLOT_COUNT, DEFAULT_MAX_HISTORY)
    }

    /// Create a remote with a fixed slot count and history limit
    ///
    /// The slot count never changes for the lifetime of the register.
    pub fn with_capacity(slot_count: usize, max_history: usize) -> Self {
        // One sentinel shared by every slot; a slot is invocable before it
        // is ever bound
        let sentinel = shared(NoCommand);
        Self {
            on_commands: vec![sentinel.clone(); slot_count],
            off_commands: vec![sentinel; slot_count],
            undo_stack: VecDeque::new(),
            max_history,
        }
    }

    /// Bind a command pair to a slot
    ///
    /// Overwrites any prior binding unconditionally (last write wins).
    pub fn bind(
        &mut self,
        slot: usize,
        on_command: SharedCommand,
        off_command: SharedCommand,
    ) -> CommandResult<()> {
        self.check_slot(slot)?;
        self.on_commands[slot] = on_command;
        self.off_commands[slot] = off_command;
        Ok(())
    }

    /// Execute the on-command bound to `slot` and record it in history
    ///
    /// Returns the executed command's description. Fails atomically: an
    /// out-of-range slot or a failed execute leaves receivers and history
    /// untouched. Failures also appear on the transcript as error entries.
    pub fn press_on(&mut self, slot: usize, state: &mut HomeState) -> CommandResult<String> {
        if let Err(error) = self.check_slot(slot) {
            report_failure(state, &error);
            return Err(error);
        }
        let command = self.on_commands[slot].clone();
        self.dispatch(command, state)
    }

    /// Execute the off-command bound to `slot` and record it in history
    pub fn press_off(&mut self, slot: usize, state: &mut HomeState) -> CommandResult<String> {
        if let Err(error) = self.check_slot(slot) {
            report_failure(state, &error);
            return Err(error);
        }
        let command = self.off_commands[slot].clone();
        self.dispatch(command, state)
    }

    /// Undo the most recent executed command
    ///
    /// Returns the undone command's description, or `None` when the history
    /// is empty - a normal outcome, reported to the presentation layer as a
    /// warning rather than an error.
    pub fn press_undo(&mut self, state: &mut HomeState) -> CommandResult<Option<String>> {
        let command = match self.undo_stack.pop_back() {
            Some(command) => command,
            None => {
                state.send_notification(Notification::warning(
                    NotificationCategory::Remote,
                    "Nothing to undo",
                ));
                return Ok(None);
            }
        };

        if let Err(error) = command.borrow_mut().undo(state) {
            report_failure(state, &error);
            return Err(error);
        }
        let description = command.borrow().description();
        Ok(Some(description))
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Get the number of commands in the undo history
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get a description of the command that would be undone next
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|cmd| cmd.borrow().description())
    }

    /// Number of addressable slots
    pub fn slot_count(&self) -> usize {
        self.on_commands.len()
    }

    fn dispatch(&mut self, command: SharedCommand, state: &mut HomeState) -> CommandResult<String> {
        // Execute first; the history only ever records completed actions
        if let Err(error) = command.borrow_mut().execute(state) {
            report_failure(state, &error);
            return Err(error);
        }
        let description = command.borrow().description();

        self.undo_stack.push_back(command);
        if self.undo_stack.len() > self.max_history {
            self.undo_stack.pop_front();
        }

        Ok(description)
    }

    fn check_slot(&self, slot: usize) -> CommandResult<()> {
        if slot >= self.on_commands.len() {
            return Err(CommandError::SlotOutOfRange {
                slot,
                capacity: self.on_commands.len(),
            });
        }
        Ok(())
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}

// Failures reach the transcript too; the caller still gets the error
fn report_failure(state: &mut HomeState, error: &CommandError) {
    state.send_notification(Notification::error(
        NotificationCategory::Remote,
        error.to_string(),
    ));
}
