// HomeState - Centralized mutable state the commands operate on
//
// This struct owns every receiver in the home and the notification channel
// to the presentation layer. Commands address receivers through the typed
// handles handed out at registration time.

use crate::command::trait_def::{CommandError, CommandResult};
use crate::device::fan::Fan;
use crate::device::light::Light;
use crate::messaging::channels::NotificationProducer;
use crate::messaging::notification::Notification;

/// Handle to a registered light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightHandle(pub(crate) usize);

/// Handle to a registered fan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanHandle(pub(crate) usize);

/// Central state of the home that commands can modify
///
/// Acts as the single source of truth for receiver state. Commands mutate
/// the receivers and push human-readable notifications to the presentation
/// layer via the notification sender.
pub struct HomeState {
    lights: Vec<Light>,
    fans: Vec<Fan>,

    /// Notification sender towards the presentation layer
    notification_sender: NotificationProducer,
}

impl HomeState {
    /// Create an empty state wired to a notification channel
    pub fn new(notification_sender: NotificationProducer) -> Self {
        Self {
            lights: Vec::new(),
            fans: Vec::new(),
            notification_sender,
        }
    }

    /// Register a light and get back its handle
    pub fn add_light(&mut self, location: impl Into<String>) -> LightHandle {
        self.lights.push(Light::new(location));
        LightHandle(self.lights.len() - 1)
    }

    /// Register a fan and get back its handle
    pub fn add_fan(&mut self, location: impl Into<String>) -> FanHandle {
        self.fans.push(Fan::new(location));
        FanHandle(self.fans.len() - 1)
    }

    pub fn light_mut(&mut self, handle: LightHandle) -> CommandResult<&mut Light> {
        self.lights
            .get_mut(handle.0)
            .ok_or(CommandError::UnknownLight(handle))
    }

    pub fn fan(&self, handle: FanHandle) -> CommandResult<&Fan> {
        self.fans.get(handle.0).ok_or(CommandError::UnknownFan(handle))
    }

    pub fn fan_mut(&mut self, handle: FanHandle) -> CommandResult<&mut Fan> {
        self.fans
            .get_mut(handle.0)
            .ok_or(CommandError::UnknownFan(handle))
    }

    /// Diagnostic accessor: numeric fan level in 0..=3
    pub fn fan_level(&self, handle: FanHandle) -> CommandResult<u8> {
        Ok(self.fan(handle)?.speed().level())
    }

    /// Push a notification to the presentation layer
    ///
    /// Best effort: returns false when the ringbuffer is full and the
    /// notification was dropped. Receiver state is never rolled back for a
    /// dropped notification.
    pub fn send_notification(&mut self, notification: Notification) -> bool {
        ringbuf::traits::Producer::try_push(&mut self.notification_sender, notification).is_ok()
    }

    #[cfg(test)]
    pub(crate) fn light(&self, handle: LightHandle) -> CommandResult<&Light> {
        self.lights.get(handle.0).ok_or(CommandError::UnknownLight(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::fan::FanSpeed;
    use crate::messaging::channels::create_notification_channel;
    use crate::messaging::notification::NotificationCategory;

    fn create_test_state() -> HomeState {
        let (tx, _rx) = create_notification_channel(128);
        HomeState::new(tx)
    }

    #[test]
    fn test_handles_address_their_device() {
        let mut state = create_test_state();
        let living_room = state.add_fan("Living Room");
        let bedroom = state.add_fan("Bedroom");

        state.fan_mut(bedroom).unwrap().set_speed(FanSpeed::High);

        assert_eq!(state.fan_level(living_room).unwrap(), 0);
        assert_eq!(state.fan_level(bedroom).unwrap(), 3);
    }

    #[test]
    fn test_unknown_handles_are_rejected() {
        let mut state = create_test_state();

        let result = state.fan(FanHandle(4));
        assert!(matches!(result, Err(CommandError::UnknownFan(FanHandle(4)))));

        let result = state.light_mut(LightHandle(0));
        assert!(matches!(result, Err(CommandError::UnknownLight(LightHandle(0)))));
    }

    #[test]
    fn test_notification_channel_is_best_effort() {
        let (tx, rx) = create_notification_channel(1);
        let mut state = HomeState::new(tx);

        let first = state.send_notification(Notification::info(
            NotificationCategory::Remote,
            "first",
        ));
        let second = state.send_notification(Notification::info(
            NotificationCategory::Remote,
            "dropped",
        ));

        assert!(first);
        assert!(!second);
        drop(rx);
    }
}
