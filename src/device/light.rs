// Light receiver - binary on/off state holder

/// Power state of a light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    On,
    Off,
}

impl Default for LightState {
    fn default() -> Self {
        Self::Off
    }
}

impl LightState {
    /// The complementary state
    pub fn toggled(self) -> Self {
        match self {
            LightState::On => LightState::Off,
            LightState::Off => LightState::On,
        }
    }
}

/// A light fixture identified by its location
///
/// The state is only driven through the named setters; commands never read
/// it back, so there is no public getter.
pub struct Light {
    location: String,
    state: LightState,
}

impl Light {
    /// Create a light, initially off
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            state: LightState::Off,
        }
    }

    pub fn on(&mut self) {
        self.state = LightState::On;
    }

    pub fn off(&mut self) {
        self.state = LightState::Off;
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Transcript line for the current state
    pub fn status_message(&self) -> String {
        match self.state {
            LightState::On => format!("{} light is ON", self.location),
            LightState::Off => format!("{} light is OFF", self.location),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> LightState {
        self.state
    }
}
