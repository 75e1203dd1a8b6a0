// Fan receiver - four discrete speed levels
//
// Levels: 0 = off, 1 = low, 2 = medium, 3 = high. Every level is reachable
// from any other in a single step.

use std::fmt;

/// Fan speed level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanSpeed {
    Off = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Default for FanSpeed {
    fn default() -> Self {
        Self::Off
    }
}

impl FanSpeed {
    /// Numeric level in 0..=3
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl From<u8> for FanSpeed {
    fn from(value: u8) -> Self {
        match value {
            0 => FanSpeed::Off,
            1 => FanSpeed::Low,
            2 => FanSpeed::Medium,
            3 => FanSpeed::High,
            _ => FanSpeed::Off,
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FanSpeed::Off => "OFF",
            FanSpeed::Low => "LOW",
            FanSpeed::Medium => "MEDIUM",
            FanSpeed::High => "HIGH",
        };
        write!(f, "{}", name)
    }
}

/// A fan identified by its location
pub struct Fan {
    location: String,
    speed: FanSpeed,
}

impl Fan {
    /// Create a fan, initially off
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            speed: FanSpeed::Off,
        }
    }

    pub fn high(&mut self) {
        self.set_speed(FanSpeed::High);
    }

    pub fn medium(&mut self) {
        self.set_speed(FanSpeed::Medium);
    }

    pub fn low(&mut self) {
        self.set_speed(FanSpeed::Low);
    }

    pub fn off(&mut self) {
        self.set_speed(FanSpeed::Off);
    }

    /// Drive the speed to an explicit level
    ///
    /// The named setters and command undo both funnel through here, keeping
    /// the transition function total over the four levels.
    pub fn set_speed(&mut self, speed: FanSpeed) {
        self.speed = speed;
    }

    /// Current speed, snapshotted by commands before they mutate it
    pub fn speed(&self) -> FanSpeed {
        self.speed
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Transcript line for the current state
    pub fn status_message(&self) -> String {
        match self.speed {
            FanSpeed::Off => format!("{} fan is OFF", self.location),
            speed => format!("{} fan is on {}", self.location, speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fan_is_off() {
        let fan = Fan::new("Living Room");
        assert_eq!(fan.speed(), FanSpeed::Off);
        assert_eq!(fan.speed(), FanSpeed::default());
        assert_eq!(fan.speed().level(), 0);
    }

    #[test]
    fn test_named_setters_reach_every_level() {
        let mut fan = Fan::new("Attic");

        fan.high();
        assert_eq!(fan.speed(), FanSpeed::High);

        fan.medium();
        assert_eq!(fan.speed(), FanSpeed::Medium);

        fan.low();
        assert_eq!(fan.speed(), FanSpeed::Low);

        fan.off();
        assert_eq!(fan.speed(), FanSpeed::Off);
    }

    #[test]
    fn test_every_level_reachable_from_every_other() {
        let levels = [FanSpeed::Off, FanSpeed::Low, FanSpeed::Medium, FanSpeed::High];

        for start in levels {
            for target in levels {
                let mut fan = Fan::new("Attic");
                fan.set_speed(start);
                fan.set_speed(target);
                assert_eq!(fan.speed(), target);
            }
        }
    }

    #[test]
    fn test_level_values() {
        assert_eq!(FanSpeed::Off.level(), 0);
        assert_eq!(FanSpeed::Low.level(), 1);
        assert_eq!(FanSpeed::Medium.level(), 2);
        assert_eq!(FanSpeed::High.level(), 3);
    }

    #[test]
    fn test_from_level_round_trip() {
        for level in 0u8..=3 {
            assert_eq!(FanSpeed::from(level).level(), level);
        }
    }

    #[test]
    fn test_status_message() {
        let mut fan = Fan::new("Living Room");
        assert_eq!(fan.status_message(), "Living Room fan is OFF");

        fan.high();
        assert_eq!(fan.status_message(), "Living Room fan is on HIGH");

        fan.low();
        assert_eq!(fan.status_message(), "Living Room fan is on LOW");
    }
}
