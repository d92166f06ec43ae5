//! Device actions - instructions the firmware executes in order
//!
//! The wire tags (`oled`, `led`, `delay_ms`) are the ones the ESP32 firmware
//! dispatches on, so they must not change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single instruction for the device's peripherals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Show text on the OLED display
    #[serde(rename = "oled")]
    DisplayText { text: String },
    /// Switch the status LED
    #[serde(rename = "led")]
    SetLed { value: LedState },
    /// Pause before the next action
    #[serde(rename = "delay_ms")]
    Delay {
        #[serde(rename = "ms")]
        milliseconds: DelayMs,
    },
}

impl Action {
    pub fn display(text: impl Into<String>) -> Self {
        Self::DisplayText { text: text.into() }
    }

    pub fn led(value: LedState) -> Self {
        Self::SetLed { value }
    }

    /// Build a delay, failing when `milliseconds` is above [`DelayMs::MAX`]
    pub fn delay(milliseconds: u32) -> Result<Self, ActionError> {
        Ok(Self::Delay {
            milliseconds: DelayMs::new(milliseconds)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedState {
    On,
    Off,
}

/// Delay duration, guaranteed to lie within `0..=DelayMs::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DelayMs(u32);

impl DelayMs {
    pub const MAX: u32 = 60_000;

    pub fn new(milliseconds: u32) -> Result<Self, ActionError> {
        if milliseconds > Self::MAX {
            return Err(ActionError::DelayOutOfRange(milliseconds));
        }
        Ok(Self(milliseconds))
    }
}

impl TryFrom<u32> for DelayMs {
    type Error = ActionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DelayMs> for u32 {
    fn from(value: DelayMs) -> Self {
        value.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("delay of {0} ms exceeds the {} ms limit", DelayMs::MAX)]
    DelayOutOfRange(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delay_bounds() {
        assert!(Action::delay(0).is_ok());
        assert!(Action::delay(DelayMs::MAX).is_ok());
        assert_eq!(
            Action::delay(DelayMs::MAX + 1),
            Err(ActionError::DelayOutOfRange(60_001))
        );
    }

    #[test]
    fn test_wire_format_matches_firmware() {
        let actions = vec![
            Action::led(LedState::On),
            Action::display("LED: ON"),
            Action::delay(250).unwrap(),
        ];
        let value = serde_json::to_value(&actions).unwrap();
        assert_eq!(
            value,
            json!([
                {"type": "led", "value": "on"},
                {"type": "oled", "text": "LED: ON"},
                {"type": "delay_ms", "ms": 250}
            ])
        );
    }

    #[test]
    fn test_deserialize_rejects_long_delay() {
        let result: Result<Action, _> =
            serde_json::from_value(json!({"type": "delay_ms", "ms": 60_001}));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative_delay() {
        let result: Result<Action, _> =
            serde_json::from_value(json!({"type": "delay_ms", "ms": -1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_led_off() {
        let action: Action = serde_json::from_value(json!({"type": "led", "value": "off"})).unwrap();
        assert_eq!(action, Action::led(LedState::Off));
    }

    #[test]
    fn test_unknown_action_type_rejected() {
        let result: Result<Action, _> = serde_json::from_value(json!({"type": "buzzer"}));
        assert!(result.is_err());
    }
}
