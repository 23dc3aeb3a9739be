use serde::Serialize;
use thiserror::Error;

use super::{FanSpeed, OperationMode, Power};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("malformed status response: {0}")]
    MalformedStatus(&'static str),

    #[error("unknown fan speed digit: {0}")]
    UnknownFanSpeed(u8),

    #[error("unknown operation mode digit: {0}")]
    UnknownOperationMode(u8),
}

/// Decoded `get_model_and_state` report.
///
/// The raw response is a 3-element string array, e.g.
/// `["010500978022222102", "010201190280222221", "2"]`. The second element is
/// a fixed-layout hex string: position 2 holds the power flag, 3 the
/// operation mode, 4 the fan speed, 5 the swing flag and 6..8 the target
/// temperature as two hex digits. Every field is derived up front, so a bad
/// report never yields a half-decoded snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanionStatus {
    air_condition_model: String,
    air_condition_power: String,
    power: Power,
    temperature: u8,
    swing_mode: bool,
    fan_speed: FanSpeed,
    mode: OperationMode,
}

impl CompanionStatus {
    pub fn parse(response: &[String; 3]) -> Result<Self, StatusError> {
        let state = response[1].as_bytes();
        if state.len() < 8 {
            return Err(StatusError::MalformedStatus(
                "state field shorter than 8 characters",
            ));
        }

        let mode_digit = decimal_digit(state[3]).ok_or(StatusError::MalformedStatus(
            "operation mode position is not a digit",
        ))?;
        let mode = OperationMode::from_repr(mode_digit)
            .ok_or(StatusError::UnknownOperationMode(mode_digit))?;

        let fan_digit = decimal_digit(state[4]).ok_or(StatusError::MalformedStatus(
            "fan speed position is not a digit",
        ))?;
        let fan_speed =
            FanSpeed::from_repr(fan_digit).ok_or(StatusError::UnknownFanSpeed(fan_digit))?;

        let temperature = std::str::from_utf8(&state[6..8])
            .ok()
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or(StatusError::MalformedStatus(
                "temperature positions are not hex digits",
            ))?;

        let power = if state[2] == b'1' { Power::On } else { Power::Off };
        let swing_mode = state[5] == b'0';

        Ok(Self {
            air_condition_model: format!(
                "{}{}",
                char_range(&response[0], 0, 2),
                char_range(&response[0], 8, 16)
            ),
            air_condition_power: response[2].clone(),
            power,
            temperature,
            swing_mode,
            fan_speed,
            mode,
        })
    }

    /// Model id of the air conditioner behind the companion.
    pub fn air_condition_model(&self) -> &str {
        &self.air_condition_model
    }

    /// Raw power field of the air conditioner itself, as reported.
    pub fn air_condition_power(&self) -> &str {
        &self.air_condition_power
    }

    pub fn power(&self) -> Power {
        self.power
    }

    pub fn is_on(&self) -> bool {
        self.power == Power::On
    }

    /// Target temperature in degrees Celsius.
    pub fn temperature(&self) -> u8 {
        self.temperature
    }

    pub fn swing_mode(&self) -> bool {
        self.swing_mode
    }

    pub fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    pub fn mode(&self) -> OperationMode {
        self.mode
    }
}

fn decimal_digit(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}

// Mirrors lenient slicing of the model field: a short field yields a short
// model id instead of an error.
fn char_range(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end - start).collect()
}
