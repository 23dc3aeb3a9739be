pub mod command;
pub mod presets;
pub mod status;

pub use command::encode_configuration;
pub use presets::{preset_for, Preset};
pub use status::{CompanionStatus, StatusError};

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, FromRepr};

// The companion encodes every setting as a single decimal digit inside the
// command string; `code()` is that digit.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, FromRepr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Power {
    Off = 0,
    On = 1,
}

impl Power {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, FromRepr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum OperationMode {
    Heat = 0,
    Cool = 1,
    Auto = 2,
    Dehumidify = 3,
    Ventilate = 4,
}

impl OperationMode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, FromRepr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FanSpeed {
    Low = 0,
    Medium = 1,
    High = 2,
    Auto = 3,
}

impl FanSpeed {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, FromRepr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SwingMode {
    On = 0,
    Off = 1,
}

impl SwingMode {
    pub fn code(self) -> u8 {
        self as u8
    }
}
