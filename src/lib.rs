pub mod companion;
pub mod device;
pub mod smartir;
pub mod transport;

pub use companion::{
    encode_configuration, CompanionStatus, FanSpeed, OperationMode, Power, StatusError, SwingMode,
};
pub use device::{AirConditioningCompanion, DeviceError};
pub use transport::Transport;
