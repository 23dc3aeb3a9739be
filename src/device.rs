use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::companion::{
    encode_configuration, CompanionStatus, FanSpeed, OperationMode, Power, StatusError, SwingMode,
};
use crate::transport::Transport;

// Slot on the companion used for captured IR commands.
const STORAGE_SLOT_ID: u8 = 30;

#[derive(Error, Debug)]
pub enum DeviceError<E> {
    #[error("transport error: {0}")]
    Transport(E),

    #[error("failed to decode status: {0}")]
    Status(#[from] StatusError),

    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(Value),
}

/// Client for the Xiaomi air conditioning companion (lumi.acpartner.v2).
///
/// Commands and status reports pass through the codec in
/// [`crate::companion`]; everything on the wire goes through the supplied
/// [`Transport`].
pub struct AirConditioningCompanion<T> {
    transport: T,
}

impl<T: Transport> AirConditioningCompanion<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    fn send(&mut self, method: &str, params: Vec<Value>) -> Result<Value, DeviceError<T::Error>> {
        debug!(method, ?params, "calling companion");
        self.transport
            .send(method, params)
            .map_err(DeviceError::Transport)
    }

    /// Fetch and decode the current model and state report.
    pub fn status(&mut self) -> Result<CompanionStatus, DeviceError<T::Error>> {
        let response = self.send("get_model_and_state", vec![])?;
        let fields: [String; 3] = serde_json::from_value(response.clone())
            .map_err(|_| DeviceError::UnexpectedResponse(response))?;
        Ok(CompanionStatus::parse(&fields)?)
    }

    /// Encode a configuration for `model` and hand the command string to the
    /// companion.
    pub fn send_configuration(
        &mut self,
        model: &str,
        power: Power,
        mode: OperationMode,
        target_temperature: f32,
        fan_speed: FanSpeed,
        swing_mode: SwingMode,
    ) -> Result<Value, DeviceError<T::Error>> {
        let command =
            encode_configuration(model, power, mode, target_temperature, fan_speed, swing_mode);
        self.send_command(&command)
    }

    /// Send a raw, already-encoded command string.
    pub fn send_command(&mut self, command: &str) -> Result<Value, DeviceError<T::Error>> {
        self.send("send_cmd", vec![json!(command)])
    }

    /// Replay a previously captured IR command.
    pub fn send_ir_code(&mut self, code: &str) -> Result<Value, DeviceError<T::Error>> {
        self.send("send_ir_code", vec![json!(code)])
    }

    /// Put the companion into IR learning mode.
    pub fn learn(&mut self) -> Result<Value, DeviceError<T::Error>> {
        self.send("start_ir_learn", vec![json!(STORAGE_SLOT_ID)])
    }

    /// Read back the captured IR command, if any.
    pub fn learn_result(&mut self) -> Result<Value, DeviceError<T::Error>> {
        self.send("get_ir_learn_result", vec![])
    }

    /// Leave IR learning mode.
    pub fn learn_stop(&mut self) -> Result<Value, DeviceError<T::Error>> {
        self.send("end_ir_learn", vec![json!(STORAGE_SLOT_ID)])
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    /// Records every call and plays back a scripted response.
    struct ScriptedTransport {
        calls: Vec<(String, Vec<Value>)>,
        response: Value,
    }

    impl ScriptedTransport {
        fn new(response: Value) -> Self {
            Self {
                calls: Vec::new(),
                response,
            }
        }
    }

    impl Transport for ScriptedTransport {
        type Error = Infallible;

        fn send(&mut self, method: &str, params: Vec<Value>) -> Result<Value, Infallible> {
            self.calls.push((method.to_string(), params));
            Ok(self.response.clone())
        }
    }

    #[test]
    fn status_decodes_the_reported_triple() {
        let transport = ScriptedTransport::new(json!([
            "010500978022222102",
            "010201190280222221",
            "2"
        ]));
        let mut companion = AirConditioningCompanion::new(transport);

        let status = companion.status().unwrap();
        assert_eq!(status.temperature(), 25);
        assert_eq!(status.air_condition_model(), "0197802222");

        let (method, params) = &companion.transport.calls[0];
        assert_eq!(method, "get_model_and_state");
        assert!(params.is_empty());
    }

    #[test]
    fn status_rejects_a_wrongly_shaped_response() {
        let transport = ScriptedTransport::new(json!({"unexpected": true}));
        let mut companion = AirConditioningCompanion::new(transport);
        assert!(matches!(
            companion.status(),
            Err(DeviceError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn send_configuration_passes_the_encoded_command() {
        let transport = ScriptedTransport::new(json!(["ok"]));
        let mut companion = AirConditioningCompanion::new(transport);

        companion
            .send_configuration(
                "9999999999",
                Power::On,
                OperationMode::Cool,
                24.0,
                FanSpeed::Auto,
                SwingMode::Off,
            )
            .unwrap();

        let (method, params) = &companion.transport.calls[0];
        assert_eq!(method, "send_cmd");
        assert_eq!(params, &vec![json!("9999999999113118a0")]);
    }

    #[test]
    fn learning_calls_use_the_storage_slot() {
        let transport = ScriptedTransport::new(json!(["ok"]));
        let mut companion = AirConditioningCompanion::new(transport);

        companion.learn().unwrap();
        companion.learn_result().unwrap();
        companion.learn_stop().unwrap();

        assert_eq!(
            companion.transport.calls[0],
            ("start_ir_learn".to_string(), vec![json!(30)])
        );
        assert_eq!(
            companion.transport.calls[1],
            ("get_ir_learn_result".to_string(), vec![])
        );
        assert_eq!(
            companion.transport.calls[2],
            ("end_ir_learn".to_string(), vec![json!(30)])
        );
    }
}
