use serde_json::Value;

/// RPC channel to the companion appliance.
///
/// The codec only ever issues `get_model_and_state`, `send_cmd`,
/// `send_ir_code` and the IR learning calls. Sequencing, retries and session
/// handling all live behind this trait, not in front of it.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn send(&mut self, method: &str, params: Vec<Value>) -> Result<Value, Self::Error>;
}
