use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::companion::{encode_configuration, FanSpeed, OperationMode, Power, SwingMode};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CodeFile {
    pub manufacturer: String,
    pub supported_models: Vec<String>,
    pub supported_controller: String,
    pub commands_encoding: String,
    pub min_temperature: f32,
    pub max_temperature: f32,
    pub precision: u8,
    pub operation_modes: Vec<String>,
    pub fan_modes: Vec<String>,
    pub commands: serde_json::Value,
}

/// Generates a SmartIR code file covering every state of one device model.
///
/// Commands are nested mode -> fan -> temperature, the hierarchy SmartIR uses
/// for climate code files, plus a single "off" entry. Each command is the
/// companion command string for that state.
pub fn code_file(model: &str) -> CodeFile {
    let commands: serde_json::Value = {
        let mut all_commands = serde_json::Map::new();

        for mode in OperationMode::iter() {
            let mut fan_commands = serde_json::Map::new();

            for fan in FanSpeed::iter() {
                let mut temperature_commands = serde_json::Map::new();

                for temperature in 17..=30 {
                    temperature_commands.insert(
                        format!("{temperature}"),
                        encode_configuration(
                            model,
                            Power::On,
                            mode,
                            temperature as f32,
                            fan,
                            SwingMode::On,
                        )
                        .into(),
                    );
                }

                fan_commands.insert(fan.to_string(), temperature_commands.into());
            }

            all_commands.insert(mode.to_string(), fan_commands.into());
        }

        all_commands.insert(
            "off".into(),
            encode_configuration(
                model,
                Power::Off,
                OperationMode::Auto,
                17.0,
                FanSpeed::Auto,
                SwingMode::Off,
            )
            .into(),
        );

        all_commands.into()
    };

    CodeFile {
        manufacturer: "Generic".into(),
        supported_models: vec![model.into()],
        supported_controller: "Xiaomi".into(),
        commands_encoding: "Raw".into(),
        min_temperature: 17.0,
        max_temperature: 30.0,
        precision: 1,
        operation_modes: OperationMode::iter().map(|m| m.to_string()).collect(),
        fan_modes: FanSpeed::iter().map(|f| f.to_string()).collect(),
        commands,
    }
}
