use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use acpartner::companion::{
    encode_configuration, CompanionStatus, FanSpeed, OperationMode, Power, SwingMode,
};
use acpartner::smartir;

#[derive(Parser)]
#[command(name = "acpartner", about = "Command codec for the Xiaomi air conditioning companion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a configuration into a companion command string
    Command {
        /// 10-digit device model id, e.g. 0100010727
        model: String,
        power: Power,
        mode: OperationMode,
        /// Target temperature in degrees Celsius
        temperature: f32,
        fan: FanSpeed,
        swing: SwingMode,
    },

    /// Decode the three fields of a get_model_and_state response
    Status {
        model_field: String,
        state_field: String,
        power_field: String,
    },

    /// Generate a SmartIR code file for a device model
    Smartir { model: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Command {
            model,
            power,
            mode,
            temperature,
            fan,
            swing,
        } => {
            println!(
                "{}",
                encode_configuration(&model, power, mode, temperature, fan, swing)
            );
        }
        Command::Status {
            model_field,
            state_field,
            power_field,
        } => {
            let status = CompanionStatus::parse(&[model_field, state_field, power_field])?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Command::Smartir { model } => {
            println!("{}", serde_json::to_string_pretty(&smartir::code_file(&model))?);
        }
    }

    Ok(())
}
