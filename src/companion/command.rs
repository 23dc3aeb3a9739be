use super::presets::preset_for;
use super::{FanSpeed, OperationMode, Power, SwingMode};

/// Build the command string understood by the companion for one air
/// conditioner configuration.
///
/// The preset template for `model` is prefixed with the model id, then each
/// placeholder token is substituted in a fixed order: `po`, `mo`, `wi`, `sw`,
/// `tt`, then the `t1t`/`t4t`/`t7t` offset digits. Tokens and the digits that
/// replace them share no characters, so a later pass can never match text
/// produced by an earlier one.
pub fn encode_configuration(
    model: &str,
    power: Power,
    mode: OperationMode,
    target_temperature: f32,
    fan_speed: FanSpeed,
    swing_mode: SwingMode,
) -> String {
    let preset = preset_for(model);

    // Units with a known fixed "off" sequence take it verbatim, whatever the
    // other arguments say.
    if power == Power::Off {
        if let Some(off) = preset.off {
            return format!("{model}{off}");
        }
    }

    let temperature = target_temperature as i32;

    let mut command = format!("{model}{}", preset.base);
    command = command.replace("po", &power.code().to_string());
    command = command.replace("mo", &mode.code().to_string());
    command = command.replace("wi", &fan_speed.code().to_string());
    command = command.replace("sw", &swing_mode.code().to_string());
    // Not zero-padded: a temperature below 0x10 yields a single digit and
    // shifts the rest of the template. The supported units only take 16-31.
    command = command.replace("tt", &format!("{temperature:x}"));

    // The gree_2 template carries three checksum-like digits derived from the
    // temperature, one uppercase hex digit each. Absent from every other
    // template, where these replacements are no-ops.
    for (token, offset) in [("t1t", 1), ("t4t", 4), ("t7t", 7)] {
        let digit = (offset + temperature - 17).rem_euclid(16);
        command = command.replace(token, &format!("{digit:X}"));
    }

    command
}
