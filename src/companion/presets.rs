/// Per-model command preset.
///
/// `base` mixes literal hex digits with the placeholder tokens substituted by
/// the encoder. `off`, when present, is a fixed power-off sequence the unit
/// accepts regardless of its current mode; it is sent verbatim after the
/// model id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub device_type: &'static str,
    pub base: &'static str,
    pub off: Option<&'static str>,
}

const FALLBACK: Preset = Preset {
    device_type: "generic",
    base: "pomowiswtta0",
    off: None,
};

const PRESETS: &[(&str, Preset)] = &[
    (
        "0180111111",
        Preset {
            device_type: "media_1",
            base: "pomowiswtt02",
            off: None,
        },
    ),
    (
        "0180222221",
        Preset {
            device_type: "gree_1",
            base: "pomowiswtt02",
            off: None,
        },
    ),
    (
        "0100010727",
        Preset {
            device_type: "gree_2",
            base: "pomowiswtt1100190t1t205002102000t7t0190t1t207002000000t4t0",
            off: Some("01011101004000205002112000D04000207002000000A0"),
        },
    ),
    (
        "0100004795",
        Preset {
            device_type: "gree_8",
            base: "pomowiswtt0100090900005002",
            off: None,
        },
    ),
    (
        "0180333331",
        Preset {
            device_type: "haier_1",
            base: "pomowiswtt12",
            off: None,
        },
    ),
    (
        "0180666661",
        Preset {
            device_type: "aux_1",
            base: "pomowiswtt12",
            off: None,
        },
    ),
    (
        "0180777771",
        Preset {
            device_type: "chigo_1",
            base: "pomowiswtt12",
            off: None,
        },
    ),
];

/// Look up the command preset for a device model id, falling back to the
/// generic template when the model is not in the table.
pub fn preset_for(model: &str) -> &'static Preset {
    PRESETS
        .iter()
        .find(|(id, _)| *id == model)
        .map(|(_, preset)| preset)
        .unwrap_or(&FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_resolves_to_its_preset() {
        let preset = preset_for("0100010727");
        assert_eq!(preset.device_type, "gree_2");
        assert!(preset.off.is_some());

        assert_eq!(preset_for("0180777771").device_type, "chigo_1");
    }

    #[test]
    fn unknown_model_resolves_to_fallback() {
        let preset = preset_for("9999999999");
        assert_eq!(preset.device_type, "generic");
        assert_eq!(preset.base, "pomowiswtta0");
        assert_eq!(preset.off, None);
    }

    #[test]
    fn only_gree_2_carries_the_offset_tokens() {
        for (id, preset) in PRESETS {
            let has_offsets = preset.base.contains("t1t");
            assert_eq!(has_offsets, *id == "0100010727");
        }
    }
}
