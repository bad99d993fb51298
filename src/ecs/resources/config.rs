use bevy_ecs::resource::Resource;
use serde::Deserialize;

use crate::UidGenerator;

/// Texts shown by the signal entry dialog.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub dialog_title: String,
    pub dialog_description: String,
    pub input_placeholder: String,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            dialog_title: "Set Signal".to_string(),
            dialog_description: "Enter a shape code, color or '0' or '1'".to_string(),
            input_placeholder: String::new(),
        }
    }
}

impl SignalConfig {
    /// Parse a JSON config. Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Resource wrapper around the uid allocator.
#[derive(Resource, Debug, Default)]
pub struct EcsUidGenerator(pub UidGenerator);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SignalConfig::from_json_str(r#"{"dialog_title": "Signal"}"#).unwrap();
        assert_eq!(config.dialog_title, "Signal");
        assert_eq!(
            config.dialog_description,
            SignalConfig::default().dialog_description
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SignalConfig::from_json_str("{").is_err());
        assert!(SignalConfig::from_json_str(r#"{"dialog_title": 3}"#).is_err());
    }
}
