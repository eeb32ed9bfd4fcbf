use serde::Serialize;
use serde::de::DeserializeOwned;

/// Text format used to persist config files and score tables.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: DeserializeOwned + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize yaml: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize yaml: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::frog_catch::HighScoreEntry;

    #[test]
    fn test_score_list_is_plain_yaml_sequence() {
        let serializer = YamlConfigSerializer::new();
        let entries = vec![HighScoreEntry::new(40, "01.02.2026")];

        let content = serializer.serialize(&entries).unwrap();
        assert!(content.contains("score: 40"));

        let parsed: Vec<HighScoreEntry> = serializer.deserialize(&content).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Vec<HighScoreEntry>, String> = serializer.deserialize("- score: [");
        assert!(result.unwrap_err().starts_with("Failed to deserialize yaml"));
    }
}
