use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

use super::high_scores::HighScoreEntry;

/// Durable home of the high-score list. The list is always read and written
/// as a whole.
pub trait HighScoreStore: Send + 'static {
    fn load(&self) -> Result<Vec<HighScoreEntry>, String>;
    fn save(&self, entries: &[HighScoreEntry]) -> Result<(), String>;
}

pub struct PersistentHighScoreStore<TContentProvider = FileContentConfigProvider, TSerializer = YamlConfigSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Vec<HighScoreEntry>>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
}

impl PersistentHighScoreStore<FileContentConfigProvider, YamlConfigSerializer> {
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TContentProvider, TSerializer> PersistentHighScoreStore<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Vec<HighScoreEntry>>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
        }
    }
}

impl<TContentProvider, TSerializer> HighScoreStore for PersistentHighScoreStore<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider + Send + 'static,
    TSerializer: ConfigSerializer<Vec<HighScoreEntry>> + Send + 'static,
{
    fn load(&self) -> Result<Vec<HighScoreEntry>, String> {
        let Some(content) = self.content_provider.get_config_content()? else {
            return Ok(Vec::new());
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.serializer.deserialize(&content)?;
        entries
            .validate()
            .map_err(|e| format!("High score validation error: {}", e))?;
        Ok(entries)
    }

    fn save(&self, entries: &[HighScoreEntry]) -> Result<(), String> {
        let serialized = self.serializer.serialize(&entries.to_vec())?;
        self.content_provider.set_config_content(&serialized)
    }
}

/// Process-local store. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHighScoreStore {
    entries: Arc<Mutex<Vec<HighScoreEntry>>>,
}

impl InMemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<HighScoreEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn load(&self) -> Result<Vec<HighScoreEntry>, String> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .map_err(|_| "High score store lock poisoned".to_string())
    }

    fn save(&self, entries: &[HighScoreEntry]) -> Result<(), String> {
        let mut current = self
            .entries
            .lock()
            .map_err(|_| "High score store lock poisoned".to_string())?;
        *current = entries.to_vec();
        Ok(())
    }
}
