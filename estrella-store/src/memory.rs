use crate::gateway::{StorageGateway, StorageKey};
use serde_json::Value;
use std::collections::HashMap;

/// In-memory gateway used by tests and by embeddings that do not supply a
/// durable backend. Semantics match the contract exactly: whole values per
/// key, last write wins.
#[derive(Debug, Default, Clone)]
pub struct MemoryGateway {
    records: HashMap<StorageKey, Value>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageGateway for MemoryGateway {
    fn read(&self, key: StorageKey) -> Option<Value> {
        self.records.get(&key).cloned()
    }

    fn write(&mut self, key: StorageKey, value: Value) {
        tracing::debug!("Stored record at {}", key.as_str());
        self.records.insert(key, value);
    }

    fn remove(&mut self, key: StorageKey) {
        self.records.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_remove() {
        let mut gateway = MemoryGateway::new();
        assert!(gateway.read(StorageKey::Session).is_none());

        gateway.write(StorageKey::Session, serde_json::json!({"login": "alice"}));
        assert!(gateway.read(StorageKey::Session).is_some());

        gateway.remove(StorageKey::Session);
        assert!(gateway.read(StorageKey::Session).is_none());

        // Removing an absent key is a no-op
        gateway.remove(StorageKey::Session);
    }
}
