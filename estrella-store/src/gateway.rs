use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Logical storage keys. The engine persists exactly three records: the
/// user set, the active session, and the per-user ticket map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Users,
    Session,
    Tickets,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Users => "et_users",
            StorageKey::Session => "et_session_user",
            StorageKey::Tickets => "et_tickets",
        }
    }
}

/// Abstract key-value store the engine reads and writes through. Owns no
/// business rules; the backing medium (browser storage, file, memory) is a
/// concern of the embedding application.
pub trait StorageGateway {
    fn read(&self, key: StorageKey) -> Option<Value>;
    fn write(&mut self, key: StorageKey, value: Value);
    fn remove(&mut self, key: StorageKey);
}

/// Read a record through the gateway, degrading to the type's default when
/// the key is absent or the stored JSON no longer decodes. Malformed data
/// must never halt the UI, only cost the stale record.
pub fn read_or_default<T, G>(gateway: &G, key: StorageKey) -> T
where
    T: DeserializeOwned + Default,
    G: StorageGateway + ?Sized,
{
    match gateway.read(key) {
        Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            tracing::warn!("Discarding malformed record at {}: {}", key.as_str(), err);
            T::default()
        }),
        None => T::default(),
    }
}

/// Persist a record whole through the gateway.
pub fn write_record<T, G>(gateway: &mut G, key: StorageKey, record: &T)
where
    T: Serialize,
    G: StorageGateway + ?Sized,
{
    match serde_json::to_value(record) {
        Ok(value) => gateway.write(key, value),
        // Unreachable for the engine's record types; logged rather than
        // propagated so a write can never take the UI down.
        Err(err) => tracing::error!("Failed to encode record for {}: {}", key.as_str(), err),
    }
}
