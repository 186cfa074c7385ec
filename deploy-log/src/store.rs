//! Load-or-create, field access, and persistence of deploy log documents

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{errors::LogStoreError, name::resolve_log_name, storage::LogStorage};

/// A single deploy log document: a flat mapping from well-known field keys
/// to recorded values (addresses, tx hashes, block numbers, verified flags)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeployLog {
    /// The recorded fields
    fields: Map<String, Value>,
}

impl DeployLog {
    /// Whether `key` has been recorded
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// The recorded value for `key`, if any
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The recorded value for `key` as a string slice, if it is present
    /// and string-valued
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Records `key = value`, refusing to overwrite an already-recorded key
    /// unless `force` is set. Returns whether the value was written.
    pub fn record(&mut self, key: &str, value: impl Into<Value>, force: bool) -> bool {
        if !force && self.fields.contains_key(key) {
            return false;
        }
        self.fields.insert(key.to_string(), value.into());
        true
    }

    /// The number of recorded fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A store of deploy log documents over a storage backend
pub struct DeployLogStore<S: LogStorage> {
    /// The backend holding the documents
    storage: S,
}

impl<S: LogStorage> DeployLogStore<S> {
    /// Constructs a store over `storage`
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the document stored under `resolved_name`, or an empty one
    /// when no document exists yet.
    ///
    /// A present but malformed document is a fatal parse error, never
    /// silently replaced.
    pub fn load_or_create(&self, resolved_name: &str) -> Result<DeployLog, LogStoreError> {
        match self.storage.read(resolved_name)? {
            Some(contents) => {
                serde_json::from_str(&contents).map_err(|e| LogStoreError::Parse(e.to_string()))
            }
            None => {
                debug!("no deploy log named {resolved_name} yet, starting empty");
                Ok(DeployLog::default())
            }
        }
    }

    /// Overwrites the whole document stored under `resolved_name` with
    /// `log`, pretty-printed
    pub fn persist(&self, resolved_name: &str, log: &DeployLog) -> Result<(), LogStoreError> {
        let contents =
            serde_json::to_string_pretty(log).map_err(|e| LogStoreError::Write(e.to_string()))?;
        self.storage.write(resolved_name, &contents)
    }

    /// Reads one field from the log for `(log_prefix, network)`.
    ///
    /// Returns `None` both when the document and when the key is absent.
    /// Callers treat `None` as an unmet precondition: log a diagnostic and
    /// abort the current operation, rather than propagating an error.
    pub fn read_field(
        &self,
        log_prefix: &str,
        field: &str,
        network: Option<&str>,
    ) -> Result<Option<Value>, LogStoreError> {
        let resolved_name = resolve_log_name(log_prefix, network);
        let log = self.load_or_create(&resolved_name)?;
        Ok(log.get(field).cloned())
    }

    /// Like [`read_field`](Self::read_field), for string-valued fields
    /// (addresses, transaction hashes)
    pub fn read_str_field(
        &self,
        log_prefix: &str,
        field: &str,
        network: Option<&str>,
    ) -> Result<Option<String>, LogStoreError> {
        Ok(self
            .read_field(log_prefix, field, network)?
            .as_ref()
            .and_then(Value::as_str)
            .map(String::from))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        keys::ARBITRATOR_KEY, name::resolve_log_name, storage::MemStorage, LogStoreError,
    };

    use super::{DeployLog, DeployLogStore};

    /// An address used as a recorded value in the tests below
    const TEST_ADDRESS: &str = "0x1111111111111111111111111111111111111111";

    #[test]
    fn test_load_missing_document_is_empty() {
        let store = DeployLogStore::new(MemStorage::new());
        let log = store.load_or_create("deploy_arbitrator_ETHEREUM").unwrap();
        assert!(log.is_empty());
        assert_eq!(log.get("anything"), None);
    }

    #[test]
    fn test_load_is_idempotent() {
        let store = DeployLogStore::new(MemStorage::new());
        let mut log = store.load_or_create("deploy_zklink").unwrap();
        log.record("zkLink proxy", TEST_ADDRESS, false);
        store.persist("deploy_zklink", &log).unwrap();

        let first = store.load_or_create("deploy_zklink").unwrap();
        let second = store.load_or_create("deploy_zklink").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_persist_round_trip() {
        let store = DeployLogStore::new(MemStorage::new());
        let resolved_name = resolve_log_name("deploy_arbitrator", Some("ETHEREUM"));
        assert_eq!(resolved_name, "deploy_arbitrator_ETHEREUM");

        let mut log = store.load_or_create(&resolved_name).unwrap();
        assert!(log.is_empty());
        assert!(log.record(ARBITRATOR_KEY, TEST_ADDRESS, false));
        store.persist(&resolved_name, &log).unwrap();

        let reloaded = store.load_or_create(&resolved_name).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get_str(ARBITRATOR_KEY), Some(TEST_ADDRESS));
        assert_eq!(reloaded, log);
    }

    #[test]
    fn test_record_does_not_overwrite_without_force() {
        let mut log = DeployLog::default();
        assert!(log.record(ARBITRATOR_KEY, TEST_ADDRESS, false));
        assert!(!log.record(ARBITRATOR_KEY, "0x2222", false));
        assert_eq!(log.get_str(ARBITRATOR_KEY), Some(TEST_ADDRESS));

        assert!(log.record(ARBITRATOR_KEY, "0x2222", true));
        assert_eq!(log.get_str(ARBITRATOR_KEY), Some("0x2222"));
    }

    #[test]
    fn test_read_field_absent_vs_present() {
        let store = DeployLogStore::new(MemStorage::new());
        assert_eq!(
            store
                .read_field("deploy_l1_gateway", "l1 gateway", Some("ARBITRUM"))
                .unwrap(),
            None
        );

        let resolved_name = resolve_log_name("deploy_l1_gateway", Some("ARBITRUM"));
        let mut log = store.load_or_create(&resolved_name).unwrap();
        log.record("l1 gateway", TEST_ADDRESS, false);
        log.record("deploy block number", 42u64, false);
        store.persist(&resolved_name, &log).unwrap();

        assert_eq!(
            store
                .read_str_field("deploy_l1_gateway", "l1 gateway", Some("ARBITRUM"))
                .unwrap(),
            Some(TEST_ADDRESS.to_string())
        );
        assert_eq!(
            store
                .read_field("deploy_l1_gateway", "deploy block number", Some("ARBITRUM"))
                .unwrap(),
            Some(json!(42))
        );
        // Missing key within a present document is absent, not an error
        assert_eq!(
            store
                .read_field("deploy_l1_gateway", "l2 gateway", Some("ARBITRUM"))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let storage = MemStorage::new();
        use crate::storage::LogStorage;
        storage.write("deploy_zklink", "not json").unwrap();

        let store = DeployLogStore::new(storage);
        assert!(matches!(
            store.load_or_create("deploy_zklink"),
            Err(LogStoreError::Parse(_))
        ));
    }
}
