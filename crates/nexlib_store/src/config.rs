//! Store configuration.

/// Configuration for opening a durable store.
///
/// Mirrors the identity of the on-disk database: a fixed name, a schema
/// version, and the single collection that holds all keyed records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database name; becomes the store's directory name.
    pub name: String,

    /// Schema version. Opening a store whose recorded version is lower
    /// triggers a one-time upgrade; a higher recorded version is rejected.
    pub version: u32,

    /// Name of the collection that holds all keyed records.
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "nexlib".to_string(),
            version: 1,
            collection: "state".to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the database name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the schema version.
    #[must_use]
    pub const fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Sets the collection name.
    #[must_use]
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }
}
