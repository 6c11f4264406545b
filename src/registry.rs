//! Named store of custom [`BiasTable`]s.
//!
//! A [`BiasRegistry`] can be created and passed around explicitly, or the single
//! process-wide instance can be reached through [`BiasRegistry::global`]. Tables are
//! fully built before they are inserted, so concurrent readers only ever observe
//! complete entries. Entries are never removed.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::debug;

use crate::bias::BiasTable;
use crate::error::SketchError;

/// Process-wide registry, initialized on first access
static GLOBAL: OnceLock<BiasRegistry> = OnceLock::new();

/// Concurrent mapping from non-empty keys to bias tables.
#[derive(Debug, Default)]
pub struct BiasRegistry {
    tables: DashMap<String, Arc<BiasTable>>,
}

impl BiasRegistry {
    /// Creates new empty `BiasRegistry`
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the process-wide registry
    pub fn global() -> &'static BiasRegistry {
        GLOBAL.get_or_init(BiasRegistry::new)
    }

    /// Build a table from `(tick, bias)` pairs and register it under `key`.
    ///
    /// Registering an existing key replaces its table for sketches created afterwards.
    pub fn register<I>(&self, key: &str, biases: I) -> Result<Arc<BiasTable>, SketchError>
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        if key.is_empty() {
            return Err(SketchError::EmptyBiasKey);
        }
        self.register_table(key, BiasTable::new(biases)?)
    }

    /// Register an already built table under `key`
    pub fn register_table(
        &self,
        key: &str,
        table: BiasTable,
    ) -> Result<Arc<BiasTable>, SketchError> {
        if key.is_empty() {
            return Err(SketchError::EmptyBiasKey);
        }
        if table.is_empty() {
            return Err(SketchError::EmptyBiases);
        }

        let table = Arc::new(table);
        let replaced = self
            .tables
            .insert(key.to_string(), Arc::clone(&table))
            .is_some();
        debug!(
            key,
            ticks = table.len(),
            max_tick = table.max_tick(),
            replaced,
            "registered biases"
        );
        Ok(table)
    }

    /// Return table registered under `key`
    pub fn get(&self, key: &str) -> Option<Arc<BiasTable>> {
        self.tables.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tables.contains_key(key)
    }

    /// Return number of registered tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Register biases under `key` in the process-wide registry.
///
/// Sketches pick them up through [`Sketch::with_registered_biases`](crate::Sketch::with_registered_biases).
pub fn register_biases<I>(key: &str, biases: I) -> Result<(), SketchError>
where
    I: IntoIterator<Item = (u64, f64)>,
{
    BiasRegistry::global().register(key, biases).map(|_| ())
}
