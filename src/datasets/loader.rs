//! Memoizing access to named datasets.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use super::{
    delimited::parse_csv,
    resource::{Bundled, ResourceSource, STATION_TRIPLETS},
    DatasetError, Table,
};

type Slot = Arc<Mutex<Option<Table>>>;

/// Reads resources through a [`ResourceSource`] and keeps every parsed table.
///
/// Each resource name gets its own slot. The map lock is only held long
/// enough to find or create the slot, and the slot lock is held across the
/// read and parse, so concurrent first requests for one name do the work once
/// while other names proceed independently. Failed loads leave the slot empty.
pub struct DataLoader {
    source: Box<dyn ResourceSource>,
    cache: Mutex<HashMap<String, Slot>>,
}

impl DataLoader {
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// A loader over the resources compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(Bundled)
    }

    /// Returns the table for `name`, reading and parsing it on first use.
    ///
    /// The name is the cache key exactly as given.
    pub fn load(&self, name: &str) -> Result<Table, DatasetError> {
        let slot = self.slot(name);
        let mut entry = lock(&slot);

        if let Some(table) = entry.as_ref() {
            debug!("Cache hit for `{}`", name);
            return Ok(table.clone());
        }

        debug!("Cache miss for `{}`, reading resource", name);
        let table = match self.source.read(name).and_then(|bytes| parse_csv(name, &bytes)) {
            Ok(table) => table,
            Err(e) => {
                drop(entry);
                self.evict_empty(name, &slot);
                return Err(e);
            }
        };
        debug!(
            "Loaded `{}`: {} rows x {} columns",
            name,
            table.num_rows(),
            table.num_columns()
        );

        *entry = Some(table.clone());

        Ok(table)
    }

    /// The bundled SNOTEL station list.
    pub fn swe_station(&self) -> Result<Table, DatasetError> {
        self.load(STATION_TRIPLETS)
    }

    pub fn is_cached(&self, name: &str) -> bool {
        let slot = lock(&self.cache).get(name).cloned();
        slot.is_some_and(|slot| lock(&slot).is_some())
    }

    /// Drops every cached table. The next `load` of any name reads again.
    pub fn clear(&self) {
        lock(&self.cache).clear();
    }

    fn slot(&self, name: &str) -> Slot {
        lock(&self.cache)
            .entry(name.to_string())
            .or_default()
            .clone()
    }

    /// Removes the slot for `name` after a failed load so failing names do
    /// not accumulate. A slot another caller is busy filling is left alone.
    fn evict_empty(&self, name: &str, slot: &Slot) {
        let mut cache = lock(&self.cache);
        let Some(current) = cache.get(name) else {
            return;
        };
        let idle_and_empty = matches!(current.try_lock(), Ok(entry) if entry.is_none());
        if Arc::ptr_eq(current, slot) && idle_and_empty {
            cache.remove(name);
        }
    }
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::bundled()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
