//! The persistent key-value medium behind the collection store.
//!
//! The medium holds one UTF-8 text value per collection key and only
//! supports whole-value replace. Replacement is copy-on-write at the key
//! level: a rejected write leaves the previous value untouched.
//!
//! [`RedbMedium`] is the durable implementation. [`MemoryMedium`] keeps
//! everything in the process and can simulate an exhausted or disabled
//! medium, which makes it the natural substitute in tests and previews.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;

use log::info;
use redb::{Database, ReadableTable, TableDefinition, TableError};

use crate::app_error::StoreError;

const COLLECTIONS: TableDefinition<&str, &str> = TableDefinition::new("collections");

/// Shared key-value storage with whole-value replace semantics.
pub trait Medium {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Durable medium backed by a redb database file. Each write is a single
/// committed transaction, so a crash or rejected commit never leaves a key
/// half-replaced.
pub struct RedbMedium {
    db: Database,
}

impl RedbMedium {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path.as_ref())?;
        info!("storage engine ready at {}", path.as_ref().display());
        Ok(Self { db })
    }
}

impl Medium for RedbMedium {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let tx = self.db.begin_read()?;
        let table = match tx.open_table(COLLECTIONS) {
            Ok(table) => table,
            // A fresh database has no table until the first write.
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(table.get(key)?.map(|value| value.value().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let tx = self.db.begin_write()?;
        {
            let mut table = tx.open_table(COLLECTIONS)?;
            table.insert(key, value)?;
        }
        tx.commit()?;
        Ok(())
    }
}

/// In-process medium with the same observable behavior as the durable one,
/// minus durability. `deny_writes` switches the medium into a rejected-write
/// state, the same failure a quota-exhausted or disabled medium produces.
#[derive(Default)]
pub struct MemoryMedium {
    cells: RefCell<HashMap<String, String>>,
    deny_writes: Cell<bool>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deny_writes(&self, deny: bool) {
        self.deny_writes.set(deny);
    }
}

impl Medium for MemoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.cells.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.deny_writes.get() {
            return Err(StoreError::StorageUnavailable(
                "write rejected: storage is full or disabled".to_string(),
            ));
        }
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
