//! CRUD over named, ordered collections of records.
//!
//! A collection is one key in the medium holding a JSON array, newest
//! first. The medium only supports whole-value replace, so every mutation
//! is a load-modify-save cycle. Within one process that cycle runs to
//! completion before anything else observes it; across processes there is
//! no isolation, and the last writer to a key wins. Single-writer usage is
//! the expected deployment; a versioned-write scheme would be the upgrade
//! path if that ever changes.

use std::rc::Rc;

use log::warn;

use crate::app_error::StoreError;
use crate::codec;
use crate::medium::Medium;
use crate::record_model::Record;

/// Collection key for active loss reports.
pub const LOST_PETS: &str = "lostPets";
/// Collection key for found-pet reports.
pub const FOUND_PETS: &str = "foundPets";
/// Collection key for contact-form messages.
pub const CONTACTS: &str = "contacts";

pub struct CollectionStore {
    medium: Rc<dyn Medium>,
}

impl CollectionStore {
    pub fn new(medium: Rc<dyn Medium>) -> Self {
        Self { medium }
    }

    /// Reads and decodes a collection. Missing keys and unreadable content
    /// both read as empty; a failed read is logged and also reads as empty.
    pub fn load<T: Record>(&self, name: &str) -> Vec<T> {
        match self.medium.read(name) {
            Ok(Some(text)) => codec::decode(&text),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read collection '{name}': {err}");
                Vec::new()
            }
        }
    }

    /// Encodes and writes the whole collection back under `name`.
    pub fn save_all<T: Record>(&self, name: &str, records: &[T]) -> Result<(), StoreError> {
        let text = codec::encode(records)?;
        self.medium.write(name, &text)
    }

    /// Inserts a record at the head of the collection.
    pub fn prepend<T: Record>(&self, name: &str, record: T) -> Result<(), StoreError> {
        let mut records = self.load::<T>(name);
        records.insert(0, record);
        self.save_all(name, &records)
    }

    /// Removes every record with the given id and saves the result.
    /// Returns whether anything was removed.
    pub fn remove_by_id<T: Record>(&self, name: &str, id: i64) -> Result<bool, StoreError> {
        let records = self.load::<T>(name);
        let before = records.len();
        let kept: Vec<T> = records.into_iter().filter(|r| r.id() != id).collect();
        let removed = kept.len() != before;
        self.save_all(name, &kept)?;
        Ok(removed)
    }
}
