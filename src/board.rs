//! The board: the narrow surface view components call into.
//!
//! A [`PetBoard`] wires one medium, one collection store, and one notifier
//! together and exposes the operations the rest of the application needs:
//! submitting reports, listing collections, and promoting a loss report to
//! the found listings. Views subscribe through [`PetBoard::notifier`] and
//! reload on each notification for their topic.

use std::rc::Rc;

use log::info;

use crate::app_error::StoreError;
use crate::collection_store::{CollectionStore, CONTACTS, FOUND_PETS, LOST_PETS};
use crate::medium::Medium;
use crate::notifier::{Notifier, FOUND_UPDATED, LOST_UPDATED};
use crate::record_model::{
    now_iso, ContactMessage, ContactSubmission, FoundReport, FoundSubmission, LostReport,
    LostSubmission, PetRecord,
};

/// Outcome of a promotion attempt. A missing id is a normal outcome, not
/// an error: promoting twice, or promoting an already-resolved report,
/// changes nothing.
#[derive(Debug, PartialEq)]
pub enum Promotion {
    Moved(FoundReport),
    NotFound,
}

pub struct PetBoard {
    store: CollectionStore,
    notifier: Notifier,
}

impl PetBoard {
    pub fn new(medium: Rc<dyn Medium>) -> Self {
        Self {
            store: CollectionStore::new(medium),
            notifier: Notifier::new(),
        }
    }

    /// The underlying collection store, for hosts that keep their own
    /// collections next to the built-in ones.
    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    /// The event bus views subscribe to for refresh signals.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Active loss reports, newest first.
    pub fn lost_pets(&self) -> Vec<LostReport> {
        self.store.load(LOST_PETS)
    }

    /// Found-pet reports, newest first.
    pub fn found_pets(&self) -> Vec<FoundReport> {
        self.store.load(FOUND_PETS)
    }

    /// Contact messages, newest first.
    pub fn contacts(&self) -> Vec<ContactMessage> {
        self.store.load(CONTACTS)
    }

    /// Looks a pet record up by id across both collections. Loss reports
    /// shadow found reports for the same id, matching the promotion
    /// failure mode where a duplicate can briefly exist in both.
    pub fn find(&self, id: i64) -> Option<PetRecord> {
        self.lost_pets()
            .into_iter()
            .find(|report| report.id == id)
            .map(PetRecord::Lost)
            .or_else(|| {
                self.found_pets()
                    .into_iter()
                    .find(|report| report.id == id)
                    .map(PetRecord::Found)
            })
    }

    /// Validates and stores a lost-pet submission, then notifies lost-pet
    /// viewers. Returns the stored report.
    pub fn report_lost(&self, submission: LostSubmission) -> Result<LostReport, StoreError> {
        let report = submission.build()?;
        self.store.prepend(LOST_PETS, report.clone())?;
        self.notifier.publish(LOST_UPDATED);
        Ok(report)
    }

    /// Validates and stores a found-pet submission, then notifies found-pet
    /// viewers. Returns the stored report.
    pub fn report_found(&self, submission: FoundSubmission) -> Result<FoundReport, StoreError> {
        let report = submission.build()?;
        self.store.prepend(FOUND_PETS, report.clone())?;
        self.notifier.publish(FOUND_UPDATED);
        Ok(report)
    }

    /// Validates and stores a contact message. Contact messages have no
    /// independent viewers, so nothing is published.
    pub fn send_contact(&self, submission: ContactSubmission) -> Result<ContactMessage, StoreError> {
        let message = submission.build()?;
        self.store.prepend(CONTACTS, message.clone())?;
        Ok(message)
    }

    /// Moves the loss report with `id` to the found listings.
    ///
    /// The found-side insert happens first, then the lost-side removal,
    /// then `found-updated` and `lost-updated` publish in that order, so
    /// found-viewers see the new entry no later than lost-viewers see the
    /// removal. The medium has no multi-key transaction: if the removal
    /// write is rejected after the insert committed, the record exists in
    /// both collections until the next successful lost-side write. Found
    /// membership is authoritative in that window; the stale lost entry is
    /// a cosmetic duplicate. No notification fires on that failing call.
    pub fn promote(&self, id: i64) -> Result<Promotion, StoreError> {
        let lost = self.store.load::<LostReport>(LOST_PETS);
        let Some(report) = lost.into_iter().find(|report| report.id == id) else {
            return Ok(Promotion::NotFound);
        };
        let found = report.into_found(now_iso());
        // Replacing any found entry with the same id keeps ids unique when a
        // promotion is retried after its removal write was rejected.
        let mut found_all = self.store.load::<FoundReport>(FOUND_PETS);
        found_all.retain(|existing| existing.id != id);
        found_all.insert(0, found.clone());
        self.store.save_all(FOUND_PETS, &found_all)?;
        self.store.remove_by_id::<LostReport>(LOST_PETS, id)?;
        self.notifier.publish(FOUND_UPDATED);
        self.notifier.publish(LOST_UPDATED);
        info!("report {id} moved to the found listings");
        Ok(Promotion::Moved(found))
    }
}
