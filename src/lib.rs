//! # Lost & Found Core
//!
//! A local-first record store for a lost & found pet board. All state lives
//! in an embedded key-value medium on the user's machine; there is no
//! server. The crate covers the part of the application with real
//! invariants: named record collections with unique ids, a process-wide
//! change notifier that keeps independently-rendered views consistent, and
//! the workflow that promotes a loss report into the found listings.
//!
//! ## Features
//!
//! - **redb-backed storage**: one committed transaction per write, so a key
//!   is never left half-replaced
//! - **Total decoding**: corrupt or hand-edited stored text reads as an
//!   empty collection instead of an error
//! - **Synchronous fan-out**: mutations are visible to every subscribed
//!   view before the mutating call returns
//! - **Swappable medium**: the storage capability is injected, with an
//!   in-memory implementation for tests and previews
//! - **Safe error handling**: no `unwrap()` calls in production code
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use lost_found_core::{FoundSubmission, MemoryMedium, PetBoard};
//!
//! let board = PetBoard::new(Rc::new(MemoryMedium::new()));
//!
//! let report = board.report_found(FoundSubmission {
//!     pet_type: "Dog".into(),
//!     breed: "Beagle".into(),
//!     color: "brown".into(),
//!     location: "Park St".into(),
//!     date: "2024-01-05".into(),
//!     description: "Friendly, blue collar".into(),
//!     image: None,
//! })?;
//!
//! assert_eq!(report.color, "Brown");
//! assert_eq!(board.found_pets()[0].id, report.id);
//! # Ok::<(), lost_found_core::StoreError>(())
//! ```
//!
//! Durable storage swaps in the same way:
//!
//! ```no_run
//! use std::rc::Rc;
//! use lost_found_core::{PetBoard, RedbMedium};
//!
//! let medium = RedbMedium::open("pet_board.redb")?;
//! let board = PetBoard::new(Rc::new(medium));
//! # Ok::<(), lost_found_core::StoreError>(())
//! ```
//!
//! ## Consistency model
//!
//! Everything is single-threaded and synchronous; the board and notifier
//! are not `Send`. Within one process a mutation's effects are visible to
//! subscribers before the mutating call returns. Across processes sharing
//! the same medium there is no isolation: concurrent writers to one
//! collection race, and the last whole-value write wins. The one accepted
//! inconsistency is a promotion whose lost-side removal is rejected after
//! the found-side insert committed; the record then appears in both
//! collections until the next successful lost-side write, and found
//! membership is authoritative.

pub mod app_error;
pub mod board;
pub mod codec;
pub mod collection_store;
pub mod display;
pub mod medium;
pub mod notifier;
pub mod record_model;

pub use app_error::StoreError;
pub use board::{PetBoard, Promotion};
pub use collection_store::{CollectionStore, CONTACTS, FOUND_PETS, LOST_PETS};
pub use medium::{Medium, MemoryMedium, RedbMedium};
pub use notifier::{Notifier, Subscription, FOUND_UPDATED, LOST_UPDATED};
pub use record_model::{
    ContactMessage, ContactSubmission, FoundReport, FoundSubmission, LostReport, LostSubmission,
    PetRecord, Record,
};
