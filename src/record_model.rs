//! Data model definitions for the persisted collections.
//!
//! Two report shapes share a common core of fields and are told apart by the
//! collection that holds them: [`LostReport`] lives under `lostPets`,
//! [`FoundReport`] under `foundPets`. [`ContactMessage`] is the third record
//! kind, stored under `contacts` through the same collection machinery.
//!
//! All records serialize to the camelCase JSON layout the persisted medium
//! has always used, so existing stored data keeps decoding. Missing fields
//! default instead of failing, which is what lets a hand-edited or truncated
//! entry degrade gracefully rather than poison a whole collection.
//!
//! # Examples
//!
//! ```
//! use lost_found_core::FoundSubmission;
//!
//! let report = FoundSubmission {
//!     pet_type: "Dog".into(),
//!     breed: "Beagle".into(),
//!     color: "light brown".into(),
//!     location: "Park St".into(),
//!     date: "2024-01-05".into(),
//!     description: "Friendly, blue collar".into(),
//!     image: None,
//! }
//! .build()
//! .unwrap();
//!
//! assert_eq!(report.color, "Light brown");
//! assert!(report.id > 0);
//! ```

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::app_error::StoreError;

/// Anything the collection store can persist: serializable, cloneable, and
/// addressable by a numeric id.
pub trait Record: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> i64;
}

/// An active, unresolved loss report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LostReport {
    pub id: i64,
    pub pet_name: String,
    pub pet_type: String,
    pub breed: String,
    pub color: String,
    pub size: String,
    pub gender: String,
    /// Calendar date the pet was lost. Older stored entries used
    /// `dateLost`/`lostDate`; both still decode.
    #[serde(alias = "dateLost", alias = "lostDate")]
    pub date: String,
    pub location: String,
    pub description: String,
    pub microchip_id: String,
    pub contact_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: String,
}

impl Record for LostReport {
    fn id(&self) -> i64 {
        self.id
    }
}

impl LostReport {
    /// Consumes the loss report and produces its found-side counterpart.
    /// The id is carried over; `moved_at` records the instant of the move,
    /// and it doubles as the found date when the report never had one.
    pub fn into_found(self, moved_at: String) -> FoundReport {
        let date = if self.date.trim().is_empty() {
            moved_at.clone()
        } else {
            self.date
        };
        FoundReport {
            id: self.id,
            pet_type: self.pet_type,
            breed: self.breed,
            color: self.color,
            location: self.location,
            date,
            description: self.description,
            image: self.image,
            moved_at: Some(moved_at),
        }
    }
}

/// A found-pet report. Carries `moved_at` only when it originated from a
/// promoted loss report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoundReport {
    pub id: i64,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub breed: String,
    pub color: String,
    pub location: String,
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moved_at: Option<String>,
}

impl Record for FoundReport {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A message left through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}

impl Record for ContactMessage {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A pet record of either shape, tagged by the collection it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum PetRecord {
    Lost(LostReport),
    Found(FoundReport),
}

impl PetRecord {
    pub fn id(&self) -> i64 {
        match self {
            PetRecord::Lost(report) => report.id,
            PetRecord::Found(report) => report.id,
        }
    }

    pub fn pet_type(&self) -> &str {
        match self {
            PetRecord::Lost(report) => &report.pet_type,
            PetRecord::Found(report) => &report.pet_type,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            PetRecord::Lost(report) => &report.color,
            PetRecord::Found(report) => &report.color,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            PetRecord::Lost(report) => &report.date,
            PetRecord::Found(report) => &report.date,
        }
    }
}

/// Raw field values collected by a lost-pet form, before validation.
#[derive(Debug, Clone, Default)]
pub struct LostSubmission {
    pub pet_name: String,
    pub pet_type: String,
    pub breed: String,
    pub color: String,
    pub size: String,
    pub gender: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub microchip_id: String,
    pub contact_number: String,
    pub image: Option<String>,
}

impl LostSubmission {
    /// Validates the submission and builds a storable report: free-form
    /// fields trimmed, color normalized, id and creation instant assigned.
    pub fn build(self) -> Result<LostReport, StoreError> {
        let pet_name = require(&self.pet_name, "pet name")?;
        let pet_type = require(&self.pet_type, "pet type")?;
        let breed = require(&self.breed, "breed")?;
        let color = normalize_color(&self.color);
        if color.is_empty() {
            return Err(StoreError::Validation("color is required".to_string()));
        }
        let size = require(&self.size, "size")?;
        let gender = require(&self.gender, "gender")?;
        let date = require(&self.date, "date lost")?;
        let location = require(&self.location, "location")?;
        let description = require(&self.description, "description")?;
        let contact_number = self.contact_number.trim().to_string();
        if !is_ten_digits(&contact_number) {
            return Err(StoreError::Validation(
                "contact number must be exactly 10 digits".to_string(),
            ));
        }
        Ok(LostReport {
            id: next_record_id(),
            pet_name,
            pet_type,
            breed,
            color,
            size,
            gender,
            date,
            location,
            description,
            microchip_id: self.microchip_id.trim().to_string(),
            contact_number,
            image: self.image,
            created_at: now_iso(),
        })
    }
}

/// Raw field values collected by a found-pet form, before validation.
#[derive(Debug, Clone, Default)]
pub struct FoundSubmission {
    pub pet_type: String,
    pub breed: String,
    pub color: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub image: Option<String>,
}

impl FoundSubmission {
    pub fn build(self) -> Result<FoundReport, StoreError> {
        let pet_type = require(&self.pet_type, "pet type")?;
        let breed = require(&self.breed, "breed")?;
        let color = normalize_color(&self.color);
        if color.is_empty() {
            return Err(StoreError::Validation("color is required".to_string()));
        }
        let location = require(&self.location, "location")?;
        let date = require(&self.date, "date found")?;
        let description = require(&self.description, "description")?;
        Ok(FoundReport {
            id: next_record_id(),
            pet_type,
            breed,
            color,
            location,
            date,
            description,
            image: self.image,
            moved_at: None,
        })
    }
}

/// Raw field values collected by the contact form, before validation.
#[derive(Debug, Clone, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn build(self) -> Result<ContactMessage, StoreError> {
        let name = require(&self.name, "name")?;
        let email = self.email.trim().to_string();
        if !looks_like_email(&email) {
            return Err(StoreError::Validation("email looks invalid".to_string()));
        }
        let phone = self.phone.trim().to_string();
        if !phone.is_empty() && !is_ten_digits(&phone) {
            return Err(StoreError::Validation(
                "phone must be exactly 10 digits".to_string(),
            ));
        }
        let subject = require(&self.subject, "subject")?;
        let message = self.message.trim().to_string();
        if message.len() < 10 {
            return Err(StoreError::Validation(
                "message should be at least 10 characters".to_string(),
            ));
        }
        Ok(ContactMessage {
            id: next_record_id(),
            name,
            email,
            phone,
            subject,
            message,
            created_at: now_iso(),
        })
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Next record id: the current millisecond clock, bumped past the previous
/// id so two records created within the same millisecond still differ.
pub fn next_record_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .map(|last| now.max(last + 1))
        .unwrap_or(now)
}

/// Current instant as an RFC 3339 string with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Trims and capitalizes a free-form color description: first word gets an
/// uppercase initial, everything else is lower-cased.
pub fn normalize_color(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                capitalize(word)
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn require(value: &str, field: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn is_ten_digits(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}
