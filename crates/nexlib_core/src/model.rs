//! Entity types for the three collections.
//!
//! The serde shapes match the JSON the original application persisted,
//! so existing durable and legacy values decode unchanged. The only
//! addition is the `id` field: records written before IDs existed get
//! one assigned during decoding.

use crate::id::RecordId;
use serde::{Deserialize, Serialize};

/// A book in the library catalog.
///
/// `title` is a display attribute with a uniqueness invariant (no two
/// books share a title); lookups for update and delete are keyed on
/// `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Stable identifier, assigned at creation.
    #[serde(default)]
    pub id: RecordId,
    /// Title; unique within the collection.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Free-text genre (Fantasy, Sci-Fi, ...).
    pub genre: String,
    /// Rating from 0 to 5, half-steps allowed.
    pub rating: f64,
    /// Cover image: URL or embedded data URI.
    pub cover: String,
    /// Optional document: URL or embedded data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

/// A user in the roster.
///
/// `name` is a display attribute with a uniqueness invariant; lookups
/// for update and delete are keyed on `id`. The optional `email` and
/// `password` fields come from the sign-up flow; the password is stored
/// in plain text purely for shape compatibility with the data the
/// original application wrote. That is a documented weakness, not a
/// security model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier, assigned at creation.
    #[serde(default)]
    pub id: RecordId,
    /// Display name; unique within the collection.
    pub name: String,
    /// Free-text role (Member, Editor, Guest, ...).
    pub role: String,
    /// Join date, day/month/year.
    pub date: String,
    /// Account status (Active, Pending, Inactive).
    pub status: String,
    /// Optional badge class carried by some legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Profile image: URL or embedded data URI.
    pub img: String,
    /// Optional email, set by sign-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Optional plain-text password, set by sign-up (placeholder only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// The singleton administrator profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    /// Short display name.
    pub username: String,
    /// Full name.
    pub fullname: String,
    /// Contact email; also the admin login identity.
    pub email: String,
    /// Role label.
    pub role: String,
    /// Phone number.
    pub contact: String,
    /// Profile image: URL or embedded data URI.
    pub img: String,
    /// Plain-text password (placeholder only).
    pub password: String,
}

/// Caller-supplied fields for adding or editing a book.
///
/// `cover` and `pdf` are optional because "no new file chosen" means
/// "keep the old value" on update; on add, a missing cover is a
/// validation failure.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
    /// Genre.
    pub genre: String,
    /// Rating from 0 to 5.
    pub rating: f64,
    /// New cover image, if one was chosen.
    pub cover: Option<String>,
    /// New document, if one was chosen.
    pub pdf: Option<String>,
}

/// Caller-supplied fields for adding or editing a user.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    /// Display name.
    pub name: String,
    /// Role.
    pub role: String,
    /// Join date, day/month/year.
    pub date: String,
    /// New status, if changed. Adds default to `Active`.
    pub status: Option<String>,
    /// New profile image, if one was chosen.
    pub img: Option<String>,
}

/// Caller-supplied fields for editing the admin profile.
///
/// The profile form always submits every field; the image is updated
/// through a separate upload control and kept otherwise.
#[derive(Debug, Clone, Default)]
pub struct AdminUpdate {
    /// Short display name.
    pub username: String,
    /// Full name.
    pub fullname: String,
    /// Contact email.
    pub email: String,
    /// Role label.
    pub role: String,
    /// Phone number.
    pub contact: String,
    /// Plain-text password (placeholder only).
    pub password: String,
}
