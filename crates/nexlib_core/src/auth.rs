//! Placeholder sign-up and sign-in.
//!
//! Carried over from the original application for shape compatibility:
//! credentials are stored and compared in **plain text**, and a
//! hardcoded fallback admin email is honored. This is a placeholder,
//! not a security model; do not build on it.

use crate::catalog::{Catalog, MutationOutcome};
use crate::id::RecordId;
use crate::model::User;
use chrono::Local;

/// Hardcoded fallback admin login identity (placeholder).
pub const FALLBACK_ADMIN_EMAIL: &str = "chandramukh07@gmail.com";

/// Result of a sign-up attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Account created and appended to the roster.
    Created,
    /// A user with this name or email already exists.
    AlreadyExists,
}

/// Result of a sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The admin profile matched.
    Admin,
    /// A roster user matched; carries the user's display name.
    User(String),
    /// The admin email matched but the password did not.
    WrongPassword,
    /// No identity matched.
    Unknown,
}

/// Creates a new member account.
///
/// Rejects the attempt when a roster user already has this name or
/// email. The new user joins as an active `Member` dated today, with a
/// generated avatar. A failed persist is logged by the catalog and does
/// not fail the sign-up.
pub async fn sign_up(
    catalog: &Catalog,
    name: &str,
    email: &str,
    password: &str,
) -> SignUpOutcome {
    let exists = catalog
        .users()
        .iter()
        .any(|u| u.name == name || u.email.as_deref() == Some(email));
    if exists {
        return SignUpOutcome::AlreadyExists;
    }

    let user = User {
        id: RecordId::new(),
        name: name.to_string(),
        role: "Member".to_string(),
        date: Local::now().format("%d/%m/%Y").to_string(),
        status: "Active".to_string(),
        badge: None,
        img: format!("https://ui-avatars.com/api/?name={name}&background=random"),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    };

    match catalog.push_user(user).await {
        MutationOutcome::DuplicateKey => SignUpOutcome::AlreadyExists,
        _ => SignUpOutcome::Created,
    }
}

/// Checks credentials against the admin profile, then the roster.
///
/// Order matters and mirrors the original flow: admin email first
/// (wrong password is reported distinctly), then user email+password,
/// then the hardcoded fallback admin email.
#[must_use]
pub fn sign_in(catalog: &Catalog, email: &str, password: &str) -> SignInOutcome {
    let admin = catalog.admin();
    if admin.email == email {
        if admin.password == password {
            return SignInOutcome::Admin;
        }
        return SignInOutcome::WrongPassword;
    }

    let matched = catalog.users().into_iter().find(|u| {
        u.email.as_deref() == Some(email) && u.password.as_deref() == Some(password)
    });
    if let Some(user) = matched {
        return SignInOutcome::User(user.name);
    }

    // Placeholder fallback carried over from the original application.
    if email == FALLBACK_ADMIN_EMAIL {
        return SignInOutcome::Admin;
    }

    SignInOutcome::Unknown
}
