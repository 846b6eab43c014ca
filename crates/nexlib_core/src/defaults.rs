//! Compiled-in default data.
//!
//! Used only when neither the durable store nor the legacy storage
//! holds a value for a key. The field values are carried over verbatim
//! from the previous generation of the application.

use crate::id::RecordId;
use crate::model::{AdminProfile, Book, User};

fn book(title: &str, author: &str, genre: &str, rating: f64, cover: &str, pdf: &str) -> Book {
    Book {
        id: RecordId::new(),
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        rating,
        cover: cover.to_string(),
        pdf: Some(pdf.to_string()),
    }
}

fn user(name: &str, role: &str, date: &str, status: &str, badge: Option<&str>, img: &str) -> User {
    User {
        id: RecordId::new(),
        name: name.to_string(),
        role: role.to_string(),
        date: date.to_string(),
        status: status.to_string(),
        badge: badge.map(str::to_string),
        img: img.to_string(),
        email: None,
        password: None,
    }
}

/// The default library catalog.
#[must_use]
pub fn default_books() -> Vec<Book> {
    vec![
        book(
            "Harry Potter",
            "J.K. Rowling",
            "Fantasy",
            5.0,
            "https://covers.openlibrary.org/b/id/10521270-L.jpg",
            "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf",
        ),
        book(
            "X-MEN",
            "Stan Lee",
            "Sci-Fi",
            4.5,
            "https://covers.openlibrary.org/b/id/12628969-L.jpg",
            "https://www.africau.edu/images/default/sample.pdf",
        ),
        book(
            "Wuthering Heights",
            "Emily Bronte",
            "Romance",
            4.0,
            "https://covers.openlibrary.org/b/id/12548118-L.jpg",
            "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf",
        ),
        book(
            "Catch-22",
            "Joseph Heller",
            "Satire",
            4.5,
            "https://covers.openlibrary.org/b/id/12628134-L.jpg",
            "https://www.africau.edu/images/default/sample.pdf",
        ),
        book(
            "Dune",
            "Frank Herbert",
            "Sci-Fi",
            5.0,
            "https://covers.openlibrary.org/b/id/12138135-L.jpg",
            "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf",
        ),
    ]
}

/// The default user roster.
#[must_use]
pub fn default_users() -> Vec<User> {
    vec![
        user(
            "Alice Johnson",
            "Member",
            "10/12/2025",
            "Active",
            None,
            "https://randomuser.me/api/portraits/women/11.jpg",
        ),
        user(
            "Bob Smith",
            "Editor",
            "05/11/2025",
            "Active",
            None,
            "https://randomuser.me/api/portraits/men/11.jpg",
        ),
        user(
            "Emma Watson",
            "Editor",
            "14/12/2025",
            "Active",
            None,
            "https://randomuser.me/api/portraits/women/35.jpg",
        ),
        user(
            "David Lee",
            "Guest",
            "12/12/2025",
            "Pending",
            Some("warning"),
            "https://randomuser.me/api/portraits/men/32.jpg",
        ),
        user(
            "Sarah Connor",
            "Member",
            "01/11/2025",
            "Active",
            None,
            "https://randomuser.me/api/portraits/women/65.jpg",
        ),
        user(
            "Michael Chen",
            "Editor",
            "25/11/2025",
            "Inactive",
            Some("inactive"),
            "https://randomuser.me/api/portraits/men/85.jpg",
        ),
        user(
            "Jessica Pearson",
            "Guest",
            "05/12/2025",
            "Active",
            None,
            "https://randomuser.me/api/portraits/women/44.jpg",
        ),
    ]
}

/// The default administrator profile.
#[must_use]
pub fn default_admin() -> AdminProfile {
    AdminProfile {
        username: "Chandrachur".to_string(),
        fullname: "Chandrachur Mukherjee".to_string(),
        email: "chandramukh07@gmail.com".to_string(),
        role: "Super Admin".to_string(),
        contact: "8540031257".to_string(),
        img: "admin_profile_pic.jpg".to_string(),
        password: "password123".to_string(),
    }
}
