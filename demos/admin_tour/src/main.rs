//! NexLib state layer walkthrough.
//!
//! This binary plays the role of the UI collaborator: it opens the
//! store, bootstraps the catalog, performs one mutation of each kind,
//! and reloads to show that migration is idempotent.
//!
//! Run with: cargo run -p admin_tour

use nexlib_core::{load, open_store, BookDraft, UserDraft};
use nexlib_store::StoreConfig;
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let data_dir = Path::new("admin_tour_data");
    let store = open_store(StoreConfig::default(), data_dir);

    let (catalog, report) = load(store, None).await;
    info!(?report, "catalog loaded");

    println!("-- Books --");
    for book in catalog.books() {
        println!("  {} by {} ({} stars)", book.title, book.author, book.rating);
    }
    println!("-- Users --");
    for user in catalog.users() {
        println!("  {} [{} / {}]", user.name, user.role, user.status);
    }
    let admin = catalog.admin();
    println!("-- Admin: {} <{}> --", admin.fullname, admin.email);

    // One mutation of each kind
    let outcome = catalog
        .add_book(BookDraft {
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            genre: "Sci-Fi".to_string(),
            rating: 4.5,
            cover: Some("https://covers.openlibrary.org/b/id/12626801-L.jpg".to_string()),
            pdf: None,
        })
        .await;
    println!("add_book: {outcome:?}");

    if let Some(bob) = catalog.find_user_by_name("Bob Smith") {
        let outcome = catalog
            .update_user(
                bob.id,
                UserDraft {
                    name: bob.name.clone(),
                    role: "Member".to_string(),
                    date: bob.date.clone(),
                    status: None,
                    img: None,
                },
            )
            .await;
        println!("update_user: {outcome:?}");
    }

    let outcome = catalog.delete_book_titled("The Left Hand of Darkness").await;
    println!("delete_book_titled: {outcome:?}");

    // Reload: everything now resolves from the durable store
    let store = open_store(StoreConfig::default(), data_dir);
    let (_, report) = load(store, None).await;
    info!(?report, "second load");
    println!("second load report: {report:?}");
}
