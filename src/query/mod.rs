//! Query Layer Module
//!
//! Read-side filtering, joining and ordering over an `EntityStore`.
//!
//! ## Guarantees
//! - Every function is a pure read of the store it is handed
//! - Results are owned copies, never views into the tables
//! - Ordered results are newest `created_at` first; ties keep
//!   insertion order (stable sort over an id-ordered scan)
//!
//! ## Join Rule
//! A product whose seller is missing is dropped from joined results
//! without an error. Contacts are never filtered by product existence.

mod filter;

pub use filter::{CategoryFilter, ProductFilter, ProductParams, ALL_CATEGORIES};

use chrono::{DateTime, Utc};

use crate::entity::EntityStore;
use crate::model::{Contact, Product, ProductId, ProductWithSeller, User, UserId};

/// Active listings matching `filter`, joined with their sellers
pub fn list_products(store: &EntityStore, filter: &ProductFilter) -> Vec<ProductWithSeller> {
    let mut results: Vec<ProductWithSeller> = store
        .products()
        .iter()
        .filter(|product| filter.matches(product))
        .filter_map(|product| join_seller(store, product))
        .collect();

    newest_first(&mut results, |p| p.product.created_at);

    tracing::trace!(
        category = ?filter.category(),
        search = ?filter.search(),
        count = results.len(),
        "listed products"
    );
    results
}

/// One listing joined with its seller
///
/// `None` when the product is missing or its seller is missing.
pub fn get_product(store: &EntityStore, id: ProductId) -> Option<ProductWithSeller> {
    let product = store.product(id)?;
    let joined = join_seller(store, product);
    if joined.is_none() {
        tracing::trace!(product_id = id, seller_id = product.seller_id, "seller missing for product");
    }
    joined
}

/// Every listing owned by `seller_id`, active or not, without the join
pub fn products_by_seller(store: &EntityStore, seller_id: UserId) -> Vec<Product> {
    let mut results: Vec<Product> = store
        .products()
        .iter()
        .filter(|product| product.seller_id == seller_id)
        .cloned()
        .collect();

    newest_first(&mut results, |p| p.created_at);
    results
}

/// Every inquiry about `product_id`, whether or not the product exists
pub fn contacts_by_product(store: &EntityStore, product_id: ProductId) -> Vec<Contact> {
    let mut results: Vec<Contact> = store
        .contacts()
        .iter()
        .filter(|contact| contact.product_id == product_id)
        .cloned()
        .collect();

    newest_first(&mut results, |c| c.created_at);
    results
}

/// First user with exactly this username
pub fn find_user_by_username(store: &EntityStore, username: &str) -> Option<User> {
    store
        .users()
        .iter()
        .find(|user| user.username == username)
        .cloned()
}

/// First user with exactly this email
pub fn find_user_by_email(store: &EntityStore, email: &str) -> Option<User> {
    store
        .users()
        .iter()
        .find(|user| user.email == email)
        .cloned()
}

fn join_seller(store: &EntityStore, product: &Product) -> Option<ProductWithSeller> {
    let seller = store.user(product.seller_id)?;
    Some(ProductWithSeller::new(product.clone(), seller))
}

/// Stable descending sort on a timestamp
fn newest_first<T>(items: &mut [T], created_at: impl Fn(&T) -> DateTime<Utc>) {
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}
