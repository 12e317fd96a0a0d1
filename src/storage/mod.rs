//! Storage Module
//!
//! The facade the HTTP layer talks to.
//!
//! ## Responsibilities
//! - One trait, `Storage`, describing every read and create the handlers need
//! - `MemStorage`: the process-lifetime in-memory implementation
//! - Demonstration data seeding on open
//!
//! A table-backed implementation can satisfy the same trait without
//! changing callers, so handlers should hold an `Arc<dyn Storage>`.
//!
//! ## Failure Model
//! Absence is `Ok(None)` or an empty list. `Err` is reserved for rejected
//! input on the create path and for backend failures.

mod memory;
mod seed;

pub use memory::MemStorage;

use crate::error::Result;
use crate::model::{
    Contact, NewContact, NewProduct, NewUser, Product, ProductId, ProductWithSeller, User, UserId,
};
use crate::query::ProductFilter;

/// Data access contract for the marketplace
pub trait Storage: Send + Sync {
    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------
    fn get_user(&self, id: UserId) -> Result<Option<User>>;

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Register a user; the caller checks username/email uniqueness first
    fn create_user(&self, user: NewUser) -> Result<User>;

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// Active listings, newest first, joined with their sellers
    fn get_products(&self, filter: &ProductFilter) -> Result<Vec<ProductWithSeller>>;

    /// `None` covers both a missing product and a missing seller
    fn get_product(&self, id: ProductId) -> Result<Option<ProductWithSeller>>;

    /// All of a seller's listings, active or not, newest first
    fn get_products_by_seller(&self, seller_id: UserId) -> Result<Vec<Product>>;

    fn create_product(&self, product: NewProduct, seller_id: UserId) -> Result<Product>;

    // -------------------------------------------------------------------------
    // Contacts
    // -------------------------------------------------------------------------
    fn create_contact(&self, contact: NewContact) -> Result<Contact>;

    /// Inquiries for a product id, newest first
    fn get_contacts_by_product(&self, product_id: ProductId) -> Result<Vec<Contact>>;
}
