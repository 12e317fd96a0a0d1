//! In-memory storage
//!
//! Process-lifetime implementation of `Storage`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::entity::{EntityKind, EntityStore};
use crate::error::Result;
use crate::model::{
    Contact, NewContact, NewProduct, NewUser, Product, ProductId, ProductWithSeller, User, UserId,
};
use crate::query::{self, ProductFilter};

use super::{seed, Storage};

/// Storage backed by an `EntityStore` held in memory
///
/// ## Concurrency:
/// - `store`: one RwLock around all three tables and their id counters
/// - Creates take the write lock for id allocation and insert together,
///   so two writers can never receive the same id
/// - Reads hold a single read guard across filter, join and sort, so a
///   reader never sees a product without the seller inserted before it
pub struct MemStorage {
    /// Storage configuration
    config: Config,

    /// Source of `created_at` stamps
    clock: Arc<dyn Clock>,

    /// All records and id counters
    store: RwLock<EntityStore>,
}

impl MemStorage {
    /// Open a store using the wall clock
    ///
    /// Seeds the demonstration users and listings when
    /// `config.seed_sample_data` is set.
    pub fn open(config: Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Open a store stamping records from `clock`
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let storage = Self {
            config,
            clock,
            store: RwLock::new(EntityStore::new()),
        };

        if storage.config.seed_sample_data {
            seed::seed_sample_data(&storage)?;
        }

        Ok(storage)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    pub fn user_count(&self) -> usize {
        self.store.read().users().len()
    }

    pub fn product_count(&self) -> usize {
        self.store.read().products().len()
    }

    pub fn contact_count(&self) -> usize {
        self.store.read().contacts().len()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Storage for MemStorage {
    fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.store.read().user(id).cloned())
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(query::find_user_by_username(&self.store.read(), username))
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(query::find_user_by_email(&self.store.read(), email))
    }

    fn create_user(&self, user: NewUser) -> Result<User> {
        let mut store = self.store.write();
        let id = store.next_id(EntityKind::User);
        let user = user.into_user(id, self.clock.now());
        store.put_user(user.clone());

        tracing::debug!(kind = %EntityKind::User, id, username = %user.username, "created record");
        Ok(user)
    }

    fn get_products(&self, filter: &ProductFilter) -> Result<Vec<ProductWithSeller>> {
        Ok(query::list_products(&self.store.read(), filter))
    }

    fn get_product(&self, id: ProductId) -> Result<Option<ProductWithSeller>> {
        Ok(query::get_product(&self.store.read(), id))
    }

    fn get_products_by_seller(&self, seller_id: UserId) -> Result<Vec<Product>> {
        Ok(query::products_by_seller(&self.store.read(), seller_id))
    }

    fn create_product(&self, product: NewProduct, seller_id: UserId) -> Result<Product> {
        let mut store = self.store.write();
        let id = store.next_id(EntityKind::Product);
        let product = product.into_product(id, seller_id, self.clock.now());
        store.put_product(product.clone());

        tracing::debug!(kind = %EntityKind::Product, id, seller_id, "created record");
        Ok(product)
    }

    fn create_contact(&self, contact: NewContact) -> Result<Contact> {
        let mut store = self.store.write();
        let id = store.next_id(EntityKind::Contact);
        let contact = contact.into_contact(id, self.clock.now());
        store.put_contact(contact.clone());

        tracing::debug!(kind = %EntityKind::Contact, id, product_id = contact.product_id, "created record");
        Ok(contact)
    }

    fn get_contacts_by_product(&self, product_id: ProductId) -> Result<Vec<Contact>> {
        Ok(query::contacts_by_product(&self.store.read(), product_id))
    }
}
