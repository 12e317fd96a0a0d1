//! EntityStore
//!
//! Owns the user, product and contact tables.

use crate::model::{Contact, Product, User};

use super::{EntityKind, Table};

/// All persisted records of one storage instance
#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    users: Table<User>,
    products: Table<Product>,
    contacts: Table<Contact>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next primary key for `kind`
    pub fn next_id(&mut self, kind: EntityKind) -> u32 {
        match kind {
            EntityKind::User => self.users.next_id(),
            EntityKind::Product => self.products.next_id(),
            EntityKind::Contact => self.contacts.next_id(),
        }
    }

    // =========================================================================
    // Keyed writes
    // =========================================================================

    pub fn put_user(&mut self, user: User) {
        self.users.put(user.id, user);
    }

    pub fn put_product(&mut self, product: Product) {
        self.products.put(product.id, product);
    }

    pub fn put_contact(&mut self, contact: Contact) {
        self.contacts.put(contact.id, contact);
    }

    // =========================================================================
    // Keyed reads
    // =========================================================================

    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.get(id)
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contact(&self, id: u32) -> Option<&Contact> {
        self.contacts.get(id)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    pub fn users(&self) -> &Table<User> {
        &self.users
    }

    pub fn products(&self) -> &Table<Product> {
        &self.products
    }

    pub fn contacts(&self) -> &Table<Contact> {
        &self.contacts
    }
}
