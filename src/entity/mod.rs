//! Entity Store Module
//!
//! In-memory tables for users, products and contacts.
//!
//! ## Responsibilities
//! - Hold every record for the lifetime of the process
//! - Hand out primary keys from one counter per kind
//! - Keyed insert and lookup
//!
//! ## Data Structure Choice
//! One `BTreeMap<u32, T>` per kind:
//! - Iteration follows id order, which is insertion order since ids only grow
//! - Stable sorts over a scan therefore keep insertion order for ties
//!
//! The store itself has no lock. `MemStorage` owns it behind a single
//! `RwLock` so that id allocation plus insert, and every filter/join read,
//! happen under one guard.

mod table;
mod store;

pub use table::Table;
pub use store::EntityStore;

use std::fmt;

/// The three record kinds, each with its own id sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Product,
    Contact,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => f.write_str("user"),
            EntityKind::Product => f.write_str("product"),
            EntityKind::Contact => f.write_str("contact"),
        }
    }
}
