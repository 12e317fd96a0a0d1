//! Model Module
//!
//! Records held by the store and the insert payloads that create them.
//!
//! ## Shape
//! - `User`, `Product`, `Contact`: stored records, ids assigned by the store
//! - `NewUser`, `NewProduct`, `NewContact`: caller-supplied fields only
//! - `ProductWithSeller`: read-side join, never stored
//!
//! All records serialize with camelCase field names. Text fields are stored
//! as given; only role, category and price are checked, by their types.

mod user;
mod product;
mod contact;

pub use user::{NewUser, Role, User, UserId};
pub use product::{Category, NewProduct, Price, Product, ProductId, ProductWithSeller, SellerSummary};
pub use contact::{Contact, ContactId, NewContact};
