//! # agrimarket
//!
//! Data-access core of a produce marketplace connecting farmers and traders:
//! - Typed records for users, product listings and buyer inquiries
//! - In-memory entity store with per-kind id sequences
//! - Query layer for filtered, seller-joined, newest-first listings
//! - A `Storage` trait so handlers stay independent of the backend
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 HTTP Handlers (not in crate)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Arc<dyn Storage>
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                Storage Facade (MemStorage)                   │
//! │              (one RwLock around the store)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │ writes                  │ reads
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ EntityStore │◄─────────│ Query Layer │
//!   │ (3 tables)  │          │ filter/join │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod clock;

pub mod model;
pub mod entity;
pub mod query;
pub mod storage;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MarketError, Result};
pub use config::Config;
pub use query::ProductFilter;
pub use storage::{MemStorage, Storage};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of agrimarket
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
