//! # Nonprofit Registry
//!
//! Ordered organization records for a nonprofit wishlist platform.
//!
//! Registered organizations are kept in a singly-linked [`RecordList`],
//! looked up by contact email or name, and projected into
//! [`NonprofitCard`]s for the browse page. The list is persisted as a JSON
//! array through a [`RecordStore`], a string key-value store in the manner
//! of browser local storage.
//!
//! ## Architecture
//!
//! - **List**: generic singly-linked container with append, prepend,
//!   lookup, deletion and ordered materialization
//! - **Directory**: the organization list, keyed by email and name
//! - **Store**: in-memory and file-backed persistence
//! - **Context**: directory, store and settings, built once at startup
//!
//! ## Example
//!
//! ```
//! use nonprofit_registry::{MemoryStore, RegistrationForm, RegistryConfig, RegistryContext};
//!
//! let mut registry = RegistryContext::open(RegistryConfig::new(), MemoryStore::new())?;
//! registry.register(RegistrationForm {
//!     organization_name: "Hope Education Center".into(),
//!     email: "hope@example.com".into(),
//!     city: "San Francisco".into(),
//!     state: "CA".into(),
//!     ..Default::default()
//! })?;
//!
//! let cards = registry.browse();
//! assert_eq!(cards[0].location, "San Francisco, CA");
//! assert_eq!(cards[0].category, "General");
//! # Ok::<(), nonprofit_registry::RegistryError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod directory;
pub mod error;
pub mod list;
pub mod organization;
pub mod store;

// Re-export main types
pub use config::{RegistryConfig, DEFAULT_STORAGE_KEY};
pub use context::RegistryContext;
pub use directory::OrganizationDirectory;
pub use error::{RegistryError, Result};
pub use list::RecordList;
pub use organization::{
    default_mission, format_location, NonprofitCard, Organization, RegistrationForm,
    DEFAULT_CATEGORY,
};
pub use store::{load_directory, save_directory, FileStore, MemoryStore, RecordStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
