//! # redis-seeder
//!
//! Populates a running Redis instance with a fixed catalog of sample keys so
//! that a Redis GUI has realistic data to render: strings, hashes, lists,
//! sets, and sorted sets, laid out as a flat tier, a two-level key hierarchy,
//! and a curated `sample:demo:` directory (including one oversized hash that
//! stress-tests hash rendering).
//!
//! The seeder is a one-shot tool: it connects with an ordered list of
//! credential strategies, clears everything under the `sample:` prefix, then
//! writes the whole catalog sequentially. Rerunning it converges on the same
//! final state.
//!
//! ```rust
//! use redis_seeder::{Catalog, SeederConfig};
//!
//! let config = SeederConfig::builder().host("localhost").port(6379).build();
//! let catalog = Catalog::build().unwrap();
//! assert_eq!(catalog.total_keys(), 1012);
//! assert!(config.key_prefix.starts_with("sample"));
//! ```

use thiserror::Error;

pub mod catalog;
pub mod config;
pub mod connect;
pub mod seeder;

pub use catalog::{Catalog, CatalogSection, SampleKey, SampleValue};
pub use config::{AuthStrategy, SeederConfig};
pub use connect::{connect_with_fallback, ConnectAttempt};
pub use seeder::Seeder;

/// Seeder operation errors
#[derive(Error, Debug)]
pub enum SeederError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Could not connect to Redis with any auth strategy")]
    Connection { attempts: Vec<ConnectAttempt> },

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout error")]
    Timeout,
}

/// Result type for seeder operations
pub type SeedResult<T> = Result<T, SeederError>;
