//! # TPF Common Library
//!
//! Shared code for the TCAS portfolio submission service:
//! - Member record model and identifier generation
//! - In-memory record store
//! - In-memory media store (binary payload to opaque reference)
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod media;
pub mod member;
pub mod store;

pub use error::{Error, Result};
pub use media::{MediaRef, MediaStore, StoredMedia};
pub use member::{IdGenerator, MemberRecord};
pub use store::MemberStore;
