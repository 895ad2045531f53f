//! Visitor session management.
//!
//! This module provides in-memory session storage for the state the
//! browser app kept in local storage and component state: who is signed
//! in, the preferred language, wishlisted and enrolled courses, the video
//! player controls, and lesson notes. Sessions are identified by UUID,
//! carried in the `sid` cookie.
//!
//! # Architecture
//!
//! - [`Session`]: One visitor's state
//! - [`SessionStore`]: Thread-safe store for all active sessions
//!
//! # Example
//!
//! ```rust
//! use edumarket::accounts::Role;
//! use edumarket::session::SessionStore;
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! session.sign_in(Role::Student, "John Doe", "student@edumarket.com");
//!
//! assert_eq!(session.user().unwrap().name, "John Doe");
//! ```

mod store;

pub use store::{Session, SessionStore, UserProfile};
