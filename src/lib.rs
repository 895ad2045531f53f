//! EduMarket Pro
//!
//! A server-rendered online course marketplace demo. Every page is produced
//! on the server with Leptos SSR and progressively enhanced with HTMX; all
//! marketplace data is fixture-backed and per-visitor state lives in an
//! in-memory session store.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server rendering full pages and HTMX fragments
//! - **Domain**: catalog, accounts, player, and dashboard fixtures with pure
//!   filter/sort/validation logic
//! - **Sessions**: cookie-keyed in-memory store for auth, wishlist,
//!   enrollments, player state, and notes
//! - **UI**: Leptos SSR components + HTMX attributes, styled with Tailwind
//!
//! # Modules
//!
//! - [`catalog`]: course fixtures, filtering, detail content
//! - [`accounts`]: demo credentials and form validation
//! - [`player`]: video player state machine and notes
//! - [`instructor`] / [`student`]: dashboard fixtures
//! - [`session`]: per-visitor state
//! - [`ui`]: pages, fragments, and shared components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]
#![allow(clippy::too_many_lines)]

pub mod accounts;
pub mod catalog;
pub mod config;
pub mod error;
pub mod instructor;
pub mod player;
pub mod server;
pub mod session;
pub mod student;
pub mod ui;

use std::sync::Arc;

use crate::catalog::Course;
use crate::config::AppConfig;
use crate::session::SessionStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Full course catalog, loaded once at startup.
    pub courses: Arc<Vec<Course>>,
    /// Session store keyed by the `sid` cookie.
    pub sessions: SessionStore,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("courses", &self.courses.len())
            .field("sessions", &self.sessions.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            courses: Arc::new(catalog::mock_courses()),
            sessions: SessionStore::new(),
            config,
        }
    }
}
