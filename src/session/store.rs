//! Visitor session and session storage.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::accounts::Role;
use crate::player::{NotePad, PlayerEvent, PlayerState};

/// Default session timeout (30 minutes).
const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// The signed-in user, mirroring the `userRole`/`userName`/`userEmail`
/// local-storage keys of the original app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub role: Role,
    pub name: String,
    pub email: String,
}

/// A single visitor session.
///
/// Sessions hold all per-visitor mutable state and hand out clones of it;
/// interior mutability keeps handlers free of `&mut` plumbing.
#[derive(Debug)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// Signed-in user, if any.
    user: RwLock<Option<UserProfile>>,
    /// Preferred UI language code.
    language: RwLock<String>,
    /// Wishlisted course ids.
    wishlist: RwLock<HashSet<u32>>,
    /// Enrolled course ids.
    enrolled: RwLock<HashSet<u32>>,
    /// Video player control state.
    player: RwLock<PlayerState>,
    /// Lesson notes.
    notes: RwLock<NotePad>,
    /// Session creation time.
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Session {
    /// Create a new session with the given ID.
    fn new(id: String) -> Self {
        let now = Utc::now();
        // Courses 2 and 5 start wishlisted, matching the catalog fixtures.
        let wishlist = HashSet::from([2, 5]);
        Self {
            inner: Arc::new(SessionInner {
                id,
                user: RwLock::new(None),
                language: RwLock::new("en".to_string()),
                wishlist: RwLock::new(wishlist),
                enrolled: RwLock::new(HashSet::new()),
                player: RwLock::new(PlayerState::default()),
                notes: RwLock::new(NotePad::seeded()),
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Record a successful login.
    pub fn sign_in(&self, role: Role, name: impl Into<String>, email: impl Into<String>) {
        let mut guard = self.inner.user.write().unwrap();
        *guard = Some(UserProfile {
            role,
            name: name.into(),
            email: email.into(),
        });
        drop(guard);
        self.touch();
    }

    /// Clear the signed-in user.
    pub fn sign_out(&self) {
        let mut guard = self.inner.user.write().unwrap();
        *guard = None;
        drop(guard);
        self.touch();
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.inner.user.read().unwrap().clone()
    }

    /// Set the preferred language code.
    pub fn set_language(&self, code: impl Into<String>) {
        let mut guard = self.inner.language.write().unwrap();
        *guard = code.into();
        drop(guard);
        self.touch();
    }

    /// Preferred language code (defaults to `en`).
    #[must_use]
    pub fn language(&self) -> String {
        self.inner.language.read().unwrap().clone()
    }

    /// Toggle a course on the wishlist. Returns whether it is wishlisted
    /// afterwards.
    pub fn toggle_wishlist(&self, course_id: u32) -> bool {
        let mut guard = self.inner.wishlist.write().unwrap();
        let added = guard.insert(course_id);
        if !added {
            guard.remove(&course_id);
        }
        drop(guard);
        self.touch();
        added
    }

    /// Whether a course is wishlisted.
    #[must_use]
    pub fn is_wishlisted(&self, course_id: u32) -> bool {
        self.inner.wishlist.read().unwrap().contains(&course_id)
    }

    /// Enroll in a course. Returns false if already enrolled.
    pub fn enroll(&self, course_id: u32) -> bool {
        let mut guard = self.inner.enrolled.write().unwrap();
        let added = guard.insert(course_id);
        drop(guard);
        self.touch();
        added
    }

    /// Whether the visitor is enrolled in a course.
    #[must_use]
    pub fn is_enrolled(&self, course_id: u32) -> bool {
        self.inner.enrolled.read().unwrap().contains(&course_id)
    }

    /// Enrolled course ids.
    #[must_use]
    pub fn enrollments(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.inner.enrolled.read().unwrap().iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Feed one event to the player state machine and return the new state.
    pub fn apply_player_event(&self, event: PlayerEvent) -> PlayerState {
        let mut guard = self.inner.player.write().unwrap();
        guard.apply(event);
        let state = guard.clone();
        drop(guard);
        self.touch();
        state
    }

    /// Current player control state.
    #[must_use]
    pub fn player(&self) -> PlayerState {
        self.inner.player.read().unwrap().clone()
    }

    /// Add a lesson note at the player's current position. Returns false
    /// for blank content.
    pub fn add_note(&self, content: &str) -> bool {
        let current_time = self.inner.player.read().unwrap().current_time;
        let mut guard = self.inner.notes.write().unwrap();
        let added = guard.add(current_time, content).is_some();
        drop(guard);
        self.touch();
        added
    }

    /// Delete a lesson note by id.
    pub fn delete_note(&self, id: u64) -> bool {
        let mut guard = self.inner.notes.write().unwrap();
        let removed = guard.delete(id);
        drop(guard);
        self.touch();
        removed
    }

    /// Snapshot of the note pad.
    #[must_use]
    pub fn notes(&self) -> NotePad {
        self.inner.notes.read().unwrap().clone()
    }

    /// Update the last activity timestamp.
    fn touch(&self) {
        let mut guard = self.inner.last_activity.write().unwrap();
        *guard = Utc::now();
    }

    /// Check if the session has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_with_timeout(DEFAULT_SESSION_TIMEOUT)
    }

    /// Check if the session has expired with a custom timeout.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        let now = Utc::now();
        if let Ok(duration) = (now - last).to_std() {
            duration > timeout
        } else {
            // Negative duration means clock skew or "last" is in future.
            false
        }
    }
}

/// Thread-safe store for sessions.
///
/// Provides methods for creating, retrieving, and cleaning up sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug)]
struct SessionStoreInner {
    sessions: RwLock<HashMap<String, Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a new session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> Session {
        let id = Uuid::new_v4().to_string();
        self.create_with_id(id)
    }

    /// Create a new session with a specific ID.
    #[must_use]
    pub fn create_with_id(&self, id: impl Into<String>) -> Session {
        let id = id.into();
        let session = Session::new(id.clone());
        let mut guard = self.inner.sessions.write().unwrap();
        guard.insert(id, session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        let guard = self.inner.sessions.read().unwrap();
        guard.get(id).cloned()
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        let mut guard = self.inner.sessions.write().unwrap();
        guard.remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.sessions.read().unwrap().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all expired sessions.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired(&self) -> usize {
        self.cleanup_expired_with_timeout(DEFAULT_SESSION_TIMEOUT)
    }

    /// Remove sessions that have been inactive longer than the timeout.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.sessions.write().unwrap();
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerEvent;

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::new("test-123".to_string());
        assert!(session.user().is_none());

        session.sign_in(Role::Student, "John Doe", "student@edumarket.com");
        let user = session.user().unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.name, "John Doe");

        session.sign_out();
        assert!(session.user().is_none());
    }

    #[test]
    fn test_wishlist_toggle() {
        let session = Session::new("test".to_string());
        // Fixture seed
        assert!(session.is_wishlisted(2));
        assert!(session.is_wishlisted(5));
        assert!(!session.is_wishlisted(1));

        assert!(session.toggle_wishlist(1));
        assert!(session.is_wishlisted(1));
        assert!(!session.toggle_wishlist(1));
        assert!(!session.is_wishlisted(1));
    }

    #[test]
    fn test_enrollment_is_idempotent() {
        let session = Session::new("test".to_string());
        assert!(session.enroll(3));
        assert!(!session.enroll(3));
        assert_eq!(session.enrollments(), vec![3]);
    }

    #[test]
    fn test_player_event_round_trip() {
        let session = Session::new("test".to_string());
        session.apply_player_event(PlayerEvent::LoadedMetadata { duration: 100.0 });
        let state = session.apply_player_event(PlayerEvent::Seek { time: 150.0 });
        assert_eq!(state.current_time, 100.0);
    }

    #[test]
    fn test_notes_follow_player_position() {
        let session = Session::new("test".to_string());
        session.apply_player_event(PlayerEvent::LoadedMetadata { duration: 600.0 });
        session.apply_player_event(PlayerEvent::Seek { time: 90.5 });

        assert!(session.add_note("remember this"));
        assert!(!session.add_note("   "));

        let notes = session.notes();
        assert!(notes.notes().iter().any(|n| n.timestamp == 90));
    }

    #[test]
    fn test_session_store() {
        let store = SessionStore::new();

        assert!(store.is_empty());

        let session = store.create();
        assert_eq!(store.len(), 1);

        let retrieved = store.get(session.id()).unwrap();
        assert_eq!(retrieved.id(), session.id());

        store.remove(session.id());
        assert!(store.is_empty());
    }

    #[test]
    fn test_cleanup_keeps_active_sessions() {
        let store = SessionStore::new();
        let _session = store.create();
        assert_eq!(store.cleanup_expired_with_timeout(Duration::from_secs(60)), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.cleanup_expired_with_timeout(Duration::ZERO), 1);
        assert!(store.is_empty());
    }
}
