//! Video player control state.
//!
//! The player wraps a native media element; this module is the control
//! state machine behind the control bar. Transitions come either from user
//! input (clicks, keyboard shortcuts) or from media element callbacks
//! (`loadedmetadata`, `timeupdate`, `waiting`, `canplay`, `ended`), and the
//! control bar is re-rendered from the resulting state.

use chrono::{DateTime, Duration, Utc};

/// Fixed playback speed options.
pub const SPEED_OPTIONS: [f32; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Arrow-key seek step, in seconds.
pub const SKIP_SECONDS: f64 = 10.0;

/// Controls hide this long after the last pointer activity while playing.
pub const CONTROLS_HIDE_AFTER_SECS: i64 = 3;

/// Playback portion of the state, driven by user input and media events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Playback {
    #[default]
    Paused,
    Playing,
    Buffering,
}

/// Events fed to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Space bar / play button.
    TogglePlay,
    /// Media element reported its duration.
    LoadedMetadata { duration: f64 },
    /// Media element playback position tick.
    TimeUpdate { time: f64 },
    /// Media element stalled waiting for data.
    Waiting,
    /// Media element can resume.
    CanPlay,
    /// Playback reached the end.
    Ended,
    /// Progress bar scrub or note-timestamp jump.
    Seek { time: f64 },
    /// Right arrow.
    SkipForward,
    /// Left arrow.
    SkipBack,
    /// Volume slider.
    SetVolume { volume: f32 },
    /// `m` key / mute button.
    ToggleMute,
    /// Speed menu selection. Unknown speeds are ignored.
    SetSpeed { speed: f32 },
    /// `f` key / fullscreen button.
    ToggleFullscreen,
    /// Picture-in-picture button.
    TogglePip,
    /// Mouse movement over the player surface.
    PointerActivity,
}

/// Complete control state for one player.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub playback: Playback,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f32,
    pub muted: bool,
    pub speed: f32,
    pub fullscreen: bool,
    pub pip: bool,
    /// Volume level before the last mute, restored on unmute.
    restore_volume: f32,
    last_activity: DateTime<Utc>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playback: Playback::Paused,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            speed: 1.0,
            fullscreen: false,
            pip: false,
            restore_volume: 1.0,
            last_activity: Utc::now(),
        }
    }
}

impl PlayerState {
    /// Apply one event, using the current wall clock for activity tracking.
    pub fn apply(&mut self, event: PlayerEvent) {
        self.apply_at(event, Utc::now());
    }

    /// Apply one event at an explicit instant.
    pub fn apply_at(&mut self, event: PlayerEvent, now: DateTime<Utc>) {
        match event {
            PlayerEvent::TogglePlay => {
                self.playback = match self.playback {
                    Playback::Paused => Playback::Playing,
                    Playback::Playing | Playback::Buffering => Playback::Paused,
                };
                self.last_activity = now;
            }
            PlayerEvent::LoadedMetadata { duration } => {
                self.duration = duration.max(0.0);
                self.current_time = self.current_time.clamp(0.0, self.duration);
            }
            PlayerEvent::TimeUpdate { time } => {
                self.current_time = time.clamp(0.0, self.duration);
            }
            PlayerEvent::Waiting => {
                if self.playback == Playback::Playing {
                    self.playback = Playback::Buffering;
                }
            }
            PlayerEvent::CanPlay => {
                if self.playback == Playback::Buffering {
                    self.playback = Playback::Playing;
                }
            }
            PlayerEvent::Ended => {
                self.playback = Playback::Paused;
                self.current_time = self.duration;
            }
            PlayerEvent::Seek { time } => {
                self.current_time = time.clamp(0.0, self.duration);
                self.last_activity = now;
            }
            PlayerEvent::SkipForward => {
                self.current_time = (self.current_time + SKIP_SECONDS).clamp(0.0, self.duration);
                self.last_activity = now;
            }
            PlayerEvent::SkipBack => {
                self.current_time = (self.current_time - SKIP_SECONDS).clamp(0.0, self.duration);
                self.last_activity = now;
            }
            PlayerEvent::SetVolume { volume } => {
                let volume = volume.clamp(0.0, 1.0);
                if volume > 0.0 {
                    self.restore_volume = volume;
                }
                self.volume = volume;
                self.muted = volume == 0.0;
                self.last_activity = now;
            }
            PlayerEvent::ToggleMute => {
                if self.muted {
                    self.muted = false;
                    if self.volume == 0.0 {
                        self.volume = self.restore_volume;
                    }
                } else {
                    self.restore_volume = if self.volume > 0.0 { self.volume } else { 1.0 };
                    self.muted = true;
                }
                self.last_activity = now;
            }
            PlayerEvent::SetSpeed { speed } => {
                if SPEED_OPTIONS.contains(&speed) {
                    self.speed = speed;
                }
                self.last_activity = now;
            }
            PlayerEvent::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                self.last_activity = now;
            }
            PlayerEvent::TogglePip => {
                self.pip = !self.pip;
                self.last_activity = now;
            }
            PlayerEvent::PointerActivity => {
                self.last_activity = now;
            }
        }
    }

    /// Whether the control bar is visible right now.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible_at(Utc::now())
    }

    /// Controls stay up while paused or buffering; while playing they hide
    /// after the inactivity window.
    #[must_use]
    pub fn controls_visible_at(&self, now: DateTime<Utc>) -> bool {
        if self.playback != Playback::Playing {
            return true;
        }
        now - self.last_activity < Duration::seconds(CONTROLS_HIDE_AFTER_SECS)
    }

    /// Effective audio level (0 while muted).
    #[must_use]
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }
}

/// Format seconds as `m:ss` (or `h:mm:ss` past an hour).
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// A timestamped lesson note.
#[derive(Debug, Clone)]
pub struct Note {
    pub id: u64,
    /// Position in the video, in whole seconds.
    pub timestamp: u32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Per-lesson note pad, kept sorted by timestamp.
#[derive(Debug, Clone)]
pub struct NotePad {
    next_id: u64,
    notes: Vec<Note>,
}

impl Default for NotePad {
    fn default() -> Self {
        Self::seeded()
    }
}

impl NotePad {
    /// Empty pad.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            notes: Vec::new(),
        }
    }

    /// Pad pre-filled with the demo notes.
    #[must_use]
    pub fn seeded() -> Self {
        let mut pad = Self::new();
        pad.add(125.0, "Important concept: Hooks can only be called at the top level");
        pad.add(245.0, "Remember to use the dependency array to prevent infinite loops");
        pad.add(380.0, "Custom hooks should start with 'use' prefix by convention");
        pad
    }

    /// Add a note at the current playback position. Empty content (after
    /// trimming) is rejected.
    pub fn add(&mut self, current_time: f64, content: &str) -> Option<&Note> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        let note = Note {
            id: self.next_id,
            timestamp: current_time.max(0.0).floor() as u32,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.notes.push(note);
        self.notes.sort_by_key(|n| n.timestamp);
        let id = self.next_id - 1;
        self.notes.iter().find(|n| n.id == id)
    }

    /// Delete a note by id. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }

    /// All notes, sorted by timestamp.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> PlayerState {
        let mut state = PlayerState::default();
        state.apply(PlayerEvent::LoadedMetadata { duration });
        state
    }

    #[test]
    fn test_toggle_play() {
        let mut state = loaded(600.0);
        assert_eq!(state.playback, Playback::Paused);
        state.apply(PlayerEvent::TogglePlay);
        assert_eq!(state.playback, Playback::Playing);
        state.apply(PlayerEvent::TogglePlay);
        assert_eq!(state.playback, Playback::Paused);
    }

    #[test]
    fn test_seek_clamps_to_bounds() {
        let mut state = loaded(300.0);
        state.apply(PlayerEvent::Seek { time: -5.0 });
        assert_eq!(state.current_time, 0.0);
        state.apply(PlayerEvent::Seek { time: 500.0 });
        assert_eq!(state.current_time, 300.0);
        state.apply(PlayerEvent::Seek { time: 120.0 });
        assert_eq!(state.current_time, 120.0);
    }

    #[test]
    fn test_seek_with_unknown_duration() {
        let mut state = PlayerState::default();
        state.apply(PlayerEvent::Seek { time: 42.0 });
        assert_eq!(state.current_time, 0.0);
    }

    #[test]
    fn test_skip_clamps() {
        let mut state = loaded(30.0);
        state.apply(PlayerEvent::SkipBack);
        assert_eq!(state.current_time, 0.0);
        state.apply(PlayerEvent::Seek { time: 25.0 });
        state.apply(PlayerEvent::SkipForward);
        assert_eq!(state.current_time, 30.0);
    }

    #[test]
    fn test_buffering_transitions() {
        let mut state = loaded(100.0);
        state.apply(PlayerEvent::Waiting);
        assert_eq!(state.playback, Playback::Paused); // not playing, no-op

        state.apply(PlayerEvent::TogglePlay);
        state.apply(PlayerEvent::Waiting);
        assert_eq!(state.playback, Playback::Buffering);
        state.apply(PlayerEvent::CanPlay);
        assert_eq!(state.playback, Playback::Playing);
    }

    #[test]
    fn test_ended_resets_to_paused_at_duration() {
        let mut state = loaded(100.0);
        state.apply(PlayerEvent::TogglePlay);
        state.apply(PlayerEvent::TimeUpdate { time: 99.0 });
        state.apply(PlayerEvent::Ended);
        assert_eq!(state.playback, Playback::Paused);
        assert_eq!(state.current_time, 100.0);
    }

    #[test]
    fn test_volume_zero_mutes_and_unmute_restores() {
        let mut state = loaded(100.0);
        state.apply(PlayerEvent::SetVolume { volume: 0.6 });
        assert!(!state.muted);

        state.apply(PlayerEvent::SetVolume { volume: 0.0 });
        assert!(state.muted);
        assert_eq!(state.effective_volume(), 0.0);

        state.apply(PlayerEvent::ToggleMute);
        assert!(!state.muted);
        assert_eq!(state.volume, 0.6);
    }

    #[test]
    fn test_unknown_speed_ignored() {
        let mut state = loaded(100.0);
        state.apply(PlayerEvent::SetSpeed { speed: 1.5 });
        assert_eq!(state.speed, 1.5);
        state.apply(PlayerEvent::SetSpeed { speed: 3.0 });
        assert_eq!(state.speed, 1.5);
    }

    #[test]
    fn test_controls_auto_hide_while_playing() {
        let now = Utc::now();
        let mut state = loaded(100.0);
        state.apply_at(PlayerEvent::TogglePlay, now);

        assert!(state.controls_visible_at(now + Duration::seconds(2)));
        assert!(!state.controls_visible_at(now + Duration::seconds(4)));

        // Pointer movement brings them back.
        state.apply_at(PlayerEvent::PointerActivity, now + Duration::seconds(5));
        assert!(state.controls_visible_at(now + Duration::seconds(6)));

        // Paused players always show controls.
        state.apply_at(PlayerEvent::TogglePlay, now + Duration::seconds(5));
        assert!(state.controls_visible_at(now + Duration::seconds(60)));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3725.0), "1:02:05");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn test_notepad_add_sorted_and_delete() {
        let mut pad = NotePad::new();
        assert!(pad.add(100.0, "   ").is_none());

        pad.add(200.9, "second");
        pad.add(50.0, "first");
        let stamps: Vec<u32> = pad.notes().iter().map(|n| n.timestamp).collect();
        assert_eq!(stamps, vec![50, 200]);

        let id = pad.notes()[0].id;
        assert!(pad.delete(id));
        assert!(!pad.delete(id));
        assert_eq!(pad.len(), 1);
    }

    #[test]
    fn test_seeded_notes() {
        let pad = NotePad::seeded();
        assert_eq!(pad.len(), 3);
        assert_eq!(pad.notes()[0].timestamp, 125);
    }
}
