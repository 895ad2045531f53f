//! Video player page: control bar and notes fragments driven by the
//! session's player state machine.

use leptos::prelude::*;

use crate::catalog::{LessonType, curriculum};
use crate::player::{NotePad, Playback, PlayerState, SPEED_OPTIONS, format_time};
use crate::session::Session;
use crate::ui::components::{
    BreadcrumbTrail, Button, CheckIcon, LockIcon, PauseIcon, PlayIcon, TrashIcon,
};

/// Full page body.
#[must_use]
pub fn page(session: &Session) -> String {
    let controls = controls_fragment(&session.player());
    let notes = notes_fragment(&session.notes());
    let playlist = playlist_panel();

    view! {
        <div>
            <BreadcrumbTrail path="/video-player" />

            <div class="lg:grid lg:grid-cols-[1fr_360px] lg:gap-8">
                <div>
                    <div class="rounded-xl overflow-hidden bg-slate-900">
                        <div
                            class="relative aspect-video flex items-center justify-center"
                            hx-post="/api/player/activity"
                            hx-trigger="mousemove throttle:1s"
                            hx-swap="none"
                        >
                            <img
                                src="https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=1280&h=720&fit=crop"
                                alt="Lesson video"
                                class="absolute inset-0 h-full w-full object-cover opacity-60"
                            />
                            <button
                                type="button"
                                class="relative z-10 flex h-16 w-16 items-center justify-center rounded-full bg-white/20 text-white backdrop-blur hover:bg-white/30 transition-colors"
                                aria-label="Toggle playback"
                                hx-post="/api/player/toggle-play"
                                hx-target="#player-controls"
                                hx-swap="outerHTML"
                            >
                                <PlayIcon class="h-7 w-7" />
                            </button>
                        </div>
                        <div inner_html=controls></div>
                    </div>

                    <div class="mt-4">
                        <h1 class="text-xl font-bold">"Introduction to Advanced Patterns"</h1>
                        <p class="text-sm text-slate-500">
                            "Advanced React Patterns · Sarah Johnson"
                        </p>
                    </div>

                    <div class="mt-6" inner_html=notes></div>
                </div>

                <aside class="mt-8 lg:mt-0">{playlist}</aside>
            </div>
        </div>
    }
    .to_html()
}

/// Control bar fragment, re-rendered after every player event.
#[must_use]
pub fn controls_fragment(state: &PlayerState) -> String {
    let visible = if state.controls_visible() {
        "opacity-100"
    } else {
        "opacity-0 pointer-events-none"
    };
    let container = format!(
        "bg-slate-900 px-4 py-3 space-y-2 transition-opacity duration-300 {visible}"
    );
    let time_display = format!(
        "{} / {}",
        format_time(state.current_time),
        format_time(state.duration)
    );
    let progress = format!("{:.0}", state.current_time);
    let max = format!("{:.0}", state.duration.max(1.0));
    let volume = format!("{:.2}", state.effective_volume());
    let speed = state.speed;
    let playing = state.playback == Playback::Playing;
    let buffering = state.playback == Playback::Buffering;
    let mute_label = if state.muted { "Unmute" } else { "Mute" };
    let fullscreen_class = toggle_class(state.fullscreen);
    let pip_class = toggle_class(state.pip);

    view! {
        <div id="player-controls" class=container>
            <input
                type="range"
                name="time"
                min="0"
                max=max
                value=progress
                class="w-full accent-indigo-500 cursor-pointer"
                aria-label="Seek"
                hx-post="/api/player/seek"
                hx-trigger="change"
                hx-target="#player-controls"
                hx-swap="outerHTML"
            />

            <div class="flex items-center gap-3 text-white">
                <button
                    type="button"
                    class="hover:text-indigo-400 transition-colors"
                    aria-label="Skip back 10 seconds"
                    hx-post="/api/player/skip-back"
                    hx-target="#player-controls"
                    hx-swap="outerHTML"
                >
                    "-10s"
                </button>
                <button
                    type="button"
                    class="flex h-9 w-9 items-center justify-center rounded-full bg-indigo-600 hover:bg-indigo-500 transition-colors"
                    aria-label="Toggle playback"
                    hx-post="/api/player/toggle-play"
                    hx-target="#player-controls"
                    hx-swap="outerHTML"
                >
                    {if playing {
                        view! { <PauseIcon /> }.into_any()
                    } else {
                        view! { <PlayIcon /> }.into_any()
                    }}
                </button>
                <button
                    type="button"
                    class="hover:text-indigo-400 transition-colors"
                    aria-label="Skip forward 10 seconds"
                    hx-post="/api/player/skip-forward"
                    hx-target="#player-controls"
                    hx-swap="outerHTML"
                >
                    "+10s"
                </button>

                <span class="text-xs tabular-nums text-slate-300">{time_display}</span>

                {buffering
                    .then(|| {
                        view! { <span class="text-xs text-amber-400">"Buffering..."</span> }
                    })}

                <div class="ml-auto flex items-center gap-3">
                    <button
                        type="button"
                        class="text-xs hover:text-indigo-400 transition-colors"
                        hx-post="/api/player/toggle-mute"
                        hx-target="#player-controls"
                        hx-swap="outerHTML"
                    >
                        {mute_label}
                    </button>
                    <input
                        type="range"
                        name="volume"
                        min="0"
                        max="1"
                        step="0.05"
                        value=volume
                        class="w-20 accent-indigo-500 cursor-pointer"
                        aria-label="Volume"
                        hx-post="/api/player/volume"
                        hx-trigger="change"
                        hx-target="#player-controls"
                        hx-swap="outerHTML"
                    />

                    <select
                        name="speed"
                        class="rounded bg-slate-800 px-1.5 py-1 text-xs cursor-pointer"
                        aria-label="Playback speed"
                        hx-post="/api/player/speed"
                        hx-trigger="change"
                        hx-target="#player-controls"
                        hx-swap="outerHTML"
                    >
                        {SPEED_OPTIONS
                            .into_iter()
                            .map(|option| {
                                let label = format!("{option}x");
                                let value = format!("{option}");
                                let selected = (option - speed).abs() < f32::EPSILON;
                                view! {
                                    <option value=value selected=selected>{label}</option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <button
                        type="button"
                        class=pip_class
                        aria-label="Picture in picture"
                        hx-post="/api/player/toggle-pip"
                        hx-target="#player-controls"
                        hx-swap="outerHTML"
                    >
                        "PiP"
                    </button>
                    <button
                        type="button"
                        class=fullscreen_class
                        aria-label="Fullscreen"
                        hx-post="/api/player/toggle-fullscreen"
                        hx-target="#player-controls"
                        hx-swap="outerHTML"
                    >
                        "Full"
                    </button>
                </div>
            </div>
        </div>
    }
    .to_html()
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "text-xs text-indigo-400 font-medium"
    } else {
        "text-xs hover:text-indigo-400 transition-colors"
    }
}

/// Notes panel fragment, re-rendered after add/delete.
#[must_use]
pub fn notes_fragment(pad: &NotePad) -> String {
    let heading = format!("Lesson Notes ({})", pad.len());
    let notes: Vec<_> = pad.notes().to_vec();

    view! {
        <div id="notes-panel" class="rounded-xl border border-slate-200 bg-white p-4">
            <h2 class="text-sm font-semibold mb-3">{heading}</h2>

            <form
                hx-post="/api/notes"
                hx-target="#notes-panel"
                hx-swap="outerHTML"
                class="flex gap-2 mb-4"
            >
                <input
                    type="text"
                    name="content"
                    placeholder="Add a note at the current time..."
                    class="h-9 flex-1 rounded-lg border border-slate-300 px-3 text-sm placeholder:text-slate-400 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500"
                />
                <Button button_type="submit">"Add"</Button>
            </form>

            {if notes.is_empty() {
                view! {
                    <p class="text-sm text-slate-400 text-center py-4">
                        "No notes yet. Capture a thought while you watch."
                    </p>
                }
                    .into_any()
            } else {
                view! {
                    <ul class="space-y-2">
                        {notes
                            .into_iter()
                            .map(|note| {
                                let stamp = format_time(f64::from(note.timestamp));
                                let seek_vals = format!(r#"{{"time": {}}}"#, note.timestamp);
                                let delete_url = format!("/api/notes/{}", note.id);
                                view! {
                                    <li class="flex items-start gap-2 rounded-lg bg-slate-50 p-3">
                                        <button
                                            type="button"
                                            class="shrink-0 rounded bg-indigo-100 px-1.5 py-0.5 text-xs font-medium text-indigo-700 hover:bg-indigo-200 transition-colors tabular-nums"
                                            hx-post="/api/player/seek"
                                            hx-vals=seek_vals
                                            hx-target="#player-controls"
                                            hx-swap="outerHTML"
                                        >
                                            {stamp}
                                        </button>
                                        <p class="flex-1 text-sm text-slate-700">{note.content}</p>
                                        <button
                                            type="button"
                                            class="shrink-0 text-slate-400 hover:text-red-500 transition-colors"
                                            aria-label="Delete note"
                                            hx-delete=delete_url
                                            hx-target="#notes-panel"
                                            hx-swap="outerHTML"
                                        >
                                            <TrashIcon class="h-3.5 w-3.5" />
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
    .to_html()
}

/// Lesson playlist sidebar built from the curriculum fixture.
fn playlist_panel() -> impl IntoView {
    let sections = curriculum();

    view! {
        <div class="rounded-xl border border-slate-200 bg-white overflow-hidden">
            <h2 class="border-b border-slate-200 px-4 py-3 text-sm font-semibold">
                "Course Content"
            </h2>
            {sections
                .into_iter()
                .enumerate()
                .map(|(section_index, section)| {
                    view! {
                        <details open={section_index == 0}>
                            <summary class="flex items-center justify-between px-4 py-2.5 text-sm font-medium cursor-pointer select-none bg-slate-50">
                                {section.title}
                            </summary>
                            <ul class="divide-y divide-slate-100">
                                {section
                                    .lessons
                                    .into_iter()
                                    .enumerate()
                                    .map(|(lesson_index, lesson)| {
                                        let is_current = section_index == 0 && lesson_index == 0;
                                        let classes = if is_current {
                                            "flex items-center gap-2 px-4 py-2.5 text-sm bg-indigo-50 text-indigo-700"
                                        } else {
                                            "flex items-center gap-2 px-4 py-2.5 text-sm text-slate-600"
                                        };
                                        let duration = format!("{}m", lesson.duration);
                                        view! {
                                            <li class=classes>
                                                {if lesson.is_completed {
                                                    view! { <CheckIcon class="shrink-0 text-emerald-500" /> }
                                                        .into_any()
                                                } else if lesson.is_locked {
                                                    view! { <LockIcon class="shrink-0 text-slate-300" /> }
                                                        .into_any()
                                                } else {
                                                    view! { <PlayIcon class="shrink-0" /> }.into_any()
                                                }}
                                                <span class="flex-1 line-clamp-1">{lesson.title}</span>
                                                {(lesson.lesson_type == LessonType::Quiz)
                                                    .then(|| {
                                                        view! {
                                                            <span class="rounded bg-slate-100 px-1 text-xs text-slate-500">
                                                                "Quiz"
                                                            </span>
                                                        }
                                                    })}
                                                <span class="text-xs text-slate-400">{duration}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </details>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerEvent;
    use crate::session::SessionStore;

    #[test]
    fn test_page_renders_playlist_and_seeded_notes() {
        let store = SessionStore::new();
        let session = store.create();
        let html = page(&session);
        assert!(html.contains("Course Content"));
        assert!(html.contains("Lesson Notes (" ));
        assert!(html.contains("dependency array"));
    }

    #[test]
    fn test_controls_reflect_playing_state() {
        let mut state = PlayerState::default();
        state.apply(PlayerEvent::LoadedMetadata { duration: 600.0 });

        let paused = controls_fragment(&state);
        assert!(paused.contains("0:00"));
        assert!(paused.contains("10:00"));

        state.apply(PlayerEvent::TogglePlay);
        state.apply(PlayerEvent::Waiting);
        let buffering = controls_fragment(&state);
        assert!(buffering.contains("Buffering"));
    }

    #[test]
    fn test_notes_fragment_empty_state() {
        let pad = NotePad::new();
        let html = notes_fragment(&pad);
        assert!(html.contains("No notes yet"));
    }
}
