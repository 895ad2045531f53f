//! HTTP server: page routes, HTMX fragment endpoints, and session plumbing.
//!
//! Pages render the full document shell; `/api` endpoints return the
//! fragment strings the pages target with `hx-*` attributes. Per-visitor
//! state is keyed by the `sid` cookie and resolved lazily, so the first
//! request of a visit creates the session.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{Form, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, post},
};
use axum_extra::extract::Query;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::accounts::{
    self, LoginForm, RegisterForm, Role, validate_login, validate_register,
};
use crate::catalog::{CatalogQuery, find_course};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::instructor::StudentQuery;
use crate::player::PlayerEvent;
use crate::session::Session;
use crate::ui::pages::login::AuthTab;
use crate::ui::{html_shell, pages};

/// Cookie carrying the session id.
const SESSION_COOKIE: &str = "sid";

/// Interval between idle-session sweeps.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config));

    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            ticker.tick().await;
            let removed = sessions.cleanup_expired();
            if removed > 0 {
                info!(name: "session.cleanup", removed, "Expired sessions removed");
            }
        }
    });

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Router construction, separated so integration tests can mount the app
/// without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login-register", get(login_page))
        .route("/course-catalog", get(catalog_page))
        .route(
            "/course-detail",
            get(|| async { Redirect::to("/course-detail/1") }),
        )
        .route("/course-detail/{id}", get(course_detail_page))
        .route("/student-dashboard", get(student_dashboard_page))
        .route("/instructor-dashboard", get(instructor_dashboard_page))
        .route("/video-player", get(video_player_page))
        .route("/api/login", post(api_login))
        .route("/api/register", post(api_register))
        .route("/api/register/complete", post(api_register_complete))
        .route("/api/password-strength", post(api_password_strength))
        .route("/api/auth/{tab}", get(api_auth_tab))
        .route("/api/language", post(api_language))
        .route("/api/logout", post(api_logout))
        .route("/api/catalog/grid", get(api_catalog_grid))
        .route("/api/wishlist/{id}", post(api_wishlist))
        .route("/api/course/{id}/tab/{tab}", get(api_course_tab))
        .route("/api/enroll/{id}", post(api_enroll))
        .route("/api/students", get(api_students))
        .route("/api/player/{event}", post(api_player))
        .route("/api/notes", post(api_add_note))
        .route("/api/notes/{id}", delete(api_delete_note))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the visitor's session from the `sid` cookie, creating one (and
/// setting the cookie) when absent or expired.
fn resolve_session(state: &AppState, jar: CookieJar) -> (CookieJar, Session) {
    if let Some(cookie) = jar.get(SESSION_COOKIE)
        && let Some(session) = state.sessions.get(cookie.value())
    {
        return (jar, session);
    }
    let session = state.sessions.create();
    info!(name: "session.created", session_id = %session.id(), "Session created");
    let cookie = Cookie::build((SESSION_COOKIE, session.id().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), session)
}

async fn simulate_latency(config: &AppConfig) {
    let ms = config.demo.simulated_latency_ms;
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

fn hx_redirect(path: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("HX-Redirect", HeaderValue::from_static(path));
    headers
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

async fn home() -> Redirect {
    Redirect::to("/course-catalog")
}

async fn login_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    let body = pages::login::page(&session.language());
    let html = html_shell("Sign In", "/login-register", session.user().as_ref(), &body);
    (jar, Html(html)).into_response()
}

async fn catalog_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CatalogQuery>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    let body = pages::catalog::page(&state.courses, &query, &session);
    let html = html_shell(
        "Course Catalog",
        "/course-catalog",
        session.user().as_ref(),
        &body,
    );
    (jar, Html(html)).into_response()
}

async fn course_detail_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    let user = session.user();
    let Some(course) = find_course(&state.courses, id) else {
        let html = html_shell("Page Not Found", "/", user.as_ref(), &pages::not_found::page());
        return (StatusCode::NOT_FOUND, jar, Html(html)).into_response();
    };
    let body = pages::course_detail::page(&state.courses, course, &session);
    let path = format!("/course-detail/{id}");
    let html = html_shell(&course.title, &path, user.as_ref(), &body);
    (jar, Html(html)).into_response()
}

async fn student_dashboard_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    match session.user() {
        Some(user) if user.role == Role::Student => {
            let body = pages::student_dashboard::page(&user);
            let html = html_shell("Dashboard", "/student-dashboard", Some(&user), &body);
            (jar, Html(html)).into_response()
        }
        Some(user) => (jar, Redirect::to(user.role.dashboard_path())).into_response(),
        None => (jar, Redirect::to("/login-register")).into_response(),
    }
}

async fn instructor_dashboard_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    match session.user() {
        Some(user) if user.role == Role::Instructor => {
            let body = pages::instructor_dashboard::page(&user);
            let html = html_shell(
                "Instructor Dashboard",
                "/instructor-dashboard",
                Some(&user),
                &body,
            );
            (jar, Html(html)).into_response()
        }
        Some(user) => (jar, Redirect::to(user.role.dashboard_path())).into_response(),
        None => (jar, Redirect::to("/login-register")).into_response(),
    }
}

async fn video_player_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    let body = pages::video_player::page(&session);
    let html = html_shell(
        "Video Player",
        "/video-player",
        session.user().as_ref(),
        &body,
    );
    (jar, Html(html)).into_response()
}

async fn not_found_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    let html = html_shell(
        "Page Not Found",
        "/",
        session.user().as_ref(),
        &pages::not_found::page(),
    );
    (StatusCode::NOT_FOUND, jar, Html(html)).into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth API
// ─────────────────────────────────────────────────────────────────────────────

async fn api_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);

    let errors = validate_login(&form);
    if !errors.is_empty() {
        return (jar, Html(pages::login::login_form(&form, &errors, None))).into_response();
    }

    simulate_latency(&state.config).await;

    match accounts::authenticate(&form.email, &form.password) {
        Some(user) => {
            session.sign_in(user.role, user.display_name, user.email);
            info!(
                name: "auth.login",
                email = %user.email,
                role = %user.role.slug(),
                "User signed in"
            );
            (jar, hx_redirect(user.role.dashboard_path()), Html(String::new())).into_response()
        }
        None => {
            let banner = accounts::invalid_credentials_message();
            (jar, Html(pages::login::login_form(&form, &[], Some(&banner)))).into_response()
        }
    }
}

async fn api_register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);

    let errors = validate_register(&form);
    if !errors.is_empty() {
        return (jar, Html(pages::login::register_form(&form, &errors))).into_response();
    }

    simulate_latency(&state.config).await;

    if form.user_type == "instructor" {
        return (
            jar,
            Html(pages::login::verification_step(&form.name, &form.email)),
        )
            .into_response();
    }

    session.sign_in(Role::Student, form.name.clone(), form.email.clone());
    info!(name: "auth.register", email = %form.email, role = "student", "Account created");
    (jar, hx_redirect("/student-dashboard"), Html(String::new())).into_response()
}

#[derive(Debug, Deserialize)]
struct RegisterCompleteForm {
    name: String,
    email: String,
    #[serde(default)]
    expertise: String,
    #[serde(default)]
    skip: Option<String>,
}

async fn api_register_complete(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterCompleteForm>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    session.sign_in(Role::Instructor, form.name.clone(), form.email.clone());
    info!(
        name: "auth.register",
        email = %form.email,
        role = "instructor",
        skipped_verification = form.skip.is_some(),
        expertise_given = !form.expertise.trim().is_empty(),
        "Account created"
    );
    (jar, hx_redirect("/instructor-dashboard"), Html(String::new())).into_response()
}

#[derive(Debug, Deserialize)]
struct PasswordInput {
    #[serde(default)]
    password: String,
}

async fn api_password_strength(Form(form): Form<PasswordInput>) -> Html<String> {
    Html(pages::login::strength_meter(&form.password))
}

async fn api_auth_tab(Path(tab): Path<String>) -> Result<Html<String>, AppError> {
    let tab = match tab.as_str() {
        "login" => AuthTab::Login,
        "register" => AuthTab::Register,
        other => return Err(AppError::BadRequest(format!("unknown auth tab: {other}"))),
    };
    Ok(Html(pages::login::auth_card(tab)))
}

#[derive(Debug, Deserialize)]
struct LanguageForm {
    language: String,
}

async fn api_language(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LanguageForm>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    if pages::login::LANGUAGES.iter().any(|(code, _)| *code == form.language) {
        session.set_language(&form.language);
    }
    (jar, StatusCode::NO_CONTENT).into_response()
}

async fn api_logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    session.sign_out();
    info!(name: "auth.logout", session_id = %session.id(), "User signed out");
    (jar, Redirect::to("/course-catalog")).into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog and course API
// ─────────────────────────────────────────────────────────────────────────────

async fn api_catalog_grid(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CatalogQuery>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    let html = pages::catalog::results_fragment(&state.courses, &query, &session);
    (jar, Html(html)).into_response()
}

async fn api_wishlist(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Result<Response, AppError> {
    let (jar, session) = resolve_session(&state, jar);
    find_course(&state.courses, id).ok_or(AppError::CourseNotFound(id))?;
    let wishlisted = session.toggle_wishlist(id);
    info!(name: "wishlist.toggled", course_id = id, wishlisted, "Wishlist updated");
    Ok((jar, Html(pages::catalog::wishlist_button(id, wishlisted))).into_response())
}

async fn api_course_tab(
    State(state): State<AppState>,
    Path((id, tab)): Path<(u32, String)>,
) -> Result<Html<String>, AppError> {
    let course = find_course(&state.courses, id).ok_or(AppError::CourseNotFound(id))?;
    Ok(Html(pages::course_detail::tab_fragment(course, &tab)))
}

async fn api_enroll(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Result<Response, AppError> {
    let (jar, session) = resolve_session(&state, jar);
    let course = find_course(&state.courses, id).ok_or(AppError::CourseNotFound(id))?;

    simulate_latency(&state.config).await;

    if session.enroll(id) {
        info!(name: "enroll.completed", course_id = id, "Enrollment completed");
    }
    Ok((jar, Html(pages::course_detail::enrollment_sidebar(course, true))).into_response())
}

async fn api_students(
    axum::extract::Query(query): axum::extract::Query<StudentQuery>,
) -> Html<String> {
    Html(pages::instructor_dashboard::students_fragment(&query))
}

// ─────────────────────────────────────────────────────────────────────────────
// Player and notes API
// ─────────────────────────────────────────────────────────────────────────────

/// Optional payload fields for player events. Each event reads the field it
/// needs and ignores the rest.
#[derive(Debug, Default, Deserialize)]
struct PlayerForm {
    #[serde(default)]
    time: Option<f64>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    volume: Option<f32>,
    #[serde(default)]
    speed: Option<f32>,
}

fn parse_player_event(event: &str, form: &PlayerForm) -> Result<PlayerEvent, AppError> {
    let missing = |field: &str| AppError::BadRequest(format!("{event} requires {field}"));
    Ok(match event {
        "toggle-play" => PlayerEvent::TogglePlay,
        "loaded-metadata" => PlayerEvent::LoadedMetadata {
            duration: form.duration.ok_or_else(|| missing("duration"))?,
        },
        "time-update" => PlayerEvent::TimeUpdate {
            time: form.time.ok_or_else(|| missing("time"))?,
        },
        "waiting" => PlayerEvent::Waiting,
        "can-play" => PlayerEvent::CanPlay,
        "ended" => PlayerEvent::Ended,
        "seek" => PlayerEvent::Seek {
            time: form.time.ok_or_else(|| missing("time"))?,
        },
        "skip-forward" => PlayerEvent::SkipForward,
        "skip-back" => PlayerEvent::SkipBack,
        "volume" => PlayerEvent::SetVolume {
            volume: form.volume.ok_or_else(|| missing("volume"))?,
        },
        "toggle-mute" => PlayerEvent::ToggleMute,
        "speed" => PlayerEvent::SetSpeed {
            speed: form.speed.ok_or_else(|| missing("speed"))?,
        },
        "toggle-fullscreen" => PlayerEvent::ToggleFullscreen,
        "toggle-pip" => PlayerEvent::TogglePip,
        "activity" => PlayerEvent::PointerActivity,
        other => return Err(AppError::BadRequest(format!("unknown player event: {other}"))),
    })
}

async fn api_player(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(event): Path<String>,
    Form(form): Form<PlayerForm>,
) -> Result<Response, AppError> {
    let (jar, session) = resolve_session(&state, jar);
    let event = parse_player_event(&event, &form)?;
    let player = session.apply_player_event(event);
    Ok((jar, Html(pages::video_player::controls_fragment(&player))).into_response())
}

#[derive(Debug, Deserialize)]
struct NoteForm {
    #[serde(default)]
    content: String,
}

async fn api_add_note(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<NoteForm>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    session.add_note(&form.content);
    (jar, Html(pages::video_player::notes_fragment(&session.notes()))).into_response()
}

async fn api_delete_note(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u64>,
) -> Response {
    let (jar, session) = resolve_session(&state, jar);
    session.delete_note(id);
    (jar, Html(pages::video_player::notes_fragment(&session.notes()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_event_requires_fields() {
        let form = PlayerForm::default();
        assert!(parse_player_event("seek", &form).is_err());
        assert!(parse_player_event("toggle-play", &form).is_ok());
        assert!(parse_player_event("made-up", &form).is_err());

        let form = PlayerForm {
            time: Some(42.0),
            ..PlayerForm::default()
        };
        assert!(matches!(
            parse_player_event("seek", &form),
            Ok(PlayerEvent::Seek { time }) if (time - 42.0).abs() < f64::EPSILON
        ));
    }
}
