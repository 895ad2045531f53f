//! End-to-end route tests against the in-process router.

use std::sync::Arc;

use axum_test::{TestServer, TestServerConfig};
use edumarket::AppState;
use edumarket::config::AppConfig;
use edumarket::server::build_router;

/// Test server with cookies enabled and the demo latency disabled.
fn server() -> TestServer {
    let config = AppConfig::load_from_args(["edumarket", "--simulated-latency-ms", "0"])
        .expect("config should load");
    let state = AppState::new(Arc::new(config));
    let test_config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(build_router(state), test_config).expect("server should start")
}

#[tokio::test]
async fn test_home_redirects_to_catalog() {
    let server = server();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/course-catalog");
}

#[tokio::test]
async fn test_catalog_page_renders_all_courses() {
    let server = server();
    let response = server.get("/course-catalog").await;
    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("EduMarket Pro"));
    assert!(text.contains("Complete React Developer Course 2024"));
    assert!(text.contains("6 courses found"));
}

#[tokio::test]
async fn test_catalog_grid_filters_by_category() {
    let server = server();
    let response = server
        .get("/api/catalog/grid")
        .add_query_param("category", "data-science")
        .await;
    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("1 course found"));
    assert!(text.contains("Python for Data Science and Machine Learning"));
    assert!(!text.contains("Photography Fundamentals"));
}

#[tokio::test]
async fn test_login_redirects_to_student_dashboard() {
    let server = server();
    let response = server
        .post("/api/login")
        .form(&[
            ("email", "student@edumarket.com"),
            ("password", "student123"),
        ])
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("HX-Redirect"), "/student-dashboard");

    let dashboard = server.get("/student-dashboard").await;
    dashboard.assert_status_ok();
    let text = dashboard.text();
    assert!(text.contains("Welcome back, "));
    assert!(text.contains("John Doe"));
}

#[tokio::test]
async fn test_login_wrong_password_rerenders_form() {
    let server = server();
    let response = server
        .post("/api/login")
        .form(&[("email", "student@edumarket.com"), ("password", "nope1234")])
        .await;
    response.assert_status_ok();
    assert!(response.maybe_header("HX-Redirect").is_none());
    assert!(response.text().contains("Invalid credentials"));

    // No user was set, so the dashboard still bounces to the auth page.
    let dashboard = server.get("/student-dashboard").await;
    assert_eq!(dashboard.status_code(), 303);
    assert_eq!(dashboard.header("location"), "/login-register");
}

#[tokio::test]
async fn test_student_registration_signs_in_and_redirects() {
    let server = server();
    let response = server
        .post("/api/register")
        .form(&[
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("password", "Abcdef1!"),
            ("confirm_password", "Abcdef1!"),
            ("user_type", "student"),
            ("accept_terms", "true"),
        ])
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("HX-Redirect"), "/student-dashboard");

    let dashboard = server.get("/student-dashboard").await;
    dashboard.assert_status_ok();
    assert!(dashboard.text().contains("Jane Doe"));
}

#[tokio::test]
async fn test_registration_validation_rerenders_form() {
    let server = server();
    let response = server
        .post("/api/register")
        .form(&[
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("password", "Abcdef1!"),
            ("confirm_password", "different1!"),
            ("user_type", "student"),
            ("accept_terms", "true"),
        ])
        .await;
    response.assert_status_ok();
    assert!(response.maybe_header("HX-Redirect").is_none());
    assert!(response.text().contains("Passwords do not match"));

    // Nothing was signed in.
    let dashboard = server.get("/student-dashboard").await;
    assert_eq!(dashboard.status_code(), 303);
    assert_eq!(dashboard.header("location"), "/login-register");
}

#[tokio::test]
async fn test_instructor_registration_verification_flow() {
    let server = server();
    let response = server
        .post("/api/register")
        .form(&[
            ("name", "Alex Rivera"),
            ("email", "alex@example.com"),
            ("password", "Abcdef1!"),
            ("confirm_password", "Abcdef1!"),
            ("user_type", "instructor"),
            ("accept_terms", "true"),
        ])
        .await;
    response.assert_status_ok();
    assert!(response.maybe_header("HX-Redirect").is_none());
    assert!(response.text().contains("Instructor verification"));

    let complete = server
        .post("/api/register/complete")
        .form(&[
            ("name", "Alex Rivera"),
            ("email", "alex@example.com"),
            ("skip", "true"),
        ])
        .await;
    complete.assert_status_ok();
    assert_eq!(complete.header("HX-Redirect"), "/instructor-dashboard");

    let dashboard = server.get("/instructor-dashboard").await;
    dashboard.assert_status_ok();
    assert!(dashboard.text().contains("Alex Rivera"));
}

#[tokio::test]
async fn test_language_preference_persists() {
    let server = server();
    let response = server
        .post("/api/language")
        .form(&[("language", "es")])
        .await;
    assert_eq!(response.status_code(), 204);

    let page = server.get("/login-register").await;
    page.assert_status_ok();
    assert!(page.text().contains(r#"value="es" selected"#));

    // Unknown codes are ignored and the stored preference stands.
    let ignored = server
        .post("/api/language")
        .form(&[("language", "xx")])
        .await;
    assert_eq!(ignored.status_code(), 204);
    let page = server.get("/login-register").await;
    assert!(page.text().contains(r#"value="es" selected"#));
}

#[tokio::test]
async fn test_instructor_login_gates_dashboards() {
    let server = server();
    server
        .post("/api/login")
        .form(&[
            ("email", "instructor@edumarket.com"),
            ("password", "instructor123"),
        ])
        .await;

    let dashboard = server.get("/instructor-dashboard").await;
    dashboard.assert_status_ok();
    assert!(dashboard.text().contains("Sarah Wilson"));

    // Instructors get bounced off the student dashboard to their own.
    let other = server.get("/student-dashboard").await;
    assert_eq!(other.status_code(), 303);
    assert_eq!(other.header("location"), "/instructor-dashboard");
}

#[tokio::test]
async fn test_wishlist_toggles() {
    let server = server();

    let added = server.post("/api/wishlist/1").await;
    added.assert_status_ok();
    assert!(added.text().contains("Remove from wishlist"));

    let removed = server.post("/api/wishlist/1").await;
    assert!(removed.text().contains("Add to wishlist"));

    let missing = server.post("/api/wishlist/999").await;
    assert_eq!(missing.status_code(), 404);
}

#[tokio::test]
async fn test_enroll_flips_sidebar() {
    let server = server();
    let response = server.post("/api/enroll/1").await;
    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("Enrolled"));
    assert!(text.contains("Start Learning"));

    let missing = server.post("/api/enroll/999").await;
    assert_eq!(missing.status_code(), 404);
}

#[tokio::test]
async fn test_course_detail_and_tabs() {
    let server = server();
    let page = server.get("/course-detail/1").await;
    page.assert_status_ok();
    assert!(page.text().contains("Complete React Developer Course 2024"));

    let tab = server.get("/api/course/1/tab/curriculum").await;
    tab.assert_status_ok();
    assert!(tab.text().contains("course-tab-bar"));

    let missing = server.get("/course-detail/999").await;
    assert_eq!(missing.status_code(), 404);
}

#[tokio::test]
async fn test_player_seek_clamps_to_duration() {
    let server = server();
    server
        .post("/api/player/loaded-metadata")
        .form(&[("duration", "600")])
        .await;

    let response = server
        .post("/api/player/seek")
        .form(&[("time", "9999")])
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("10:00 / 10:00"));

    let bad = server
        .post("/api/player/seek")
        .form(&[("volume", "1")])
        .await;
    assert_eq!(bad.status_code(), 400);
}

#[tokio::test]
async fn test_notes_add_and_delete() {
    let server = server();

    let added = server
        .post("/api/notes")
        .form(&[("content", "Props drive re-renders")])
        .await;
    added.assert_status_ok();
    let text = added.text();
    assert!(text.contains("Props drive re-renders"));
    assert!(text.contains("Lesson Notes (4)"));

    let removed = server.delete("/api/notes/1").await;
    removed.assert_status_ok();
    assert!(!removed.text().contains("Hooks can only be called"));
    assert!(removed.text().contains("Lesson Notes (3)"));
}

#[tokio::test]
async fn test_students_fragment_search() {
    let server = server();
    let response = server
        .get("/api/students")
        .add_query_param("search", "emily")
        .add_query_param("sort", "name")
        .await;
    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("Emily Rodriguez"));
    assert!(!text.contains("Michael Chen"));
}

#[tokio::test]
async fn test_unknown_route_returns_404_page() {
    let server = server();
    let response = server.get("/definitely-not-a-page").await;
    assert_eq!(response.status_code(), 404);
    assert!(response.text().contains("Page not found"));
}
