//! UI layer: document shell plus Leptos SSR components.
//!
//! Pages are rendered server-side to HTML strings and wrapped in
//! [`html_shell`]; interactivity comes from HTMX fragments swapped into the
//! page. Tab bars travel with their panels via out-of-band swaps.
//!
//! # Structure
//!
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`pages`]: One module per page bundle

pub mod components;
pub mod pages;

use crate::session::UserProfile;

/// One header navigation link.
fn nav_link(href: &str, label: &str, current_path: &str) -> String {
    let classes = if href == current_path {
        "px-3 py-2 rounded-lg text-sm font-medium text-indigo-600 bg-indigo-50"
    } else {
        "px-3 py-2 rounded-lg text-sm text-slate-600 hover:text-slate-900 hover:bg-slate-100 transition-all"
    };
    format!(r#"<a href="{href}" class="{classes}">{label}</a>"#)
}

/// Role-based navigation plus the account area, as raw header HTML.
fn header_nav(current_path: &str, user: Option<&UserProfile>) -> String {
    match user {
        Some(profile) => {
            let mut links = String::new();
            links.push_str(&nav_link(
                profile.role.dashboard_path(),
                "Dashboard",
                current_path,
            ));
            links.push_str(&nav_link("/course-catalog", "Browse Courses", current_path));
            if profile.role == crate::accounts::Role::Student {
                links.push_str(&nav_link("/video-player", "My Learning", current_path));
            }
            format!(
                r#"<nav class="hidden md:flex items-center gap-1" hx-boost="true">{links}</nav>
                <div class="flex items-center gap-3">
                    <span class="text-sm text-slate-600 hidden sm:inline">{name}</span>
                    <form method="post" action="/api/logout">
                        <button type="submit" class="text-sm text-slate-500 hover:text-slate-900 transition-colors">Sign Out</button>
                    </form>
                </div>"#,
                name = profile.name,
            )
        }
        None => format!(
            r#"<nav class="hidden md:flex items-center gap-1" hx-boost="true">{catalog}</nav>
            <a href="/login-register" class="inline-flex items-center justify-center h-9 px-4 rounded-lg bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700 transition-colors">Sign In</a>"#,
            catalog = nav_link("/course-catalog", "Browse Courses", current_path),
        ),
    }
}

/// Generate the HTML document shell around a rendered page body.
#[must_use]
pub fn html_shell(
    title: &str,
    current_path: &str,
    user: Option<&UserProfile>,
    content: &str,
) -> String {
    let nav = header_nav(current_path, user);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Discover and learn from thousands of online courses on EduMarket Pro">
    <title>{title} - EduMarket Pro</title>

    <!-- HTMX and Alpine (local) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script defer src="/static/vendor/alpine.min.js"></script>

    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-slate-50 text-slate-900 antialiased">
    <div id="app-shell" class="flex flex-col min-h-screen">
        <header class="sticky top-0 z-50 w-full border-b border-slate-200 bg-white/95 backdrop-blur">
            <div class="container mx-auto flex h-16 items-center justify-between px-4 max-w-7xl">
                <a href="/" class="flex items-center gap-2 font-semibold hover:opacity-80 transition-opacity">
                    <svg class="h-6 w-6 text-indigo-600" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/>
                        <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>
                    </svg>
                    <span class="text-lg">EduMarket Pro</span>
                </a>
                <div class="flex items-center gap-4">
                    {nav}
                </div>
            </div>
        </header>

        <main id="app" class="flex-1 container mx-auto px-4 py-6 max-w-7xl">
            {content}
        </main>

        <footer class="border-t border-slate-200 bg-white py-4">
            <div class="container mx-auto px-4 max-w-7xl">
                <p class="text-xs text-slate-500 text-center">
                    EduMarket Pro. Learn anything, anywhere.
                </p>
            </div>
        </footer>
    </div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::Role;

    #[test]
    fn test_shell_shows_sign_in_when_anonymous() {
        let html = html_shell("Course Catalog", "/course-catalog", None, "<p>body</p>");
        assert!(html.contains("Sign In"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("Course Catalog - EduMarket Pro"));
    }

    #[test]
    fn test_shell_shows_user_when_signed_in() {
        let profile = UserProfile {
            role: Role::Student,
            name: "John Doe".to_string(),
            email: "student@edumarket.com".to_string(),
        };
        let html = html_shell("Dashboard", "/student-dashboard", Some(&profile), "");
        assert!(html.contains("John Doe"));
        assert!(html.contains("Sign Out"));
        assert!(html.contains("/student-dashboard"));
    }
}
