//! Breadcrumb trail derived from the request path.

use leptos::prelude::*;

/// One entry in the trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Display label for a known path segment.
fn segment_label(segment: &str) -> String {
    match segment {
        "course-catalog" => "Course Catalog".to_string(),
        "course-detail" => "Course Details".to_string(),
        "video-player" => "Video Player".to_string(),
        "student-dashboard" => "Dashboard".to_string(),
        "instructor-dashboard" => "Instructor Dashboard".to_string(),
        "login-register" => "Sign In".to_string(),
        other => {
            // Title-case unknown segments: "some-page" -> "Some Page".
            other
                .split('-')
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

/// Derive the trail for a path. Always starts at Home; numeric segments
/// (course ids) are skipped.
#[must_use]
pub fn trail(path: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Home".to_string(),
        href: "/course-catalog".to_string(),
    }];

    let mut href = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        href.push('/');
        href.push_str(segment);
        if segment.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        crumbs.push(Crumb {
            label: segment_label(segment),
            href: href.clone(),
        });
    }
    crumbs
}

/// Breadcrumb navigation. Renders nothing for trails of a single entry.
#[component]
pub fn BreadcrumbTrail(
    /// Current request path.
    #[prop(into)]
    path: String,
) -> impl IntoView {
    let crumbs = trail(&path);
    if crumbs.len() <= 1 {
        return None;
    }

    let last = crumbs.len() - 1;
    Some(view! {
        <nav aria-label="Breadcrumb" class="mb-6">
            <ol class="flex items-center gap-1 text-sm text-slate-400">
                {crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        view! {
                            <li class="flex items-center gap-1">
                                {(i > 0)
                                    .then(|| {
                                        view! {
                                            <svg
                                                class="h-4 w-4"
                                                xmlns="http://www.w3.org/2000/svg"
                                                viewBox="0 0 24 24"
                                                fill="none"
                                                stroke="currentColor"
                                                stroke-width="2"
                                            >
                                                <polyline points="9 18 15 12 9 6" />
                                            </svg>
                                        }
                                    })}
                                {if i == last {
                                    view! {
                                        <span class="font-medium text-slate-900">
                                            {crumb.label}
                                        </span>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <a
                                            href=crumb.href
                                            class="hover:text-slate-900 transition-colors"
                                        >
                                            {crumb.label}
                                        </a>
                                    }
                                        .into_any()
                                }}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_trail() {
        let crumbs = trail("/course-catalog");
        let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Course Catalog"]);
    }

    #[test]
    fn test_root_trail_is_home_only() {
        assert_eq!(trail("/").len(), 1);
    }

    #[test]
    fn test_course_id_segment_skipped() {
        let crumbs = trail("/course-detail/3");
        let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Course Details"]);
        assert_eq!(crumbs[1].href, "/course-detail");
    }

    #[test]
    fn test_unknown_segment_title_cased() {
        let crumbs = trail("/some-new-page");
        assert_eq!(crumbs[1].label, "Some New Page");
    }

    #[test]
    fn test_trail_renders_slate_palette() {
        let html = view! { <BreadcrumbTrail path="/course-catalog" /> }.to_html();
        assert!(html.contains("text-slate-400"));
        assert!(html.contains("text-slate-900"));
        assert!(!html.contains("text-textMuted"));
        assert!(!html.contains("text-textPrimary"));
    }
}
