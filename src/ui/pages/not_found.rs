//! 404 page.

use leptos::prelude::*;

/// Full page body for unknown routes.
#[must_use]
pub fn page() -> String {
    view! {
        <div class="py-20 text-center">
            <p class="text-6xl font-bold text-indigo-600">"404"</p>
            <h1 class="mt-4 text-xl font-semibold">"Page not found"</h1>
            <p class="mt-2 text-sm text-slate-500">
                "The page you are looking for does not exist or has moved."
            </p>
            <a
                href="/course-catalog"
                class="mt-6 inline-flex items-center justify-center h-10 px-5 rounded-lg bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700 transition-colors"
                hx-boost="true"
            >
                "Browse Courses"
            </a>
        </div>
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_links_back_to_catalog() {
        let html = page();
        assert!(html.contains("404"));
        assert!(html.contains("/course-catalog"));
    }
}
