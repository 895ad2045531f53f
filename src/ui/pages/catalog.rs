//! Course catalog page: search, filter sidebar, chips, grid.
//!
//! The page is addressable by query string, so chips, clear-all, and load
//! more are plain (boosted) links back to `/course-catalog`. Control changes
//! inside the filter form instead swap just the results fragment via
//! `GET /api/catalog/grid`.

use leptos::prelude::*;

use crate::catalog::{
    CatalogQuery, Course, SortKey, active_chips, has_more,
};
use crate::session::Session;
use crate::ui::components::{
    BadgeVariant, BreadcrumbTrail, ClockIcon, HeartIcon, SearchIcon, StarIcon, UsersIcon, XIcon,
};

/// Filter sidebar category options, in display order.
const CATEGORIES: [(&str, &str); 5] = [
    ("web-development", "Web Development"),
    ("data-science", "Data Science"),
    ("design", "Design"),
    ("marketing", "Marketing"),
    ("photography", "Photography"),
];

const LEVELS: [(&str, &str); 3] = [
    ("beginner", "Beginner"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
];

const RATINGS: [(&str, &str); 3] = [("4.5", "4.5 & up"), ("4.0", "4.0 & up"), ("3.5", "3.5 & up")];

/// Full page body.
#[must_use]
pub fn page(courses: &[Course], query: &CatalogQuery, session: &Session) -> String {
    let results = results_fragment(courses, query, session);
    let search = query.search.clone();
    let sort = query.sort;

    view! {
        <div>
            <BreadcrumbTrail path="/course-catalog" />

            <h1 class="text-2xl font-bold mb-6">"Course Catalog"</h1>

            <form
                id="catalog-form"
                hx-get="/api/catalog/grid"
                hx-target="#catalog-results"
                hx-swap="outerHTML"
                hx-trigger="change, input delay:400ms from:[name='search']"
            >
                <div class="lg:grid lg:grid-cols-[260px_1fr] lg:gap-8">
                    <aside class="mb-6 lg:mb-0">
                        {filter_sidebar(query)}
                    </aside>

                    <div>
                        <div class="flex flex-col sm:flex-row gap-3 mb-4">
                            <div class="relative flex-1">
                                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">
                                    <SearchIcon />
                                </span>
                                <input
                                    type="search"
                                    name="search"
                                    value=search
                                    placeholder="Search courses or instructors..."
                                    class="h-10 w-full rounded-lg border border-slate-300 bg-white pl-9 pr-3 text-sm placeholder:text-slate-400 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500"
                                />
                            </div>
                            <select
                                name="sort"
                                class="h-10 rounded-lg border border-slate-300 bg-white px-3 text-sm text-slate-700 cursor-pointer focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500"
                            >
                                {SortKey::all()
                                    .into_iter()
                                    .map(|key| {
                                        view! {
                                            <option value=key.as_str() selected={key == sort}>
                                                {key.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div inner_html=results></div>
                    </div>
                </div>
            </form>
        </div>
    }
    .to_html()
}

/// Filter sidebar. Checkbox state is rendered from the query so full-page
/// navigations (chip removal, clear-all) stay consistent.
fn filter_sidebar(query: &CatalogQuery) -> impl IntoView {
    let clear_href = format!("/course-catalog?{}", query.cleared().to_query_string());
    let show_clear = query.has_filters();

    let category = query.category.clone();
    let price = query.price.clone();
    let level = query.level.clone();
    let rating = query.rating.clone();

    view! {
        <div class="rounded-xl border border-slate-200 bg-white p-4 space-y-5" hx-boost="true">
            <div class="flex items-center justify-between">
                <h2 class="text-sm font-semibold">"Filters"</h2>
                {show_clear
                    .then(|| {
                        view! {
                            <a href=clear_href.clone() class="text-xs text-indigo-600 hover:underline">
                                "Clear All"
                            </a>
                        }
                    })}
            </div>

            {filter_group(
                "Category",
                "category",
                CATEGORIES.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect(),
                category,
            )}
            {filter_group(
                "Price",
                "price",
                vec![("free".to_string(), "Free".to_string()), ("paid".to_string(), "Paid".to_string())],
                price,
            )}
            {filter_group(
                "Level",
                "level",
                LEVELS.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect(),
                level,
            )}
            {filter_group(
                "Rating",
                "rating",
                RATINGS.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect(),
                rating,
            )}
        </div>
    }
}

fn filter_group(
    title: &'static str,
    name: &'static str,
    options: Vec<(String, String)>,
    selected: Vec<String>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend class="text-xs font-medium uppercase tracking-wide text-slate-500 mb-2">
                {title}
            </legend>
            <div class="space-y-1.5">
                {options
                    .into_iter()
                    .map(|(value, label)| {
                        let checked = selected.contains(&value);
                        view! {
                            <label class="flex items-center gap-2 text-sm text-slate-700 cursor-pointer">
                                <input
                                    type="checkbox"
                                    name=name
                                    value=value
                                    checked=checked
                                    class="rounded border-slate-300 text-indigo-600"
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}

/// Results fragment: chips, count, grid, load-more. Swapped on every filter
/// change.
#[must_use]
pub fn results_fragment(courses: &[Course], query: &CatalogQuery, session: &Session) -> String {
    let results = crate::catalog::apply(courses, query);
    let count = results.len();
    let chips = chips_row(query);
    let more = has_more(query.page);
    let mut next = query.clone();
    next.page += 1;
    let more_href = format!("/course-catalog?{}", next.to_query_string());

    let count_line = if count == 1 {
        "1 course found".to_string()
    } else {
        format!("{count} courses found")
    };

    let cards = results
        .iter()
        .map(|course| course_card(course, session.is_wishlisted(course.id)))
        .collect_view();

    view! {
        <div id="catalog-results" hx-boost="true">
            {chips}

            <p class="text-sm text-slate-500 mb-4">{count_line}</p>

            {if count == 0 {
                view! {
                    <div class="rounded-xl border border-dashed border-slate-300 bg-white py-16 text-center">
                        <p class="text-lg font-medium text-slate-700">"No courses found"</p>
                        <p class="text-sm text-slate-500 mt-1">
                            "Try adjusting your search or removing some filters."
                        </p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="grid gap-6 sm:grid-cols-2 xl:grid-cols-3">{cards}</div>
                }
                    .into_any()
            }}

            {(count > 0)
                .then(|| {
                    if more {
                        view! {
                            <div class="mt-8 text-center">
                                <a
                                    href=more_href.clone()
                                    class="inline-flex items-center justify-center h-10 px-6 rounded-lg border border-slate-300 bg-white text-sm font-medium text-slate-700 hover:bg-slate-50 transition-colors"
                                >
                                    "Load More Courses"
                                </a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="mt-8 text-center text-sm text-slate-500">
                                "You've reached the end of the catalog."
                            </p>
                        }
                            .into_any()
                    }
                })}
        </div>
    }
    .to_html()
}

/// Active-filter chip row.
fn chips_row(query: &CatalogQuery) -> impl IntoView {
    let chips = active_chips(query);
    if chips.is_empty() {
        return None;
    }

    Some(
        view! {
            <div class="flex flex-wrap items-center gap-2 mb-4">
                {chips
                    .into_iter()
                    .map(|chip| {
                        let href = format!(
                            "/course-catalog?{}",
                            query.without(chip.kind, &chip.value).to_query_string()
                        );
                        view! {
                            <a
                                href=href
                                class="inline-flex items-center gap-1 rounded-full bg-indigo-50 border border-indigo-200 px-3 py-1 text-xs text-indigo-800 hover:bg-indigo-100 transition-colors"
                            >
                                <span class="font-medium">{chip.label}</span>
                                ": "
                                {chip.display}
                                <XIcon class="h-3 w-3" />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        },
    )
}

/// One course card in the grid.
fn course_card(course: &Course, wishlisted: bool) -> impl IntoView {
    let detail_href = format!("/course-detail/{}", course.id);
    let rating = format!("{:.1}", course.rating);
    let reviews = format!("({})", course.review_count);
    let enrolled = format!("{} students", course.enrollment_count);
    let duration = format!("{}h", course.duration_hours);
    let price = course.price_label();
    let original = course.original_price.map(|p| format!("${p:.2}"));
    let heart = wishlist_button(course.id, wishlisted);
    let level_classes = format!(
        "absolute left-2 top-2 rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
        BadgeVariant::from(course.level).classes()
    );

    view! {
        <article class="group rounded-xl border border-slate-200 bg-white shadow-sm overflow-hidden flex flex-col">
            <div class="relative">
                <a href=detail_href.clone()>
                    <img
                        src=course.thumbnail
                        alt=course.title
                        class="aspect-video w-full object-cover group-hover:opacity-90 transition-opacity"
                        loading="lazy"
                    />
                </a>
                <span class=level_classes>{course.level.label()}</span>
                <div class="absolute right-2 top-2" inner_html=heart></div>
            </div>

            <div class="flex flex-col flex-1 p-4">
                <a href=detail_href class="font-semibold text-slate-900 hover:text-indigo-600 transition-colors line-clamp-2">
                    {course.title}
                </a>
                <p class="mt-1 text-sm text-slate-500">{course.instructor.name}</p>

                <div class="mt-2 flex items-center gap-1 text-sm">
                    <StarIcon class="text-amber-400" />
                    <span class="font-medium">{rating}</span>
                    <span class="text-slate-400">{reviews}</span>
                </div>

                <div class="mt-2 flex items-center gap-4 text-xs text-slate-500">
                    <span class="inline-flex items-center gap-1">
                        <UsersIcon class="h-3.5 w-3.5" />
                        {enrolled}
                    </span>
                    <span class="inline-flex items-center gap-1">
                        <ClockIcon class="h-3.5 w-3.5" />
                        {duration}
                    </span>
                </div>

                <div class="mt-auto pt-3 flex items-baseline gap-2">
                    <span class="text-lg font-bold text-slate-900">{price}</span>
                    {original
                        .map(|o| {
                            view! { <span class="text-sm text-slate-400 line-through">{o}</span> }
                        })}
                </div>
            </div>
        </article>
    }
}

/// Wishlist heart button. Also returned standalone by
/// `POST /api/wishlist/{id}`.
#[must_use]
pub fn wishlist_button(course_id: u32, wishlisted: bool) -> String {
    let post = format!("/api/wishlist/{course_id}");
    let classes = if wishlisted {
        "flex h-8 w-8 items-center justify-center rounded-full bg-white/90 text-red-500 shadow-sm hover:bg-white transition-colors"
    } else {
        "flex h-8 w-8 items-center justify-center rounded-full bg-white/90 text-slate-400 shadow-sm hover:text-red-500 hover:bg-white transition-colors"
    };
    let label = if wishlisted {
        "Remove from wishlist"
    } else {
        "Add to wishlist"
    };

    view! {
        <button
            type="button"
            class=classes
            aria-label=label
            hx-post=post
            hx-target="this"
            hx-swap="outerHTML"
        >
            <HeartIcon filled=wishlisted />
        </button>
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_courses;
    use crate::session::SessionStore;

    #[test]
    fn test_page_renders_all_courses() {
        let store = SessionStore::new();
        let session = store.create();
        let html = page(&mock_courses(), &CatalogQuery::default(), &session);
        assert!(html.contains("Complete React Developer Course 2024"));
        assert!(html.contains("6 courses found"));
        assert!(html.contains("Load More Courses"));
    }

    #[test]
    fn test_filtered_results_show_chip() {
        let store = SessionStore::new();
        let session = store.create();
        let mut query = CatalogQuery::default();
        query.category = vec!["data-science".to_string()];

        let html = results_fragment(&mock_courses(), &query, &session);
        assert!(html.contains("1 course found"));
        assert!(html.contains("Category"));
        assert!(html.contains("Data-science") || html.contains("Data Science"));
    }

    #[test]
    fn test_no_results_state() {
        let store = SessionStore::new();
        let session = store.create();
        let mut query = CatalogQuery::default();
        query.search = "quantum basket weaving".to_string();

        let html = results_fragment(&mock_courses(), &query, &session);
        assert!(html.contains("No courses found"));
    }

    #[test]
    fn test_end_of_catalog_notice_on_last_page() {
        let store = SessionStore::new();
        let session = store.create();
        let mut query = CatalogQuery::default();
        query.page = 2;

        let html = results_fragment(&mock_courses(), &query, &session);
        assert!(html.contains("end of the catalog"));
        assert!(!html.contains("Load More Courses"));
    }

    #[test]
    fn test_level_badge_uses_variant_classes() {
        let store = SessionStore::new();
        let session = store.create();
        let mut query = CatalogQuery::default();
        query.level = vec!["advanced".to_string()];

        let html = results_fragment(&mock_courses(), &query, &session);
        assert!(html.contains(BadgeVariant::Error.classes()));
        assert!(!html.contains(BadgeVariant::Success.classes()));
    }

    #[test]
    fn test_wishlist_button_states() {
        assert!(wishlist_button(1, true).contains("Remove from wishlist"));
        assert!(wishlist_button(1, false).contains("Add to wishlist"));
    }
}
