//! Course detail page: hero, tab fragments, enrollment sidebar.

use leptos::prelude::*;

use crate::catalog::{
    Course, CurriculumSection, LessonType, curriculum, includes, learning_outcomes,
    rating_distribution, related_courses, requirements, reviews, total_lessons, total_minutes,
};
use crate::session::Session;
use crate::ui::components::{
    Avatar, BreadcrumbTrail, CheckIcon, ClockIcon, LockIcon, PlayIcon, StarIcon, UsersIcon, XIcon,
};

/// Detail page tabs, in display order.
pub const TABS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("curriculum", "Curriculum"),
    ("reviews", "Reviews"),
    ("instructor", "Instructor"),
];

/// Full page body.
#[must_use]
pub fn page(courses: &[Course], course: &Course, session: &Session) -> String {
    let path = format!("/course-detail/{}", course.id);
    let hero = hero_section(course);
    let tabs = tab_bar(course.id, "overview", false);
    let overview = tab_fragment(course, "overview");
    let sidebar = enrollment_sidebar(course, session.is_enrolled(course.id));
    let related = related_rail(courses, course);

    view! {
        <div>
            <BreadcrumbTrail path=path />

            <div class="lg:grid lg:grid-cols-[1fr_340px] lg:gap-8">
                <div>
                    {hero}
                    <div class="mt-6">
                        {tabs}
                        <div id="course-tab-panel" class="pt-6" inner_html=overview></div>
                    </div>
                </div>

                <aside class="mt-8 lg:mt-0">
                    <div inner_html=sidebar></div>
                </aside>
            </div>

            {related}
        </div>
    }
    .to_html()
}

fn hero_section(course: &Course) -> impl IntoView {
    let rating = format!("{:.1}", course.rating);
    let reviews_label = format!("{} reviews", course.review_count);
    let students = format!("{} students", course.enrollment_count);
    let duration = format!("{} hours", course.duration_hours);

    view! {
        <div class="rounded-xl border border-slate-200 bg-white overflow-hidden">
            <img src=course.thumbnail alt=course.title class="aspect-video w-full object-cover" />
            <div class="p-6">
                <h1 class="text-2xl font-bold">{course.title}</h1>
                <div class="mt-3 flex flex-wrap items-center gap-4 text-sm text-slate-600">
                    <span class="inline-flex items-center gap-1">
                        <StarIcon class="text-amber-400" />
                        <span class="font-medium text-slate-900">{rating}</span>
                        <span class="text-slate-400">{reviews_label}</span>
                    </span>
                    <span class="inline-flex items-center gap-1">
                        <UsersIcon />
                        {students}
                    </span>
                    <span class="inline-flex items-center gap-1">
                        <ClockIcon />
                        {duration}
                    </span>
                    <span class="rounded-full bg-slate-100 px-2.5 py-0.5 text-xs font-semibold">
                        {course.level.label()}
                    </span>
                </div>
                <div class="mt-4 flex items-center gap-3">
                    <img
                        src=course.instructor.avatar
                        alt=course.instructor.name
                        class="h-10 w-10 rounded-full object-cover"
                    />
                    <div>
                        <p class="text-sm font-medium">{course.instructor.name}</p>
                        <p class="text-xs text-slate-500">{course.instructor.title}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Tab bar. Clicking a tab fetches the corresponding fragment; the bar is
/// swapped out-of-band along with the panel so the active style follows.
fn tab_bar(course_id: u32, active: &str, oob: bool) -> impl IntoView {
    let active = active.to_string();

    view! {
        <div
            id="course-tab-bar"
            class="flex gap-1 border-b border-slate-200"
            hx-swap-oob=oob.then_some("true")
        >
            {TABS
                .iter()
                .map(|(key, label)| {
                    let is_active = *key == active;
                    let classes = if is_active {
                        "px-4 py-2 text-sm font-medium text-indigo-600 border-b-2 border-indigo-600"
                    } else {
                        "px-4 py-2 text-sm font-medium text-slate-500 hover:text-slate-900 transition-colors"
                    };
                    let url = format!("/api/course/{course_id}/tab/{key}");
                    view! {
                        <button
                            type="button"
                            class=classes
                            hx-get=url
                            hx-target="#course-tab-panel"
                            hx-swap="innerHTML"
                        >
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One tab panel. The tab bar is included out-of-band so the active
/// underline moves with the selection.
#[must_use]
pub fn tab_fragment(course: &Course, tab: &str) -> String {
    let panel = match tab {
        "curriculum" => curriculum_panel().to_html(),
        "reviews" => reviews_panel().to_html(),
        "instructor" => instructor_panel(course).to_html(),
        _ => overview_panel().to_html(),
    };
    let bar = tab_bar(course.id, tab, true).to_html();
    format!("{panel}{bar}")
}

fn overview_panel() -> impl IntoView {
    let outcomes = learning_outcomes();
    let reqs = requirements();

    view! {
        <div class="space-y-6">
            <section>
                <h2 class="text-lg font-semibold mb-3">"What you'll learn"</h2>
                <ul class="grid gap-2 sm:grid-cols-2">
                    {outcomes
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="flex items-start gap-2 text-sm text-slate-700">
                                    <CheckIcon class="mt-0.5 shrink-0 text-emerald-500" />
                                    {item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section>
                <h2 class="text-lg font-semibold mb-3">"Requirements"</h2>
                <ul class="space-y-1.5">
                    {reqs
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="flex items-start gap-2 text-sm text-slate-700">
                                    <span class="mt-1.5 h-1.5 w-1.5 shrink-0 rounded-full bg-slate-400"></span>
                                    {item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}

fn curriculum_panel() -> impl IntoView {
    let sections = curriculum();
    let lessons = total_lessons(&sections);
    let minutes = total_minutes(&sections);
    let summary = format!(
        "{} sections, {} lessons, {}h {}m total length",
        sections.len(),
        lessons,
        minutes / 60,
        minutes % 60
    );

    view! {
        <div>
            <p class="text-sm text-slate-500 mb-4">{summary}</p>
            <div class="space-y-3">
                {sections.into_iter().map(curriculum_section).collect_view()}
            </div>
        </div>
    }
}

fn curriculum_section(section: CurriculumSection) -> impl IntoView {
    let minutes = section.total_minutes();
    let meta = format!("{} lessons, {}m", section.lessons.len(), minutes);

    view! {
        <details class="rounded-lg border border-slate-200 bg-white" open=true>
            <summary class="flex items-center justify-between px-4 py-3 cursor-pointer select-none">
                <span class="font-medium text-sm">{section.title}</span>
                <span class="text-xs text-slate-500">{meta}</span>
            </summary>
            <ul class="border-t border-slate-200 divide-y divide-slate-100">
                {section
                    .lessons
                    .into_iter()
                    .map(|lesson| {
                        let duration = format!("{}m", lesson.duration);
                        view! {
                            <li class="flex items-center gap-3 px-4 py-2.5 text-sm">
                                {if lesson.is_locked {
                                    view! { <LockIcon class="shrink-0 text-slate-400" /> }.into_any()
                                } else {
                                    view! { <PlayIcon class="shrink-0 text-indigo-500" /> }.into_any()
                                }}
                                <span class="flex-1 text-slate-700">{lesson.title}</span>
                                {(lesson.lesson_type == LessonType::Quiz)
                                    .then(|| {
                                        view! {
                                            <span class="rounded bg-slate-100 px-1.5 py-0.5 text-xs text-slate-500">
                                                "Quiz"
                                            </span>
                                        }
                                    })}
                                {lesson
                                    .is_previewable
                                    .then(|| {
                                        view! {
                                            <span class="text-xs font-medium text-indigo-600">"Preview"</span>
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
}

fn reviews_panel() -> impl IntoView {
    let all = reviews();
    let total = all.len();
    let counts = rating_distribution(&all);

    view! {
        <div class="space-y-4">
            <div class="rounded-lg border border-slate-200 bg-white p-4">
                <h2 class="text-sm font-semibold mb-3">"Rating breakdown"</h2>
                <ul class="space-y-1.5">
                    {(1..=5_usize)
                        .rev()
                        .map(|star| {
                            let count = counts[star - 1];
                            let share = if total > 0 { count * 100 / total } else { 0 };
                            let label = format!("{star} star");
                            let bar_style = format!("width: {share}%");
                            view! {
                                <li class="flex items-center gap-2 text-xs text-slate-500">
                                    <span class="w-10">{label}</span>
                                    <div class="h-1.5 flex-1 rounded-full bg-slate-200">
                                        <div class="h-1.5 rounded-full bg-amber-400" style=bar_style></div>
                                    </div>
                                    <span class="w-4 text-right tabular-nums">{count}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            {all
                .into_iter()
                .map(|review| {
                    let stars = format!("{}/5", review.rating);
                    view! {
                        <article class="rounded-lg border border-slate-200 bg-white p-4">
                            <div class="flex items-center gap-3">
                                <Avatar src=review.user_avatar alt=review.user_name size="h-9 w-9" />
                                <div class="flex-1">
                                    <p class="text-sm font-medium">
                                        {review.user_name}
                                        {review
                                            .verified
                                            .then(|| {
                                                view! {
                                                    <span class="ml-2 rounded bg-emerald-100 px-1.5 py-0.5 text-xs text-emerald-800">
                                                        "Verified"
                                                    </span>
                                                }
                                            })}
                                    </p>
                                    <p class="text-xs text-slate-400">{review.date}</p>
                                </div>
                                <span class="inline-flex items-center gap-1 text-sm font-medium">
                                    <StarIcon class="text-amber-400" />
                                    {stars}
                                </span>
                            </div>
                            <p class="mt-3 text-sm text-slate-700">{review.comment}</p>
                            {(!review.pros.is_empty())
                                .then(|| {
                                    view! {
                                        <ul class="mt-3 space-y-1">
                                            {review
                                                .pros
                                                .iter()
                                                .map(|pro| {
                                                    view! {
                                                        <li class="flex items-start gap-1.5 text-xs text-emerald-700">
                                                            <CheckIcon class="h-3.5 w-3.5 mt-px shrink-0" />
                                                            {*pro}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                })}
                            {(!review.cons.is_empty())
                                .then(|| {
                                    view! {
                                        <ul class="mt-2 space-y-1">
                                            {review
                                                .cons
                                                .iter()
                                                .map(|con| {
                                                    view! {
                                                        <li class="flex items-start gap-1.5 text-xs text-amber-700">
                                                            <XIcon class="h-3.5 w-3.5 mt-px shrink-0" />
                                                            {*con}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                })}
                            <p class="mt-3 text-xs text-slate-400">
                                {review.helpful_count}
                                " people found this helpful"
                            </p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn instructor_panel(course: &Course) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-slate-200 bg-white p-6">
            <div class="flex items-center gap-4">
                <img
                    src=course.instructor.avatar
                    alt=course.instructor.name
                    class="h-16 w-16 rounded-full object-cover"
                />
                <div>
                    <h2 class="text-lg font-semibold">{course.instructor.name}</h2>
                    <p class="text-sm text-slate-500">{course.instructor.title}</p>
                </div>
            </div>
            <p class="mt-4 text-sm text-slate-700">
                "An experienced educator focused on practical, production-grade skills. \
                 Courses emphasize real projects over theory and come with full source \
                 code and instructor support."
            </p>
        </div>
    }
}

/// Enrollment sidebar card. Re-rendered by `POST /api/enroll/{id}`.
#[must_use]
pub fn enrollment_sidebar(course: &Course, enrolled: bool) -> String {
    let price = course.price_label();
    let original = course.original_price.map(|p| format!("${p:.2}"));
    let post = format!("/api/enroll/{}", course.id);
    let items = includes();

    view! {
        <div id="enroll-card" class="rounded-xl border border-slate-200 bg-white p-6 lg:sticky lg:top-20">
            <div class="flex items-baseline gap-2">
                <span class="text-3xl font-bold">{price}</span>
                {original
                    .map(|o| {
                        view! { <span class="text-lg text-slate-400 line-through">{o}</span> }
                    })}
            </div>

            {if enrolled {
                view! {
                    <div class="mt-4 space-y-2">
                        <div class="flex items-center justify-center gap-2 h-12 rounded-lg bg-emerald-50 border border-emerald-200 text-emerald-700 text-sm font-medium">
                            <CheckIcon />
                            "Enrolled"
                        </div>
                        <a
                            href="/video-player"
                            class="flex items-center justify-center h-12 rounded-lg bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700 transition-colors"
                        >
                            "Start Learning"
                        </a>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <button
                        type="button"
                        class="mt-4 w-full h-12 rounded-lg bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700 transition-colors"
                        hx-post=post
                        hx-target="#enroll-card"
                        hx-swap="outerHTML"
                    >
                        "Enroll Now"
                    </button>
                }
                    .into_any()
            }}

            <ul class="mt-6 space-y-2 border-t border-slate-200 pt-4">
                {items
                    .into_iter()
                    .map(|(_, text)| {
                        view! {
                            <li class="flex items-center gap-2 text-sm text-slate-600">
                                <CheckIcon class="shrink-0 text-indigo-500" />
                                {text}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .to_html()
}

fn related_rail(courses: &[Course], course: &Course) -> impl IntoView {
    let related = related_courses(courses, course);
    if related.is_empty() {
        return None;
    }

    Some(view! {
        <section class="mt-10">
            <h2 class="text-lg font-semibold mb-4">"Related Courses"</h2>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3" hx-boost="true">
                {related
                    .into_iter()
                    .map(|c| {
                        let href = format!("/course-detail/{}", c.id);
                        let rating = format!("{:.1}", c.rating);
                        let price = c.price_label();
                        view! {
                            <a
                                href=href
                                class="rounded-xl border border-slate-200 bg-white overflow-hidden hover:shadow-md transition-shadow"
                            >
                                <img src=c.thumbnail alt=c.title class="aspect-video w-full object-cover" />
                                <div class="p-4">
                                    <p class="font-medium text-sm line-clamp-2">{c.title}</p>
                                    <div class="mt-2 flex items-center justify-between text-sm">
                                        <span class="inline-flex items-center gap-1">
                                            <StarIcon class="text-amber-400 h-3.5 w-3.5" />
                                            {rating}
                                        </span>
                                        <span class="font-semibold">{price}</span>
                                    </div>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_course, mock_courses};
    use crate::session::SessionStore;

    #[test]
    fn test_page_renders_hero_and_sidebar() {
        let courses = mock_courses();
        let course = find_course(&courses, 1).unwrap();
        let store = SessionStore::new();
        let session = store.create();

        let html = page(&courses, course, &session);
        assert!(html.contains("Complete React Developer Course 2024"));
        assert!(html.contains("Enroll Now"));
        assert!(html.contains("Related Courses"));
    }

    #[test]
    fn test_curriculum_tab_lists_lessons() {
        let courses = mock_courses();
        let course = find_course(&courses, 1).unwrap();
        let html = tab_fragment(course, "curriculum");
        assert!(html.contains("Compound Components Pattern"));
        assert!(html.contains("Preview"));
        assert!(html.contains("14 lessons"));
    }

    #[test]
    fn test_reviews_tab() {
        let courses = mock_courses();
        let course = find_course(&courses, 1).unwrap();
        let html = tab_fragment(course, "reviews");
        assert!(html.contains("Rating breakdown"));
        assert!(html.contains("Michael Rodriguez"));
        assert!(html.contains("Verified"));
        assert!(html.contains("Could use more TypeScript examples"));
    }

    #[test]
    fn test_enrolled_sidebar_offers_start_learning() {
        let courses = mock_courses();
        let course = find_course(&courses, 1).unwrap();
        let html = enrollment_sidebar(course, true);
        assert!(html.contains("Start Learning"));
        assert!(!html.contains("Enroll Now"));
    }
}
