//! Student dashboard: welcome hero, continue learning, recommendations.

use leptos::prelude::*;

use crate::session::UserProfile;
use crate::student::{in_progress, recommended, stats};
use crate::ui::components::{AwardIcon, BookOpenIcon, BreadcrumbTrail, ClockIcon, StarIcon};

/// Full page body.
#[must_use]
pub fn page(user: &UserProfile) -> String {
    let name = user.name.clone();
    let numbers = stats();
    let courses = in_progress();
    let suggestions = recommended();

    view! {
        <div>
            <BreadcrumbTrail path="/student-dashboard" />

            <section class="rounded-xl bg-indigo-600 text-white p-6 md:p-8">
                <h1 class="text-2xl font-bold">"Welcome back, " {name} "!"</h1>
                <p class="mt-1 text-indigo-200 text-sm">
                    "Pick up where you left off, or explore something new."
                </p>
                <div class="mt-6 grid grid-cols-2 md:grid-cols-4 gap-4">
                    {stat_card(
                        numbers.courses_completed,
                        "Courses Completed",
                        view! { <BookOpenIcon class="h-5 w-5" /> }.into_any(),
                    )}
                    {stat_card(
                        numbers.hours_learned,
                        "Hours Learned",
                        view! { <ClockIcon class="h-5 w-5" /> }.into_any(),
                    )}
                    {stat_card(
                        numbers.certificates_earned,
                        "Certificates",
                        view! { <AwardIcon class="h-5 w-5" /> }.into_any(),
                    )}
                    {stat_card(
                        numbers.current_streak,
                        "Day Streak",
                        view! { <StarIcon class="h-5 w-5" /> }.into_any(),
                    )}
                </div>
            </section>

            <section class="mt-8">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">"Continue Learning"</h2>
                    <a href="/video-player" class="text-sm text-indigo-600 hover:underline" hx-boost="true">
                        "View all"
                    </a>
                </div>
                <div class="grid gap-6 sm:grid-cols-2 xl:grid-cols-4">
                    {courses
                        .into_iter()
                        .map(|course| {
                            let progress = format!("{}%", course.progress);
                            let bar_style = format!("width: {}%", course.progress);
                            let lessons = format!(
                                "{}/{} lessons",
                                course.completed_lessons, course.total_lessons
                            );
                            let last = format!("Last watched {}", course.last_watched);
                            view! {
                                <article class="rounded-xl border border-slate-200 bg-white overflow-hidden flex flex-col">
                                    <img
                                        src=course.thumbnail
                                        alt=course.title
                                        class="aspect-video w-full object-cover"
                                        loading="lazy"
                                    />
                                    <div class="flex flex-col flex-1 p-4">
                                        <p class="text-xs text-slate-400">{course.category}</p>
                                        <h3 class="mt-1 font-medium text-sm line-clamp-2">{course.title}</h3>
                                        <p class="mt-1 text-xs text-slate-500">{course.instructor}</p>

                                        <div class="mt-3">
                                            <div class="flex items-center justify-between text-xs text-slate-500 mb-1">
                                                <span>{lessons}</span>
                                                <span class="font-medium text-slate-700">{progress}</span>
                                            </div>
                                            <div class="h-1.5 rounded-full bg-slate-200">
                                                <div class="h-1.5 rounded-full bg-indigo-600" style=bar_style></div>
                                            </div>
                                        </div>

                                        <p class="mt-2 text-xs text-slate-400">{last}</p>

                                        <a
                                            href="/video-player"
                                            class="mt-auto pt-3 inline-flex items-center justify-center h-9 rounded-lg bg-indigo-600 text-white text-xs font-medium hover:bg-indigo-700 transition-colors"
                                            hx-boost="true"
                                        >
                                            "Continue"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mt-8">
                <h2 class="text-lg font-semibold mb-4">"Recommended for You"</h2>
                <div class="grid gap-6 sm:grid-cols-2 xl:grid-cols-4" hx-boost="true">
                    {suggestions
                        .into_iter()
                        .map(|course| {
                            let rating = format!("{:.1}", course.rating);
                            let price = format!("${:.2}", course.price);
                            view! {
                                <a
                                    href="/course-catalog"
                                    class="rounded-xl border border-slate-200 bg-white overflow-hidden hover:shadow-md transition-shadow"
                                >
                                    <img
                                        src=course.thumbnail
                                        alt=course.title
                                        class="aspect-video w-full object-cover"
                                        loading="lazy"
                                    />
                                    <div class="p-4">
                                        <h3 class="font-medium text-sm line-clamp-2">{course.title}</h3>
                                        <p class="mt-1 text-xs text-slate-500">{course.instructor}</p>
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
        </div>
    }
    .to_html()
}

fn stat_card(value: u32, label: &'static str, icon: AnyView) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-white/10 p-4">
            <div class="flex items-center justify-between">
                <p class="text-2xl font-bold">{value}</p>
                <span class="text-indigo-200">{icon}</span>
            </div>
            <p class="text-xs text-indigo-200">{label}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::Role;

    fn student() -> UserProfile {
        UserProfile {
            role: Role::Student,
            name: "John Doe".to_string(),
            email: "student@edumarket.com".to_string(),
        }
    }

    #[test]
    fn test_page_greets_user_and_shows_progress() {
        let html = page(&student());
        assert!(html.contains("Welcome back, "));
        assert!(html.contains("John Doe"));
        assert!(html.contains("Continue Learning"));
        assert!(html.contains("16/24 lessons"));
        assert!(html.contains("Machine Learning Fundamentals"));
    }
}
