//! Instructor dashboard: metrics, courses, student roster, payments,
//! notifications.

use leptos::prelude::*;

use crate::instructor::{
    ChangeType, StudentQuery, StudentRow, StudentSort, courses, filter_students, metrics,
    notifications, payments, students, unread_count,
};
use crate::session::UserProfile;
use crate::ui::components::{
    Avatar, Badge, BadgeVariant, BellIcon, BookOpenIcon, BreadcrumbTrail, Card, CardContent,
    CardHeader, DollarSignIcon, SearchIcon, StarIcon, UsersIcon,
};

/// Full page body.
#[must_use]
pub fn page(user: &UserProfile) -> String {
    let name = user.name.clone();
    let notes = notifications();
    let unread = unread_count(&notes);
    let table = students_fragment(&StudentQuery::default());

    view! {
        <div>
            <BreadcrumbTrail path="/instructor-dashboard" />

            <div class="flex items-center justify-between mb-6">
                <div>
                    <h1 class="text-2xl font-bold">"Instructor Dashboard"</h1>
                    <p class="text-sm text-slate-500">"Welcome back, " {name}</p>
                </div>
                <div class="relative">
                    <span class="text-slate-500"><BellIcon class="h-5 w-5" /></span>
                    {(unread > 0)
                        .then(|| {
                            view! {
                                <span class="absolute -top-2 -right-2 flex h-4 w-4 items-center justify-center rounded-full bg-red-500 text-[10px] font-bold text-white">
                                    {unread}
                                </span>
                            }
                        })}
                </div>
            </div>

            <section class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                {metrics()
                    .into_iter()
                    .map(|metric| {
                        let change_class = match metric.change_type {
                            ChangeType::Increase => "text-emerald-600",
                            ChangeType::Decrease => "text-red-600",
                        };
                        let change_class = format!("text-xs font-medium {change_class}");
                        view! {
                            <div class="rounded-xl border border-slate-200 bg-white p-5">
                                <div class="flex items-center justify-between">
                                    <p class="text-sm text-slate-500">{metric.title}</p>
                                    <span class="text-slate-400">{metric_icon(metric.icon)}</span>
                                </div>
                                <p class="mt-2 text-2xl font-bold">{metric.value}</p>
                                <p class=change_class>{metric.change}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <div class="mt-8 lg:grid lg:grid-cols-[1fr_320px] lg:gap-8">
                <div class="space-y-8">
                    <section>
                        <h2 class="text-lg font-semibold mb-4">"My Courses"</h2>
                        <div class="space-y-4">
                            {courses()
                                .into_iter()
                                .map(|course| {
                                    let enrollments = format!("{} students", course.enrollments);
                                    let rating = format!("{:.1}", course.rating);
                                    let revenue = format!("${}", course.revenue);
                                    view! {
                                        <article class="rounded-xl border border-slate-200 bg-white p-4 flex gap-4">
                                            <img
                                                src=course.thumbnail
                                                alt=course.title
                                                class="hidden sm:block h-20 w-32 rounded-lg object-cover"
                                            />
                                            <div class="flex-1 min-w-0">
                                                <div class="flex items-center gap-2">
                                                    <h3 class="font-medium text-sm truncate">{course.title}</h3>
                                                    <Badge variant=BadgeVariant::from(course.status)>
                                                        {course.status.label()}
                                                    </Badge>
                                                </div>
                                                <p class="mt-1 text-xs text-slate-500 line-clamp-2">
                                                    {course.description}
                                                </p>
                                                <div class="mt-2 flex flex-wrap items-center gap-4 text-xs text-slate-500">
                                                    <span class="inline-flex items-center gap-1">
                                                        <UsersIcon class="h-3.5 w-3.5" />
                                                        {enrollments}
                                                    </span>
                                                    <span class="inline-flex items-center gap-1">
                                                        <StarIcon class="h-3.5 w-3.5 text-amber-400" />
                                                        {rating}
                                                    </span>
                                                    <span class="font-medium text-slate-700">{revenue}</span>
                                                </div>
                                            </div>
                                        </article>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section>
                        <h2 class="text-lg font-semibold mb-4">"Students"</h2>
                        <form
                            hx-get="/api/students"
                            hx-target="#student-table"
                            hx-swap="outerHTML"
                            hx-trigger="change, input delay:400ms from:[name='search']"
                            class="mb-4 flex gap-3"
                        >
                            <div class="relative flex-1">
                                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">
                                    <SearchIcon />
                                </span>
                                <input
                                    type="search"
                                    name="search"
                                    placeholder="Search students, emails, courses..."
                                    class="h-10 w-full rounded-lg border border-slate-300 bg-white pl-9 pr-3 text-sm placeholder:text-slate-400 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500"
                                />
                            </div>
                            <select
                                name="sort"
                                class="h-10 rounded-lg border border-slate-300 bg-white px-3 text-sm text-slate-700 cursor-pointer"
                            >
                                <option value="name">"Sort by Name"</option>
                                <option value="progress">"Sort by Progress"</option>
                                <option value="enrolled-date">"Sort by Enrollment Date"</option>
                            </select>
                        </form>
                        <div inner_html=table></div>
                    </section>
                </div>

                <aside class="mt-8 lg:mt-0 space-y-8">
                    <Card>
                        <CardHeader>
                            <h2 class="text-sm font-semibold">"Payment History"</h2>
                        </CardHeader>
                        <CardContent>
                        <ul class="space-y-3">
                            {payments()
                                .into_iter()
                                .map(|payment| {
                                    let amount = format!("${}", payment.amount);
                                    view! {
                                        <li class="flex items-start justify-between gap-2 text-sm">
                                            <div class="min-w-0">
                                                <p class="truncate text-slate-700">{payment.description}</p>
                                                <p class="text-xs text-slate-400">{payment.date}</p>
                                            </div>
                                            <div class="text-right shrink-0">
                                                <p class="font-medium">{amount}</p>
                                                <Badge variant=BadgeVariant::from(payment.status)>
                                                    {payment.status.label()}
                                                </Badge>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <h2 class="text-sm font-semibold">"Notifications"</h2>
                        </CardHeader>
                        <CardContent>
                        <ul class="space-y-3">
                            {notes
                                .into_iter()
                                .map(|note| {
                                    let classes = if note.read {
                                        "rounded-lg p-3 text-sm"
                                    } else {
                                        "rounded-lg p-3 text-sm bg-indigo-50"
                                    };
                                    view! {
                                        <li class=classes>
                                            <p class="font-medium text-slate-900">{note.title}</p>
                                            <p class="text-xs text-slate-600">{note.message}</p>
                                            <p class="mt-1 text-xs text-slate-400">{note.timestamp}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        </CardContent>
                    </Card>
                </aside>
            </div>
        </div>
    }
    .to_html()
}

fn metric_icon(name: &str) -> AnyView {
    match name {
        "users" => view! { <UsersIcon class="h-5 w-5" /> }.into_any(),
        "dollar-sign" => view! { <DollarSignIcon class="h-5 w-5" /> }.into_any(),
        "star" => view! { <StarIcon class="h-5 w-5" /> }.into_any(),
        _ => view! { <BookOpenIcon class="h-5 w-5" /> }.into_any(),
    }
}

/// Student roster table fragment, re-rendered by `GET /api/students`.
#[must_use]
pub fn students_fragment(query: &StudentQuery) -> String {
    let rows = filter_students(&students(), query);

    view! {
        <div id="student-table" class="rounded-xl border border-slate-200 bg-white overflow-hidden">
            {if rows.is_empty() {
                view! {
                    <p class="p-6 text-center text-sm text-slate-500">"No students match your search."</p>
                }
                    .into_any()
            } else {
                view! {
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b border-slate-200 bg-slate-50 text-left text-xs uppercase tracking-wide text-slate-500">
                                <th class="px-4 py-3 font-medium">"Student"</th>
                                <th class="px-4 py-3 font-medium hidden md:table-cell">"Course"</th>
                                <th class="px-4 py-3 font-medium">"Progress"</th>
                                <th class="px-4 py-3 font-medium hidden sm:table-cell">"Enrolled"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-100">
                            {rows.into_iter().map(student_row).collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </div>
    }
    .to_html()
}

fn student_row(row: StudentRow) -> impl IntoView {
    let progress = format!("{}%", row.progress);
    let bar_style = format!("width: {}%", row.progress);

    view! {
        <tr>
            <td class="px-4 py-3">
                <div class="flex items-center gap-3">
                    <Avatar src=row.avatar alt=row.name size="h-8 w-8" />
                    <div class="min-w-0">
                        <p class="font-medium truncate">{row.name}</p>
                        <p class="text-xs text-slate-400 truncate">{row.email}</p>
                    </div>
                </div>
            </td>
            <td class="px-4 py-3 hidden md:table-cell text-slate-600">{row.course}</td>
            <td class="px-4 py-3">
                <div class="flex items-center gap-2">
                    <div class="h-1.5 w-20 rounded-full bg-slate-200">
                        <div class="h-1.5 rounded-full bg-indigo-600" style=bar_style></div>
                    </div>
                    <span class="text-xs text-slate-500">{progress}</span>
                </div>
            </td>
            <td class="px-4 py-3 hidden sm:table-cell text-slate-500">{row.enrolled_date}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::Role;

    fn instructor() -> UserProfile {
        UserProfile {
            role: Role::Instructor,
            name: "Sarah Wilson".to_string(),
            email: "instructor@edumarket.com".to_string(),
        }
    }

    #[test]
    fn test_page_shows_metrics_and_unread_badge() {
        let html = page(&instructor());
        assert!(html.contains("Total Students"));
        assert!(html.contains("2,847"));
        assert!(html.contains("Payment History"));
        assert!(html.contains("New Student Enrollment"));
    }

    #[test]
    fn test_students_fragment_filters() {
        let query = StudentQuery {
            search: "emily".to_string(),
            sort: StudentSort::Name,
        };
        let html = students_fragment(&query);
        assert!(html.contains("Emily Rodriguez"));
        assert!(!html.contains("Michael Chen"));
    }

    #[test]
    fn test_students_fragment_empty_state() {
        let query = StudentQuery {
            search: "nobody at all".to_string(),
            sort: StudentSort::Name,
        };
        let html = students_fragment(&query);
        assert!(html.contains("No students match"));
    }
}
