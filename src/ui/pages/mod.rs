//! Server-rendered pages. Each page function returns the body HTML as a
//! string, ready to be wrapped by [`crate::ui::html_shell`]; fragment
//! functions return the partials the HTMX endpoints swap in.

pub mod catalog;
pub mod course_detail;
pub mod instructor_dashboard;
pub mod login;
pub mod not_found;
pub mod student_dashboard;
pub mod video_player;
