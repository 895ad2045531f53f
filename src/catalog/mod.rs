//! Course catalog domain: fixtures, filtering, and sorting.
//!
//! The catalog is a fixed set of courses held in memory. Browsing applies
//! the filter/sort pipeline in [`filter`] over the full set on every
//! request; course pages pull curriculum, review, and instructor fixtures
//! from [`detail`].

pub mod course;
pub mod detail;
pub mod filter;

pub use course::{Course, Instructor, Level, find_course, mock_courses};
pub use detail::{
    CurriculumSection, Lesson, LessonType, Review, curriculum, includes, learning_outcomes,
    rating_distribution, related_courses, requirements, reviews, total_lessons, total_minutes,
};
pub use filter::{
    CatalogQuery, FilterChip, MAX_PAGE, SortKey, active_chips, apply, has_more,
};
