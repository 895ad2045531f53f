//! Course-detail fixtures: curriculum, reviews, and learning outcomes.
//!
//! Like the catalog inventory these are literal mock objects. Every course
//! shares the same curriculum and review set; related courses come from the
//! catalog itself.

use super::course::Course;

/// Kind of lesson in a curriculum section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonType {
    Video,
    Quiz,
}

/// One lesson inside a curriculum section.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub title: &'static str,
    /// Length in minutes.
    pub duration: u32,
    pub lesson_type: LessonType,
    pub is_previewable: bool,
    pub is_completed: bool,
    pub is_locked: bool,
}

/// A titled group of lessons.
#[derive(Debug, Clone)]
pub struct CurriculumSection {
    pub title: &'static str,
    pub lessons: Vec<Lesson>,
}

impl CurriculumSection {
    /// Sum of lesson durations, in minutes.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.lessons.iter().map(|l| l.duration).sum()
    }
}

/// A student review of a course.
#[derive(Debug, Clone)]
pub struct Review {
    pub user_name: &'static str,
    pub user_avatar: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub comment: &'static str,
    pub pros: Vec<&'static str>,
    pub cons: Vec<&'static str>,
    pub helpful_count: u32,
    pub verified: bool,
}

fn video(title: &'static str, duration: u32, previewable: bool) -> Lesson {
    Lesson {
        title,
        duration,
        lesson_type: LessonType::Video,
        is_previewable: previewable,
        is_completed: false,
        is_locked: !previewable,
    }
}

fn quiz(title: &'static str, duration: u32) -> Lesson {
    Lesson {
        title,
        duration,
        lesson_type: LessonType::Quiz,
        is_previewable: false,
        is_completed: false,
        is_locked: true,
    }
}

/// Curriculum fixture shown on every course page.
#[must_use]
pub fn curriculum() -> Vec<CurriculumSection> {
    vec![
        CurriculumSection {
            title: "Advanced Component Patterns",
            lessons: vec![
                video("Introduction to Advanced Patterns", 15, true),
                video("Compound Components Pattern", 22, true),
                video("Render Props Pattern", 18, false),
                video("Higher-Order Components (HOCs)", 25, false),
                quiz("Pattern Comparison Quiz", 10),
            ],
        },
        CurriculumSection {
            title: "Performance Optimization",
            lessons: vec![
                video("React Performance Fundamentals", 20, false),
                video("React.memo and Memoization", 28, false),
                video("useMemo and useCallback Hooks", 24, false),
                video("Code Splitting and Lazy Loading", 32, false),
                video("Performance Profiling Tools", 26, false),
            ],
        },
        CurriculumSection {
            title: "Custom Hooks Mastery",
            lessons: vec![
                video("Custom Hooks Fundamentals", 16, false),
                video("Building Complex Custom Hooks", 30, false),
                video("Hook Composition Patterns", 22, false),
                video("Testing Custom Hooks", 18, false),
            ],
        },
    ]
}

/// Review fixture shown on every course page.
#[must_use]
pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            user_name: "Michael Rodriguez",
            user_avatar: "https://randomuser.me/api/portraits/men/32.jpg",
            rating: 5,
            date: "2024-01-15",
            comment: "This course completely transformed my understanding of the subject. \
                      The teaching style is exceptional and the real-world examples make \
                      everything click. The optimization section alone was worth the price.",
            pros: vec![
                "Excellent real-world examples",
                "Clear explanations of complex concepts",
                "Great code organization patterns",
            ],
            cons: vec!["Some sections move quite fast"],
            helpful_count: 47,
            verified: true,
        },
        Review {
            user_name: "Emily Chen",
            user_avatar: "https://randomuser.me/api/portraits/women/45.jpg",
            rating: 5,
            date: "2024-01-10",
            comment: "As a senior developer I was skeptical about taking another course, but \
                      this exceeded all my expectations. The advanced patterns section taught \
                      me techniques I wish I had known years ago.",
            pros: vec![
                "Advanced techniques not found elsewhere",
                "Production-ready patterns",
                "Excellent instructor expertise",
            ],
            cons: vec![],
            helpful_count: 32,
            verified: true,
        },
        Review {
            user_name: "David Kim",
            user_avatar: "https://randomuser.me/api/portraits/men/28.jpg",
            rating: 4,
            date: "2024-01-05",
            comment: "Solid course with great content. The pacing works well for experienced \
                      developers and the downloadable resources are genuinely useful.",
            pros: vec!["Useful downloadable resources", "Good pacing"],
            cons: vec!["Could use more TypeScript examples"],
            helpful_count: 18,
            verified: false,
        },
    ]
}

/// Bullet points for the overview tab.
#[must_use]
pub fn learning_outcomes() -> Vec<&'static str> {
    vec![
        "Master advanced patterns like compound components and render props",
        "Implement performance optimization techniques in production code",
        "Build custom abstractions for complex state management scenarios",
        "Create reusable component libraries with proper API design",
        "Implement code splitting and lazy loading for better performance",
        "Build scalable application architecture using modern patterns",
    ]
}

/// Prerequisites for the overview tab.
#[must_use]
pub fn requirements() -> Vec<&'static str> {
    vec![
        "Solid understanding of the fundamentals (components, props, state)",
        "Experience with JavaScript ES6+ features",
        "Basic knowledge of HTML, CSS, and modern web development",
        "Code editor and Node.js installed",
    ]
}

/// "This course includes" list for the enrollment sidebar.
#[must_use]
pub fn includes() -> Vec<(&'static str, &'static str)> {
    vec![
        ("play-circle", "48 video lessons"),
        ("file-text", "Downloadable resources"),
        ("code", "Source code included"),
        ("award", "Certificate of completion"),
        ("infinity", "Lifetime access"),
        ("message-circle", "Instructor support"),
    ]
}

/// Review counts per star, index 0 = 1 star.
#[must_use]
pub fn rating_distribution(reviews: &[Review]) -> [usize; 5] {
    let mut counts = [0; 5];
    for review in reviews {
        let star = usize::from(review.rating.clamp(1, 5));
        counts[star - 1] += 1;
    }
    counts
}

/// Total number of lessons across the curriculum.
#[must_use]
pub fn total_lessons(sections: &[CurriculumSection]) -> usize {
    sections.iter().map(|s| s.lessons.len()).sum()
}

/// Total curriculum runtime in minutes.
#[must_use]
pub fn total_minutes(sections: &[CurriculumSection]) -> u32 {
    sections.iter().map(CurriculumSection::total_minutes).sum()
}

/// Up to three related courses: same category first, then highest rated.
#[must_use]
pub fn related_courses(courses: &[Course], current: &Course) -> Vec<Course> {
    let mut related: Vec<Course> = courses
        .iter()
        .filter(|c| c.id != current.id && c.category == current.category)
        .cloned()
        .collect();

    let mut fill: Vec<Course> = courses
        .iter()
        .filter(|c| c.id != current.id && c.category != current.category)
        .cloned()
        .collect();
    fill.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    related.extend(fill);
    related.truncate(3);
    related
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::course::mock_courses;

    #[test]
    fn test_curriculum_totals() {
        let sections = curriculum();
        assert_eq!(sections.len(), 3);
        assert_eq!(total_lessons(&sections), 14);
        assert_eq!(sections[0].total_minutes(), 15 + 22 + 18 + 25 + 10);
    }

    #[test]
    fn test_locked_lessons_are_not_previewable() {
        for section in curriculum() {
            for lesson in &section.lessons {
                assert!(!(lesson.is_locked && lesson.is_previewable));
            }
        }
    }

    #[test]
    fn test_rating_distribution_counts_stars() {
        let counts = rating_distribution(&reviews());
        assert_eq!(counts, [0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_related_prefers_same_category() {
        let courses = mock_courses();
        let react = &courses[0]; // web-development
        let related = related_courses(&courses, react);

        assert_eq!(related.len(), 3);
        // The other web-development course must come first.
        assert_eq!(related[0].category, "web-development");
        assert!(related.iter().all(|c| c.id != react.id));
    }
}
