//! Student dashboard fixtures.

/// Headline numbers in the welcome hero.
#[derive(Debug, Clone, Copy)]
pub struct StudentStats {
    pub courses_completed: u32,
    pub hours_learned: u32,
    pub certificates_earned: u32,
    pub current_streak: u32,
}

#[must_use]
pub fn stats() -> StudentStats {
    StudentStats {
        courses_completed: 12,
        hours_learned: 48,
        certificates_earned: 8,
        current_streak: 7,
    }
}

/// A course the student is partway through.
#[derive(Debug, Clone)]
pub struct InProgressCourse {
    pub id: u32,
    pub title: &'static str,
    pub instructor: &'static str,
    pub thumbnail: &'static str,
    /// Completion percentage.
    pub progress: u8,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub last_watched: &'static str,
    pub duration: &'static str,
    pub category: &'static str,
}

#[must_use]
pub fn in_progress() -> Vec<InProgressCourse> {
    vec![
        InProgressCourse {
            id: 1,
            title: "Advanced React Patterns",
            instructor: "Sarah Johnson",
            thumbnail: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&h=225&fit=crop",
            progress: 65,
            total_lessons: 24,
            completed_lessons: 16,
            last_watched: "2 hours ago",
            duration: "8h 30m",
            category: "Web Development",
        },
        InProgressCourse {
            id: 2,
            title: "UI/UX Design Fundamentals",
            instructor: "Michael Chen",
            thumbnail: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?w=400&h=225&fit=crop",
            progress: 40,
            total_lessons: 18,
            completed_lessons: 7,
            last_watched: "1 day ago",
            duration: "6h 45m",
            category: "Design",
        },
        InProgressCourse {
            id: 3,
            title: "Python for Data Science",
            instructor: "Dr. Emily Rodriguez",
            thumbnail: "https://images.pixabay.com/photo/2018/05/08/08/44/artificial-intelligence-3382507_1280.jpg?w=400&h=225&fit=crop",
            progress: 85,
            total_lessons: 32,
            completed_lessons: 27,
            last_watched: "3 hours ago",
            duration: "12h 15m",
            category: "Data Science",
        },
        InProgressCourse {
            id: 4,
            title: "Digital Marketing Mastery",
            instructor: "Alex Thompson",
            thumbnail: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=225&fit=crop",
            progress: 25,
            total_lessons: 20,
            completed_lessons: 5,
            last_watched: "5 days ago",
            duration: "9h 20m",
            category: "Marketing",
        },
    ]
}

/// A suggestion in the recommended-courses rail.
#[derive(Debug, Clone)]
pub struct RecommendedCourse {
    pub id: u32,
    pub title: &'static str,
    pub instructor: &'static str,
    pub thumbnail: &'static str,
    pub rating: f32,
    pub price: f64,
}

#[must_use]
pub fn recommended() -> Vec<RecommendedCourse> {
    vec![
        RecommendedCourse {
            id: 1,
            title: "Machine Learning Fundamentals",
            instructor: "Dr. James Wilson",
            thumbnail: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=400&h=225&fit=crop",
            rating: 4.8,
            price: 89.99,
        },
        RecommendedCourse {
            id: 2,
            title: "Advanced JavaScript ES6+",
            instructor: "Lisa Anderson",
            thumbnail: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=400&h=225&fit=crop",
            rating: 4.9,
            price: 79.99,
        },
        RecommendedCourse {
            id: 3,
            title: "Figma to Code Workflow",
            instructor: "David Kim",
            thumbnail: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=400&h=225&fit=crop",
            rating: 4.7,
            price: 69.99,
        },
        RecommendedCourse {
            id: 4,
            title: "AWS Cloud Practitioner",
            instructor: "Maria Garcia",
            thumbnail: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=400&h=225&fit=crop",
            rating: 4.6,
            price: 99.99,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts_are_consistent() {
        for course in in_progress() {
            assert!(course.completed_lessons <= course.total_lessons, "{}", course.title);
            assert!(course.progress <= 100);
        }
    }
}
