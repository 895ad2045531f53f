//! Course catalog fixtures.
//!
//! The marketplace has no backend; the six courses below are the complete
//! inventory, initialized as literals the same way the product mocked its
//! API responses.

/// Course difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Lowercase slug used in filter query strings.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Instructor summary shown on course cards.
#[derive(Debug, Clone)]
pub struct Instructor {
    pub name: &'static str,
    pub avatar: &'static str,
    pub title: &'static str,
}

/// A course in the catalog.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub instructor: Instructor,
    pub thumbnail: &'static str,
    pub rating: f32,
    pub review_count: u32,
    pub enrollment_count: u32,
    pub duration_hours: u32,
    pub level: Level,
    pub price: f64,
    pub original_price: Option<f64>,
    pub category: &'static str,
}

impl Course {
    /// Whether the course is free.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Price formatted for display ("Free" or "$89.99").
    #[must_use]
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            format!("${:.2}", self.price)
        }
    }
}

/// The full mock inventory.
#[must_use]
pub fn mock_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Complete React Developer Course 2024",
            instructor: Instructor {
                name: "Sarah Johnson",
                avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
                title: "Senior Frontend Developer",
            },
            thumbnail: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&h=225&fit=crop",
            rating: 4.8,
            review_count: 2847,
            enrollment_count: 15420,
            duration_hours: 42,
            level: Level::Intermediate,
            price: 89.99,
            original_price: Some(199.99),
            category: "web-development",
        },
        Course {
            id: 2,
            title: "Python for Data Science and Machine Learning",
            instructor: Instructor {
                name: "Dr. Michael Chen",
                avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
                title: "Data Science Professor",
            },
            thumbnail: "https://images.unsplash.com/photo-1526379095098-d400fd0bf935?w=400&h=225&fit=crop",
            rating: 4.9,
            review_count: 1923,
            enrollment_count: 8765,
            duration_hours: 38,
            level: Level::Beginner,
            price: 0.0,
            original_price: None,
            category: "data-science",
        },
        Course {
            id: 3,
            title: "UI/UX Design Masterclass",
            instructor: Instructor {
                name: "Emma Rodriguez",
                avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
                title: "Senior UX Designer",
            },
            thumbnail: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=400&h=225&fit=crop",
            rating: 4.7,
            review_count: 3456,
            enrollment_count: 12890,
            duration_hours: 28,
            level: Level::Intermediate,
            price: 79.99,
            original_price: Some(149.99),
            category: "design",
        },
        Course {
            id: 4,
            title: "Digital Marketing Strategy 2024",
            instructor: Instructor {
                name: "James Wilson",
                avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
                title: "Marketing Director",
            },
            thumbnail: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=225&fit=crop",
            rating: 4.6,
            review_count: 2134,
            enrollment_count: 9876,
            duration_hours: 24,
            level: Level::Beginner,
            price: 69.99,
            original_price: Some(129.99),
            category: "marketing",
        },
        Course {
            id: 5,
            title: "Advanced JavaScript Concepts",
            instructor: Instructor {
                name: "Alex Thompson",
                avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=face",
                title: "Full Stack Developer",
            },
            thumbnail: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=400&h=225&fit=crop",
            rating: 4.8,
            review_count: 1876,
            enrollment_count: 7654,
            duration_hours: 32,
            level: Level::Advanced,
            price: 99.99,
            original_price: Some(179.99),
            category: "web-development",
        },
        Course {
            id: 6,
            title: "Photography Fundamentals",
            instructor: Instructor {
                name: "Lisa Park",
                avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150&h=150&fit=crop&crop=face",
                title: "Professional Photographer",
            },
            thumbnail: "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=400&h=225&fit=crop",
            rating: 4.5,
            review_count: 987,
            enrollment_count: 4321,
            duration_hours: 18,
            level: Level::Beginner,
            price: 49.99,
            original_price: Some(89.99),
            category: "photography",
        },
    ]
}

/// Look up a course by id.
#[must_use]
pub fn find_course(courses: &[Course], id: u32) -> Option<&Course> {
    courses.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_shape() {
        let courses = mock_courses();
        assert_eq!(courses.len(), 6);
        assert!(courses.iter().filter(|c| c.is_free()).count() == 1);
    }

    #[test]
    fn test_price_label() {
        let courses = mock_courses();
        assert_eq!(find_course(&courses, 2).unwrap().price_label(), "Free");
        assert_eq!(find_course(&courses, 1).unwrap().price_label(), "$89.99");
    }
}
