//! Instructor dashboard fixtures and the student-roster table operations.

use serde::Deserialize;

/// Trend direction on a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Increase,
    Decrease,
}

/// Headline metric card.
#[derive(Debug, Clone)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub change_type: ChangeType,
    pub icon: &'static str,
}

/// Publication state of an instructor course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    Published,
    Draft,
}

impl CourseStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
        }
    }
}

/// A course from the instructor's own catalog.
#[derive(Debug, Clone)]
pub struct InstructorCourse {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub status: CourseStatus,
    pub enrollments: u32,
    pub rating: f32,
    pub reviews: u32,
    pub revenue: &'static str,
    pub duration: &'static str,
}

/// Row in the student roster.
#[derive(Debug, Clone)]
pub struct StudentRow {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
    pub course: &'static str,
    /// Completion percentage.
    pub progress: u8,
    pub enrolled_date: &'static str,
}

/// Payout/sale status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

/// Payment history line item.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: u32,
    pub description: &'static str,
    pub amount: u32,
    pub date: &'static str,
    pub status: PaymentStatus,
    pub course: Option<&'static str>,
}

/// Notification panel entry.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u32,
    pub kind: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub timestamp: &'static str,
    pub read: bool,
}

#[must_use]
pub fn metrics() -> Vec<Metric> {
    vec![
        Metric {
            title: "Total Students",
            value: "2,847",
            change: "+12.5%",
            change_type: ChangeType::Increase,
            icon: "users",
        },
        Metric {
            title: "Revenue This Month",
            value: "$18,420",
            change: "+8.2%",
            change_type: ChangeType::Increase,
            icon: "dollar-sign",
        },
        Metric {
            title: "Course Rating",
            value: "4.8",
            change: "+0.3",
            change_type: ChangeType::Increase,
            icon: "star",
        },
        Metric {
            title: "Active Enrollments",
            value: "1,234",
            change: "+15.7%",
            change_type: ChangeType::Increase,
            icon: "book-open",
        },
    ]
}

#[must_use]
pub fn courses() -> Vec<InstructorCourse> {
    vec![
        InstructorCourse {
            id: 1,
            title: "Advanced React Patterns",
            description: "Master advanced React concepts including hooks, context, and \
                          performance optimization techniques for building scalable applications.",
            thumbnail: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&h=300&fit=crop",
            status: CourseStatus::Published,
            enrollments: 1247,
            rating: 4.9,
            reviews: 234,
            revenue: "12,450",
            duration: "8.5 hours",
        },
        InstructorCourse {
            id: 2,
            title: "JavaScript Fundamentals",
            description: "Complete guide to JavaScript from basics to advanced concepts \
                          including ES6+, async programming, and modern development practices.",
            thumbnail: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=400&h=300&fit=crop",
            status: CourseStatus::Published,
            enrollments: 892,
            rating: 4.7,
            reviews: 156,
            revenue: "8,920",
            duration: "12 hours",
        },
        InstructorCourse {
            id: 3,
            title: "Node.js Backend Development",
            description: "Build robust backend applications with Node.js, Express, and MongoDB. \
                          Learn API development, authentication, and deployment.",
            thumbnail: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=400&h=300&fit=crop",
            status: CourseStatus::Draft,
            enrollments: 0,
            rating: 0.0,
            reviews: 0,
            revenue: "0",
            duration: "10 hours",
        },
    ]
}

#[must_use]
pub fn students() -> Vec<StudentRow> {
    vec![
        StudentRow {
            id: 1,
            name: "Sarah Johnson",
            email: "sarah.johnson@email.com",
            avatar: "https://randomuser.me/api/portraits/women/1.jpg",
            course: "Advanced React Patterns",
            progress: 85,
            enrolled_date: "2024-01-15",
        },
        StudentRow {
            id: 2,
            name: "Michael Chen",
            email: "michael.chen@email.com",
            avatar: "https://randomuser.me/api/portraits/men/2.jpg",
            course: "JavaScript Fundamentals",
            progress: 62,
            enrolled_date: "2024-01-20",
        },
        StudentRow {
            id: 3,
            name: "Emily Rodriguez",
            email: "emily.rodriguez@email.com",
            avatar: "https://randomuser.me/api/portraits/women/3.jpg",
            course: "Advanced React Patterns",
            progress: 94,
            enrolled_date: "2024-01-12",
        },
        StudentRow {
            id: 4,
            name: "David Kim",
            email: "david.kim@email.com",
            avatar: "https://randomuser.me/api/portraits/men/4.jpg",
            course: "JavaScript Fundamentals",
            progress: 38,
            enrolled_date: "2024-01-25",
        },
    ]
}

#[must_use]
pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: 1,
            description: "Course Sales - Advanced React Patterns",
            amount: 2450,
            date: "Jan 28, 2024",
            status: PaymentStatus::Completed,
            course: Some("Advanced React Patterns"),
        },
        Payment {
            id: 2,
            description: "Course Sales - JavaScript Fundamentals",
            amount: 1890,
            date: "Jan 25, 2024",
            status: PaymentStatus::Completed,
            course: Some("JavaScript Fundamentals"),
        },
        Payment {
            id: 3,
            description: "Monthly Payout",
            amount: 15420,
            date: "Jan 31, 2024",
            status: PaymentStatus::Pending,
            course: None,
        },
        Payment {
            id: 4,
            description: "Course Sales - Advanced React Patterns",
            amount: 980,
            date: "Jan 22, 2024",
            status: PaymentStatus::Failed,
            course: Some("Advanced React Patterns"),
        },
    ]
}

#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: "enrollment",
            title: "New Student Enrollment",
            message: "Sarah Johnson enrolled in Advanced React Patterns",
            timestamp: "2 minutes ago",
            read: false,
        },
        Notification {
            id: 2,
            kind: "review",
            title: "New Course Review",
            message: "Michael Chen left a 5-star review for JavaScript Fundamentals",
            timestamp: "1 hour ago",
            read: false,
        },
        Notification {
            id: 3,
            kind: "payment",
            title: "Payment Received",
            message: "You received $245 from course sales",
            timestamp: "3 hours ago",
            read: true,
        },
    ]
}

/// Unread notification count shown on the bell.
#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Sort order for the student roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudentSort {
    #[default]
    Name,
    Progress,
    EnrolledDate,
}

/// Roster query decoded from the table's search box and column headers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentQuery {
    pub search: String,
    pub sort: StudentSort,
}

/// Filter and sort the roster.
#[must_use]
pub fn filter_students(rows: &[StudentRow], query: &StudentQuery) -> Vec<StudentRow> {
    let needle = query.search.to_lowercase();
    let mut rows: Vec<StudentRow> = rows
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.email.to_lowercase().contains(&needle)
                || s.course.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    match query.sort {
        StudentSort::Name => rows.sort_by(|a, b| a.name.cmp(b.name)),
        StudentSort::Progress => rows.sort_by(|a, b| b.progress.cmp(&a.progress)),
        StudentSort::EnrolledDate => rows.sort_by(|a, b| b.enrolled_date.cmp(a.enrolled_date)),
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count() {
        assert_eq!(unread_count(&notifications()), 2);
    }

    #[test]
    fn test_student_search_matches_course() {
        let query = StudentQuery {
            search: "javascript".to_string(),
            sort: StudentSort::Name,
        };
        let rows = filter_students(&students(), &query);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|s| s.course == "JavaScript Fundamentals"));
    }

    #[test]
    fn test_student_sort_progress_descending() {
        let query = StudentQuery {
            search: String::new(),
            sort: StudentSort::Progress,
        };
        let rows = filter_students(&students(), &query);
        let progress: Vec<u8> = rows.iter().map(|s| s.progress).collect();
        assert_eq!(progress, vec![94, 85, 62, 38]);
    }
}
