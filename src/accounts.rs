//! Demo accounts: hardcoded credentials, form validation, password strength.
//!
//! There is no auth backend. "Logging in" compares the submitted fields
//! against two literal demo users and, on a match, writes the user into the
//! visitor's session.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Loose email shape check, same as the original's `/\S+@\S+\.\S+/`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex"));

/// Account role. Drives navigation and which dashboard a login lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    /// Value stored in the session (`userRole` in the original).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
        }
    }

    /// Dashboard route for this role.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Student => "/student-dashboard",
            Self::Instructor => "/instructor-dashboard",
        }
    }
}

/// A hardcoded demo account.
#[derive(Debug, Clone, Copy)]
pub struct DemoUser {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub display_name: &'static str,
}

/// The two demo accounts advertised on the login page.
pub const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        email: "student@edumarket.com",
        password: "student123",
        role: Role::Student,
        display_name: "John Doe",
    },
    DemoUser {
        email: "instructor@edumarket.com",
        password: "instructor123",
        role: Role::Instructor,
        display_name: "Sarah Wilson",
    },
];

/// Match submitted credentials against the demo accounts.
#[must_use]
pub fn authenticate(email: &str, password: &str) -> Option<&'static DemoUser> {
    DEMO_USERS
        .iter()
        .find(|u| u.email == email && u.password == password)
}

/// The "invalid credentials" banner, listing the demo accounts like the
/// original alert did.
#[must_use]
pub fn invalid_credentials_message() -> String {
    format!(
        "Invalid credentials. Use: Student: {} / {} or Instructor: {} / {}",
        DEMO_USERS[0].email, DEMO_USERS[0].password, DEMO_USERS[1].email, DEMO_USERS[1].password,
    )
}

/// A field-level validation error rendered inline under the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Submitted login form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Validate the login form fields (shape only; credential matching is
/// separate).
#[must_use]
pub fn validate_login(form: &LoginForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.email.is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Email is required",
        });
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address",
        });
    }
    if form.password.is_empty() {
        errors.push(FieldError {
            field: "password",
            message: "Password is required",
        });
    }
    errors
}

/// Submitted registration form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: String,
    pub accept_terms: bool,
}

/// Validate the registration form.
#[must_use]
pub fn validate_register(form: &RegisterForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "Full name is required",
        });
    }
    if form.email.is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Email is required",
        });
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address",
        });
    }
    if form.password.is_empty() {
        errors.push(FieldError {
            field: "password",
            message: "Password is required",
        });
    } else if form.password.len() < 8 {
        errors.push(FieldError {
            field: "password",
            message: "Password must be at least 8 characters long",
        });
    }
    if form.confirm_password.is_empty() {
        errors.push(FieldError {
            field: "confirm_password",
            message: "Please confirm your password",
        });
    } else if form.password != form.confirm_password {
        errors.push(FieldError {
            field: "confirm_password",
            message: "Passwords do not match",
        });
    }
    if !form.accept_terms {
        errors.push(FieldError {
            field: "accept_terms",
            message: "You must accept the terms and conditions",
        });
    }
    errors
}

/// Password strength bucket shown by the registration meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

/// One point each for length >= 8, uppercase, lowercase, digit, symbol.
#[must_use]
pub fn password_score(password: &str) -> u8 {
    let mut score = 0;
    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Bucket a score: <=2 Weak, 3 Medium, >=4 Strong.
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    match password_score(password) {
        0..=2 => PasswordStrength::Weak,
        3 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_demo_users() {
        let user = authenticate("student@edumarket.com", "student123").unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.display_name, "John Doe");

        let user = authenticate("instructor@edumarket.com", "instructor123").unwrap();
        assert_eq!(user.role, Role::Instructor);

        assert!(authenticate("student@edumarket.com", "wrong").is_none());
        assert!(authenticate("nobody@edumarket.com", "student123").is_none());
    }

    #[test]
    fn test_login_validation() {
        let empty = LoginForm::default();
        let errors = validate_login(&empty);
        assert_eq!(errors.len(), 2);

        let bad_email = LoginForm {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
            remember_me: false,
        };
        let errors = validate_login(&bad_email);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_register_validation() {
        let form = RegisterForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            user_type: "student".to_string(),
            accept_terms: true,
        };
        let errors = validate_register(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");

        let mismatched = RegisterForm {
            password: "longenough1".to_string(),
            confirm_password: "different1".to_string(),
            ..form
        };
        let errors = validate_register(&mismatched);
        assert!(errors.iter().any(|e| e.field == "confirm_password"));
    }

    #[test]
    fn test_password_strength_buckets() {
        // length<8, only lowercase -> 1 point -> Weak
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        // upper+lower+digit+symbol, length>=8 -> 5 points -> Strong
        assert_eq!(password_strength("Abcdef1!"), PasswordStrength::Strong);
        // lower+digit, length>=8 -> 3 points -> Medium
        assert_eq!(password_strength("abcdefg1"), PasswordStrength::Medium);
    }

    #[test]
    fn test_role_slugs() {
        assert_eq!(Role::Student.slug(), "student");
        assert_eq!(Role::Instructor.dashboard_path(), "/instructor-dashboard");
    }
}
