//! Badge component for status indicators and tags.

use leptos::prelude::*;

use crate::catalog::Level;
use crate::instructor::{CourseStatus, PaymentStatus};

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default badge style.
    #[default]
    Default,
    /// Success/positive badge.
    Success,
    /// Warning badge.
    Warning,
    /// Error/destructive badge.
    Error,
    /// Outline badge.
    Outline,
    /// Secondary badge.
    Secondary,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-indigo-600 text-white",
            Self::Success => "bg-emerald-100 text-emerald-800",
            Self::Warning => "bg-amber-100 text-amber-800",
            Self::Error => "bg-red-100 text-red-800",
            Self::Outline => "border border-slate-300 bg-transparent text-slate-700",
            Self::Secondary => "bg-slate-100 text-slate-700",
        }
    }
}

impl From<Level> for BadgeVariant {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Self::Success,
            Level::Intermediate => Self::Warning,
            Level::Advanced => Self::Error,
        }
    }
}

impl From<CourseStatus> for BadgeVariant {
    fn from(status: CourseStatus) -> Self {
        match status {
            CourseStatus::Published => Self::Success,
            CourseStatus::Draft => Self::Secondary,
        }
    }
}

impl From<PaymentStatus> for BadgeVariant {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Completed => Self::Success,
            PaymentStatus::Pending => Self::Warning,
            PaymentStatus::Failed => Self::Error,
        }
    }
}

/// Badge component for displaying status or labels.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Success>"Beginner"</Badge>
///     <Badge variant=BadgeVariant::Warning>"Pending"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold \
                        transition-colors";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
