//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable, accessible UI components
//! inspired by shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`Input`], [`Textarea`]: Form fields
//! - [`Badge`]: Status badge/tag
//! - [`Avatar`]: User avatar with fallback
//! - [`BreadcrumbTrail`]: Path-derived breadcrumb navigation
//! - [`icons`]: SVG icon components

mod avatar;
mod badge;
mod breadcrumb;
mod button;
mod card;
mod icons;
mod input;

pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use breadcrumb::{BreadcrumbTrail, Crumb, trail};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
pub use input::{Input, Textarea};
