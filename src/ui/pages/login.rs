//! Login/registration page and its HTMX form fragments.

use leptos::prelude::*;

use crate::accounts::{DEMO_USERS, FieldError, LoginForm, RegisterForm};
use crate::ui::components::{BreadcrumbTrail, Button, GlobeIcon, Input, Textarea};

/// Supported UI languages.
pub const LANGUAGES: [(&str, &str); 3] = [("en", "English"), ("es", "Español"), ("fr", "Français")];

fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

fn field_error_view(errors: &[FieldError], field: &str) -> impl IntoView {
    error_for(errors, field)
        .map(|message| {
            view! { <p class="mt-1 text-xs text-red-600">{message.to_string()}</p> }
        })
}

/// Which pane of the auth card is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

/// Full page body.
#[must_use]
pub fn page(language: &str) -> String {
    let card = auth_card(AuthTab::Login);
    let language = language.to_string();

    view! {
        <div class="max-w-md mx-auto">
            <BreadcrumbTrail path="/login-register" />

            <div class="flex justify-end mb-4">
                <form hx-post="/api/language" hx-trigger="change" hx-swap="none" class="flex items-center gap-2">
                    <GlobeIcon class="text-slate-400" />
                    <select
                        name="language"
                        class="text-sm text-slate-600 bg-transparent border-0 focus:outline-none cursor-pointer"
                    >
                        {LANGUAGES
                            .iter()
                            .map(|(code, label)| {
                                let selected = *code == language;
                                view! {
                                    <option value=*code selected=selected>{*label}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </form>
            </div>

            <div inner_html=card></div>

            <div class="mt-6 rounded-xl border border-indigo-100 bg-indigo-50 p-4 text-sm">
                <p class="font-medium text-indigo-900 mb-2">"Demo credentials"</p>
                {DEMO_USERS
                    .iter()
                    .map(|u| {
                        view! {
                            <p class="text-indigo-800">
                                <span class="capitalize">{u.role.slug()}</span>
                                ": "
                                <code class="text-xs">{u.email}</code>
                                " / "
                                <code class="text-xs">{u.password}</code>
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .to_html()
}

/// Tabbed auth card. Tab clicks swap the whole card so the active tab
/// styling travels with the panel.
#[must_use]
pub fn auth_card(tab: AuthTab) -> String {
    let active = "py-3 text-sm font-medium text-indigo-600 border-b-2 border-indigo-600";
    let inactive = "py-3 text-sm font-medium text-slate-500 hover:text-slate-900 transition-colors";
    let (login_class, register_class) = match tab {
        AuthTab::Login => (active, inactive),
        AuthTab::Register => (inactive, active),
    };
    let panel = match tab {
        AuthTab::Login => login_form(&LoginForm::default(), &[], None),
        AuthTab::Register => register_form(&RegisterForm::default(), &[]),
    };

    view! {
        <div id="auth-card" class="rounded-xl border border-slate-200 bg-white shadow-sm overflow-hidden">
            <div class="grid grid-cols-2 border-b border-slate-200">
                <button
                    type="button"
                    class=login_class
                    hx-get="/api/auth/login"
                    hx-target="#auth-card"
                    hx-swap="outerHTML"
                >
                    "Sign In"
                </button>
                <button
                    type="button"
                    class=register_class
                    hx-get="/api/auth/register"
                    hx-target="#auth-card"
                    hx-swap="outerHTML"
                >
                    "Create Account"
                </button>
            </div>
            <div class="p-6" inner_html=panel></div>
        </div>
    }
    .to_html()
}

/// Login form fragment, re-rendered on failed submits.
#[must_use]
pub fn login_form(form: &LoginForm, errors: &[FieldError], banner: Option<&str>) -> String {
    let email = form.email.clone();
    let remember = form.remember_me;
    let banner = banner.map(ToString::to_string);

    view! {
        <form
            id="login-form"
            hx-post="/api/login"
            hx-target="#login-form"
            hx-swap="outerHTML"
            class="space-y-4"
        >
            {banner
                .map(|message| {
                    view! {
                        <div class="rounded-lg border border-red-200 bg-red-50 p-3 text-sm text-red-800">
                            {message}
                        </div>
                    }
                })}

            <div>
                <label for="login-email" class="block text-sm font-medium text-slate-700 mb-1">
                    "Email"
                </label>
                <Input
                    input_type="email"
                    id="login-email"
                    name="email"
                    value=email
                    placeholder="you@example.com"
                    autocomplete="email"
                />
                {field_error_view(errors, "email")}
            </div>

            <div>
                <label for="login-password" class="block text-sm font-medium text-slate-700 mb-1">
                    "Password"
                </label>
                <Input
                    input_type="password"
                    id="login-password"
                    name="password"
                    placeholder="Enter your password"
                    autocomplete="current-password"
                />
                {field_error_view(errors, "password")}
            </div>

            <label class="flex items-center gap-2 text-sm text-slate-600">
                <input type="checkbox" name="remember_me" value="true" checked=remember class="rounded border-slate-300" />
                "Remember me"
            </label>

            <Button button_type="submit" class="w-full">"Sign In"</Button>
        </form>
    }
    .to_html()
}

/// Registration form fragment, re-rendered with inline errors.
#[must_use]
pub fn register_form(form: &RegisterForm, errors: &[FieldError]) -> String {
    let name = form.name.clone();
    let email = form.email.clone();
    let is_instructor = form.user_type == "instructor";
    let accepted = form.accept_terms;

    view! {
        <form
            id="register-form"
            hx-post="/api/register"
            hx-target="#register-form"
            hx-swap="outerHTML"
            class="space-y-4"
        >
            <div>
                <label for="register-name" class="block text-sm font-medium text-slate-700 mb-1">
                    "Full name"
                </label>
                <Input
                    id="register-name"
                    name="name"
                    value=name
                    placeholder="Jane Doe"
                    autocomplete="name"
                />
                {field_error_view(errors, "name")}
            </div>

            <div>
                <label for="register-email" class="block text-sm font-medium text-slate-700 mb-1">
                    "Email"
                </label>
                <Input
                    input_type="email"
                    id="register-email"
                    name="email"
                    value=email
                    placeholder="you@example.com"
                    autocomplete="email"
                />
                {field_error_view(errors, "email")}
            </div>

            <div>
                <label for="register-password" class="block text-sm font-medium text-slate-700 mb-1">
                    "Password"
                </label>
                <input
                    type="password"
                    id="register-password"
                    name="password"
                    placeholder="At least 8 characters"
                    autocomplete="new-password"
                    hx-post="/api/password-strength"
                    hx-trigger="input changed delay:300ms"
                    hx-target="#password-strength"
                    hx-swap="innerHTML"
                    class="flex h-10 w-full rounded-lg border border-slate-300 bg-white px-3 py-2 text-sm placeholder:text-slate-400 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500"
                />
                <div id="password-strength"></div>
                {field_error_view(errors, "password")}
            </div>

            <div>
                <label for="register-confirm" class="block text-sm font-medium text-slate-700 mb-1">
                    "Confirm password"
                </label>
                <Input
                    input_type="password"
                    id="register-confirm"
                    name="confirm_password"
                    placeholder="Repeat your password"
                    autocomplete="new-password"
                />
                {field_error_view(errors, "confirm_password")}
            </div>

            <div>
                <span class="block text-sm font-medium text-slate-700 mb-1">"I want to"</span>
                <div class="grid grid-cols-2 gap-2">
                    <label class="flex items-center gap-2 rounded-lg border border-slate-300 px-3 py-2 text-sm cursor-pointer has-[:checked]:border-indigo-500 has-[:checked]:bg-indigo-50">
                        <input type="radio" name="user_type" value="student" checked=!is_instructor />
                        "Learn"
                    </label>
                    <label class="flex items-center gap-2 rounded-lg border border-slate-300 px-3 py-2 text-sm cursor-pointer has-[:checked]:border-indigo-500 has-[:checked]:bg-indigo-50">
                        <input type="radio" name="user_type" value="instructor" checked=is_instructor />
                        "Teach"
                    </label>
                </div>
            </div>

            <div>
                <label class="flex items-center gap-2 text-sm text-slate-600">
                    <input type="checkbox" name="accept_terms" value="true" checked=accepted class="rounded border-slate-300" />
                    "I accept the terms and conditions"
                </label>
                {field_error_view(errors, "accept_terms")}
            </div>

            <Button button_type="submit" class="w-full">"Create Account"</Button>
        </form>
    }
    .to_html()
}

/// Instructor verification step, shown after a valid instructor registration.
/// Both actions complete the signup; verification itself is skippable.
#[must_use]
pub fn verification_step(name: &str, email: &str) -> String {
    let name = name.to_string();
    let email = email.to_string();

    view! {
        <div id="register-form" class="space-y-4">
            <h3 class="text-lg font-semibold">"Instructor verification"</h3>
            <p class="text-sm text-slate-600">
                "Tell us about your teaching experience so we can verify your instructor profile. \
                 You can also skip this step and complete it later."
            </p>
            <form hx-post="/api/register/complete" hx-swap="none" class="space-y-4">
                <input type="hidden" name="name" value=name />
                <input type="hidden" name="email" value=email />
                <Textarea name="expertise" rows=3 placeholder="Your area of expertise" />
                <div class="flex gap-2">
                    <Button button_type="submit" class="flex-1">"Submit for Verification"</Button>
                    <button
                        type="submit"
                        name="skip"
                        value="true"
                        class="h-10 px-4 rounded-lg border border-slate-300 text-sm text-slate-600 hover:bg-slate-50 transition-colors"
                    >
                        "Skip for now"
                    </button>
                </div>
            </form>
        </div>
    }
    .to_html()
}

/// Password strength meter fragment.
#[must_use]
pub fn strength_meter(password: &str) -> String {
    use crate::accounts::{PasswordStrength, password_strength};

    if password.is_empty() {
        return String::new();
    }
    let strength = password_strength(password);
    let (bar, text) = match strength {
        PasswordStrength::Weak => ("w-1/3 bg-red-500", "text-red-600"),
        PasswordStrength::Medium => ("w-2/3 bg-amber-500", "text-amber-600"),
        PasswordStrength::Strong => ("w-full bg-emerald-500", "text-emerald-600"),
    };
    let bar = format!("h-1 rounded-full transition-all {bar}");
    let text = format!("text-xs {text}");

    view! {
        <div class="mt-2 space-y-1">
            <div class="h-1 rounded-full bg-slate-200">
                <div class=bar></div>
            </div>
            <p class=text>{strength.label()}</p>
        </div>
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lists_demo_credentials() {
        let html = page("en");
        assert!(html.contains("student@edumarket.com"));
        assert!(html.contains("instructor@edumarket.com"));
    }

    #[test]
    fn test_login_form_shows_banner_and_keeps_email() {
        let form = LoginForm {
            email: "student@edumarket.com".to_string(),
            password: "wrong".to_string(),
            remember_me: false,
        };
        let html = login_form(&form, &[], Some("Invalid credentials"));
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("student@edumarket.com"));
    }

    #[test]
    fn test_auth_card_register_tab() {
        let html = auth_card(AuthTab::Register);
        assert!(html.contains("register-form"));
        assert!(!html.contains("login-form"));
    }

    #[test]
    fn test_strength_meter_buckets() {
        assert!(strength_meter("abc").contains("Weak"));
        assert!(strength_meter("Abcdef1!").contains("Strong"));
        assert!(strength_meter("").is_empty());
    }
}
