//! Form Validation
//!
//! Client-side checks run before any auth request is sent.
//! Each field reports only its first failing rule.

use crate::models::{LoginForm, SignupForm};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupErrors {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.username.is_none() && self.password.is_none()
    }
}

/// Length in UTF-16 code units, matching JavaScript's `String.length`
fn len(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn validate_login(form: &LoginForm) -> LoginErrors {
    let username = if form.username.trim().is_empty() {
        Some("Username is required")
    } else if len(&form.username) < 3 {
        Some("Username must be at least 3 characters")
    } else {
        None
    };

    let password = if form.password.is_empty() {
        Some("Password is required")
    } else if len(&form.password) < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    };

    LoginErrors {
        username: username.map(String::from),
        password: password.map(String::from),
    }
}

pub fn validate_signup(form: &SignupForm) -> SignupErrors {
    let full_name = if form.full_name.trim().is_empty() {
        Some("Full name is required")
    } else if len(form.full_name.trim()) < 2 {
        Some("Full name must be at least 2 characters")
    } else if !form.full_name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        Some("Full name should only contain letters and spaces")
    } else {
        None
    };

    let username = if form.username.trim().is_empty() {
        Some("Username is required")
    } else if len(&form.username) < 3 {
        Some("Username must be at least 3 characters")
    } else if len(&form.username) > 20 {
        Some("Username must be less than 20 characters")
    } else if !form.username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some("Username can only contain letters, numbers, and underscores")
    } else {
        None
    };

    let password = if form.password.is_empty() {
        Some("Password is required")
    } else if len(&form.password) < 8 {
        Some("Password must be at least 8 characters")
    } else if !form.password.chars().any(|c| c.is_ascii_lowercase()) {
        Some("Password must contain at least one lowercase letter")
    } else if !form.password.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password must contain at least one uppercase letter")
    } else if !form.password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one number")
    } else {
        None
    };

    SignupErrors {
        full_name: full_name.map(String::from),
        username: username.map(String::from),
        password: password.map(String::from),
    }
}
