//! Client-side form rules. Each check returns every failing field at once,
//! keyed by the same field names the forms use.

use std::sync::LazyLock;

use regex::Regex;
use shared::error::FieldErrors;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const PHONE_PATTERN: &str = r"^[0-9]{10}$";

pub const MIN_AGE: u32 = 18;
pub const OTP_LENGTH: usize = 6;
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Whole years from the leading digits, ignoring anything after them:
/// `"18.9"` is 18 and `"1e2"` is 1. `None` without leading digits or for a
/// negative number.
pub fn parse_age(raw: &str) -> Option<u32> {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let years = digits[..end].parse::<u32>().ok()?;
    if negative && years > 0 {
        return None;
    }
    Some(years)
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email");
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert("password", "Password must be at least 6 characters");
    }
}

pub fn validate_details(full_name: &str, email: &str, phone: &str, age: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if full_name.is_empty() {
        errors.insert("fullName", "Full name is required");
    }

    check_email(&mut errors, email);

    if phone.is_empty() {
        errors.insert("phone", "Phone number is required");
    } else if !is_valid_phone(phone) {
        errors.insert("phone", "Please enter a valid phone number");
    }

    if age.is_empty() {
        errors.insert("age", "Age is required");
    } else if parse_age(age).map_or(true, |years| years < MIN_AGE) {
        errors.insert("age", "You must be at least 18 years old");
    }

    errors
}

/// Length only; the code is checked by the server when registering.
pub fn validate_otp(otp: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if otp.is_empty() {
        errors.insert("otp", "OTP is required");
    } else if otp.chars().count() != OTP_LENGTH {
        errors.insert("otp", "OTP must be 6 digits");
    }
    errors
}

pub fn validate_passwords(password: &str, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_password(&mut errors, password);

    if confirm_password.is_empty() {
        errors.insert("confirmPassword", "Confirm password is required");
    } else if confirm_password != password {
        errors.insert("confirmPassword", "Passwords do not match");
    }
    errors
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    errors
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
