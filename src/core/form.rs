use crate::domain::model::{FormSnapshot, ValidatedSubmission};
use crate::utils::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_MESSAGE_CHARS: usize = 10;

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9\-\s()+]+$").expect("static regex"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"))
}

/// 去除前後空白；BOM (U+FEFF) 也算空白
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// 依固定順序檢查欄位，第一個失敗即回傳
pub fn validate_form(snapshot: &FormSnapshot) -> Result<ValidatedSubmission, ValidationError> {
    let name = trim_field(&snapshot.name);
    let phone = trim_field(&snapshot.phone);
    let email = trim_field(&snapshot.email);
    let message = trim_field(&snapshot.message);

    if name.is_empty() || phone.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingRequired);
    }

    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::InvalidName);
    }

    if !phone_pattern().is_match(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    if phone_digit_count(phone) < MIN_PHONE_DIGITS {
        return Err(ValidationError::PhoneTooShort);
    }

    if !email.is_empty() && !email_pattern().is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }

    Ok(ValidatedSubmission {
        name: name.to_string(),
        phone: phone.to_string(),
        email: (!email.is_empty()).then(|| email.to_string()),
        service: (!snapshot.service.is_empty()).then(|| snapshot.service.clone()),
        message: message.to_string(),
    })
}

pub fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}
