use crate::utils::error::{Result, SiteError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 只允許數字，長度介於 min..=max（國際電話號碼格式）
pub fn validate_digit_string(field_name: &str, value: &str, min: usize, max: usize) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must contain digits only".to_string(),
        });
    }
    validate_range(field_name, value.len(), min, max)
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("business.messaging_base_url", "https://wa.me").is_ok());
        assert!(validate_url("business.messaging_base_url", "http://example.com").is_ok());
        assert!(validate_url("business.messaging_base_url", "").is_err());
        assert!(validate_url("business.messaging_base_url", "invalid-url").is_err());
        assert!(validate_url("business.messaging_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_digit_string() {
        assert!(validate_digit_string("business.whatsapp_number", "526691517346", 8, 15).is_ok());
        assert!(validate_digit_string("business.whatsapp_number", "+52669", 8, 15).is_err());
        assert!(validate_digit_string("business.whatsapp_number", "1234", 8, 15).is_err());
        assert!(validate_digit_string("business.whatsapp_number", "", 8, 15).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timing.toast_duration", 3000, 1).is_ok());
        assert!(validate_positive_number("timing.toast_duration", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("services.otro", "Otro servicio").is_ok());
        assert!(validate_non_empty_string("services.otro", "   ").is_err());
    }
}
