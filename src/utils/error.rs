use thiserror::Error;

/// 表單欄位驗證失敗的種類，依檢查順序排列
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required fields are missing (name, phone and message)")]
    MissingRequired,

    #[error("Name must be at least 3 characters long")]
    InvalidName,

    #[error("Phone contains characters outside digits, spaces, hyphens, parentheses and plus")]
    InvalidPhone,

    #[error("Phone must contain at least 10 digits")]
    PhoneTooShort,

    #[error("Email is not in a local@domain.tld shape")]
    InvalidEmail,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl ValidationError {
    /// 顯示給使用者的在地化訊息
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingRequired => "Por favor completa todos los campos requeridos.",
            ValidationError::InvalidName => "Por favor ingresa un nombre válido.",
            ValidationError::InvalidPhone => "Por favor ingresa un número de teléfono válido.",
            ValidationError::PhoneTooShort => "El teléfono debe tener al menos 10 dígitos.",
            ValidationError::InvalidEmail => "Por favor ingresa un email válido.",
            ValidationError::MessageTooShort => "El mensaje debe tener al menos 10 caracteres.",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Submission rejected: cooldown still active ({remaining_ms} ms remaining)")]
    RateLimited { remaining_ms: u64 },

    #[error("Submission rejected: {0}")]
    Validation(#[from] ValidationError),
}

impl SubmissionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::RateLimited { .. } => {
                "Por favor espera unos segundos antes de enviar otro mensaje."
            }
            SubmissionError::Validation(e) => e.user_message(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::Submission(_) => ErrorSeverity::Low,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::UrlError(_) => ErrorSeverity::High,
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::Submission(SubmissionError::RateLimited { remaining_ms }) => {
                format!("Wait {} ms and submit again", remaining_ms)
            }
            SiteError::Submission(SubmissionError::Validation(_)) => {
                "Correct the highlighted form field and submit again".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. }
            | SiteError::ConfigValidationError { field, .. }
            | SiteError::MissingConfigError { field } => {
                format!("Check the '{}' entry of the site configuration", field)
            }
            SiteError::UrlError(_) => "Check the site configuration file".to_string(),
            SiteError::IoError(_) => "Check file paths and permissions".to_string(),
            SiteError::SerializationError(_) => "Check the data being serialized".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::Submission(e) => e.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
