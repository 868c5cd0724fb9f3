use crate::domain::model::ServiceCatalog;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub business: BusinessConfig,
    pub timing: TimingConfig,
    pub services: ServiceCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub name: String,
    pub whatsapp_number: String,
    pub messaging_base_url: String,
    pub site_url: String,
    pub share_text: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Concordia Digital".to_string(),
            whatsapp_number: "526691517346".to_string(),
            messaging_base_url: "https://wa.me".to_string(),
            site_url: "https://concordiadigital.mx/".to_string(),
            share_text: "¡Servicios técnicos profesionales en Concordia, Sinaloa!".to_string(),
        }
    }
}

/// 所有時間皆以毫秒表示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub submit_cooldown: u64,
    pub processing_delay: u64,
    pub redirect_delay: u64,
    pub cleanup_delay: u64,
    pub message_duration: u64,
    pub toast_duration: u64,
    pub toast_enter_delay: u64,
    pub toast_exit_delay: u64,
    pub animation_duration: u64,
    pub counter_duration: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_cooldown: 5000,
            processing_delay: 1000,
            redirect_delay: 1500,
            cleanup_delay: 2000,
            message_duration: 5000,
            toast_duration: 3000,
            toast_enter_delay: 100,
            toast_exit_delay: 300,
            animation_duration: 800,
            counter_duration: 2000,
        }
    }
}

impl TimingConfig {
    pub fn submit_cooldown(&self) -> Duration {
        Duration::from_millis(self.submit_cooldown)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay)
    }

    pub fn cleanup_delay(&self) -> Duration {
        Duration::from_millis(self.cleanup_delay)
    }

    pub fn message_duration(&self) -> Duration {
        Duration::from_millis(self.message_duration)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration)
    }

    pub fn toast_enter_delay(&self) -> Duration {
        Duration::from_millis(self.toast_enter_delay)
    }

    pub fn toast_exit_delay(&self) -> Duration {
        Duration::from_millis(self.toast_exit_delay)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration)
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"))
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WHATSAPP_NUMBER})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 交接網址：`{messaging_base_url}/{whatsapp_number}`
    pub fn handoff_base(&self) -> Result<Url> {
        let base = self.business.messaging_base_url.trim_end_matches('/');
        let url = Url::parse(&format!("{}/{}", base, self.business.whatsapp_number))?;
        Ok(url)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url(
            "business.messaging_base_url",
            &self.business.messaging_base_url,
        )?;
        validation::validate_digit_string(
            "business.whatsapp_number",
            &self.business.whatsapp_number,
            8,
            15,
        )?;
        validation::validate_url("business.site_url", &self.business.site_url)?;
        validation::validate_non_empty_string("business.name", &self.business.name)?;

        let t = &self.timing;
        for (field, value) in [
            ("timing.submit_cooldown", t.submit_cooldown),
            ("timing.message_duration", t.message_duration),
            ("timing.toast_duration", t.toast_duration),
            ("timing.animation_duration", t.animation_duration),
            ("timing.counter_duration", t.counter_duration),
        ] {
            validation::validate_positive_number(field, value, 1)?;
        }
        // toast 必須在隱藏前出現
        validation::validate_range(
            "timing.toast_enter_delay",
            t.toast_enter_delay,
            0,
            t.toast_duration,
        )?;

        if self.services.is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "services".to_string(),
            });
        }
        for (code, label) in self.services.iter() {
            validation::validate_non_empty_string("services", code)?;
            validation::validate_non_empty_string(&format!("services.{}", code), label)?;
        }

        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.timing.submit_cooldown(), Duration::from_millis(5000));
        assert_eq!(config.timing.toast_duration(), Duration::from_millis(3000));
        assert_eq!(
            config.handoff_base().unwrap().as_str(),
            "https://wa.me/526691517346"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let toml_content = r#"
[business]
whatsapp_number = "5215512345678"

[timing]
submit_cooldown = 8000

[services]
reparacion = "Reparación de PC"
diseno = "Diseño Web"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.business.whatsapp_number, "5215512345678");
        assert_eq!(config.business.messaging_base_url, "https://wa.me");
        assert_eq!(config.timing.submit_cooldown, 8000);
        assert_eq!(config.timing.redirect_delay, 1500);
        assert_eq!(config.services.label_for("diseno"), "Diseño Web");
        assert_eq!(config.services.label_for("redes"), "redes");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONCORDIA_TEST_NUMBER", "526690000000");

        let toml_content = r#"
[business]
whatsapp_number = "${CONCORDIA_TEST_NUMBER}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.business.whatsapp_number, "526690000000");

        std::env::remove_var("CONCORDIA_TEST_NUMBER");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[business]
whatsapp_number = "not-a-number"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[business]
messaging_base_url = "ftp://wa.me"
"#;
        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("[timing]\nsubmit_cooldown = \"soon\"").unwrap_err();
        assert!(matches!(err, SiteError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[business]
name = "File Test"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.business.name, "File Test");
    }
}
