use crate::config::toml_config::TomlConfig;
use crate::core::layout::SliderSettings;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_delimiter, validate_path, validate_positive_number, validate_socket_addr, Validate,
};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";
pub const DEFAULT_DATASET_PATH: &str = "spacex_launch_dash.csv";

/// Effective dashboard settings after merging defaults, the TOML file and
/// command line flags (in that order).
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub bind: String,
    pub dataset_path: String,
    pub delimiter: u8,
    pub slider: SliderSettings,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
            delimiter: b',',
            slider: SliderSettings::default(),
            json_logs: false,
            verbose: false,
        }
    }
}

impl DashboardSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let mut settings = Self::default();
        settings.apply_toml(config)?;
        Ok(settings)
    }

    pub fn apply_toml(&mut self, config: &TomlConfig) -> Result<()> {
        if let Some(bind) = &config.server.bind {
            self.bind = bind.clone();
        }
        if let Some(path) = &config.dataset.path {
            self.dataset_path = path.clone();
        }
        if let Some(delimiter) = config.dataset.delimiter {
            self.delimiter = validate_delimiter("dataset.delimiter", delimiter)?;
        }
        if let Some(step) = config.slider.step {
            self.slider.step = step;
        }
        if let Some(interval) = config.slider.mark_interval {
            self.slider.mark_interval = interval;
        }
        if let Some(json) = config.logging.json {
            self.json_logs = json;
        }
        if let Some(verbose) = config.logging.verbose {
            self.verbose = verbose;
        }
        Ok(())
    }
}

impl ConfigProvider for DashboardSettings {
    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn dataset_path(&self) -> &str {
        &self.dataset_path
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
    }

    fn slider_step(&self) -> f64 {
        self.slider.step
    }

    fn slider_mark_interval(&self) -> f64 {
        self.slider.mark_interval
    }
}

impl Validate for DashboardSettings {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.bind)?;
        validate_path("dataset.path", &self.dataset_path)?;
        validate_delimiter("dataset.delimiter", char::from(self.delimiter))?;
        validate_positive_number("slider.step", self.slider.step)?;
        validate_positive_number("slider.mark_interval", self.slider.mark_interval)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DashError;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DashboardSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bind_addr(), "127.0.0.1:8050");
        assert_eq!(settings.dataset_path(), "spacex_launch_dash.csv");
        assert_eq!(settings.delimiter(), b',');
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[dataset]
delimiter = ";"

[slider]
step = 250
"#,
        )
        .unwrap();

        let settings = DashboardSettings::from_toml(&config).unwrap();
        assert_eq!(settings.delimiter, b';');
        assert_eq!(settings.slider_step(), 250.0);
        // 未設定的欄位維持預設值
        assert_eq!(settings.slider_mark_interval(), 2500.0);
        assert_eq!(settings.bind, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut settings = DashboardSettings {
            bind: "not-an-addr".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(DashError::InvalidConfigValueError { ref field, .. }) if field == "server.bind"
        ));

        settings.bind = DEFAULT_BIND_ADDR.to_string();
        settings.slider.step = 0.0;
        assert!(settings.validate().is_err());

        settings.slider.step = 1000.0;
        settings.dataset_path = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_non_ascii_delimiter_in_toml() {
        let config = TomlConfig::from_toml_str("[dataset]\ndelimiter = \"é\"\n").unwrap();
        assert!(DashboardSettings::from_toml(&config).is_err());
    }
}
