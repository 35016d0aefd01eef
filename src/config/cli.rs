use crate::config::settings::DashboardSettings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::validate_delimiter;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "spacex-dash")]
#[command(about = "Interactive dashboard for SpaceX launch records")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Launch dataset (delimited text with a header row)
    #[arg(long)]
    pub data: Option<String>,

    /// Address the dashboard listens on
    #[arg(long)]
    pub bind: Option<String>,

    /// Column delimiter of the dataset
    #[arg(long)]
    pub delimiter: Option<char>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Log process CPU/memory usage")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併預設值、TOML 檔案與命令列參數 (命令列優先)
    pub fn resolve(&self) -> Result<DashboardSettings> {
        let mut settings = match &self.config {
            Some(path) => DashboardSettings::from_toml(&TomlConfig::from_file(path)?)?,
            None => DashboardSettings::default(),
        };

        if let Some(data) = &self.data {
            settings.dataset_path = data.clone();
        }
        if let Some(bind) = &self.bind {
            settings.bind = bind.clone();
        }
        if let Some(delimiter) = self.delimiter {
            settings.delimiter = validate_delimiter("--delimiter", delimiter)?;
        }
        settings.json_logs |= self.json_logs;
        settings.verbose |= self.verbose;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::try_parse_from(["spacex-dash"]).unwrap();
        let settings = cli.resolve().unwrap();
        assert_eq!(settings, DashboardSettings::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[server]
bind = "0.0.0.0:9000"

[dataset]
path = "from-file.csv"

[logging]
json = true
"#,
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = CliConfig::try_parse_from([
            "spacex-dash",
            "--config",
            path.as_str(),
            "--data",
            "from-cli.csv",
            "--delimiter",
            ";",
        ])
        .unwrap();

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.bind, "0.0.0.0:9000");
        assert_eq!(settings.dataset_path, "from-cli.csv");
        assert_eq!(settings.delimiter, b';');
        assert!(settings.json_logs);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::try_parse_from(["spacex-dash", "-c", "/nonexistent/dash.toml"]).unwrap();
        assert!(cli.resolve().is_err());
    }
}
