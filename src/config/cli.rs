use crate::config::toml_config::{ErrorHandlingConfig, OutputConfig, RenderConfig, SourceConfig};
use crate::config::CliConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

impl CliConfig {
    /// Loads the configuration file, if any, and applies the flags on top.
    pub fn resolve(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path);
                RenderConfig::from_file(path)?
            }
            None => RenderConfig::default(),
        };
        self.apply_to(&mut config);
        Ok(config)
    }

    fn apply_to(&self, config: &mut RenderConfig) {
        if let Some(page) = &self.page {
            config.site.page = Some(page.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.site.base_url = Some(base_url.clone());
        }
        if let Some(dir) = &self.content_dir {
            config.source = SourceConfig {
                r#type: "local".to_string(),
                root: Some(dir.clone()),
                timeout_seconds: config.source.timeout_seconds,
            };
        }
        if let Some(timeout) = self.timeout_seconds {
            config.source.timeout_seconds = Some(timeout);
        }
        if self.fail_on_transport_error {
            config.error_handling = Some(ErrorHandlingConfig {
                on_transport_error: Some("fail".to_string()),
            });
        }
        if self.output.is_some() || self.format.is_some() {
            let output = config.output.get_or_insert_with(OutputConfig::default);
            if let Some(path) = &self.output {
                output.path = Some(path.clone());
            }
            if let Some(format) = &self.format {
                output.format = Some(format.clone());
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.resolve()?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::OutputFormat;
    use crate::domain::model::{PageKind, TransportPolicy};
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_flags_without_file() {
        let cli = CliConfig::parse_from([
            "sivu-render",
            "--page",
            "contact",
            "--base-url",
            "https://example.fi/yhteystiedot.html",
            "--format",
            "json",
            "--fail-on-transport-error",
        ]);

        let config = cli.resolve().unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.page_kind(), PageKind::Contact);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.transport_policy(), TransportPolicy::Fail);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[site]
base_url = "https://example.fi/"
page = "about"

[source]
timeout_seconds = 30
"#
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "sivu-render",
            "--config",
            file.path().to_str().unwrap(),
            "--content-dir",
            "./site",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.page_kind(), PageKind::About);
        assert!(config.is_local());
        assert_eq!(config.source.root.as_deref(), Some("./site"));
        assert_eq!(config.source.timeout_seconds, Some(30));
    }

    #[test]
    fn test_invalid_page_fails_validation() {
        let cli = CliConfig::parse_from([
            "sivu-render",
            "--page",
            "blog",
            "--base-url",
            "https://example.fi/",
        ]);

        assert!(cli.validate().is_err());
    }
}
