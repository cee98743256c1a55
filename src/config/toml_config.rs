use crate::adapters::{HttpTextSource, LocalTextSource};
use crate::domain::model::{PageKind, TransportPolicy};
use crate::domain::ports::TextSource;
use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub source: SourceConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Location of the page; content paths and the hero image resolve against it.
    pub base_url: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_type")]
    pub r#type: String,
    pub root: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            r#type: default_source_type(),
            root: None,
            timeout_seconds: None,
        }
    }
}

fn default_source_type() -> String {
    "http".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_transport_error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

const SOURCE_TYPES: &[&str] = &["http", "local"];
const TRANSPORT_POLICIES: &[&str] = &["empty", "fail"];
const OUTPUT_FORMATS: &[&str] = &["html", "json"];
const PAGES: &[&str] = &["home", "about", "contact"];

impl RenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RenderError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| RenderError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn page_kind(&self) -> PageKind {
        PageKind::from_marker(self.site.page.as_deref())
    }

    pub fn transport_policy(&self) -> TransportPolicy {
        match self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_transport_error.as_deref())
        {
            Some("fail") => TransportPolicy::Fail,
            _ => TransportPolicy::Empty,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Html,
        }
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }

    pub fn is_local(&self) -> bool {
        self.source.r#type == "local"
    }

    /// The document base URL. A local store without an explicit base URL
    /// uses its root directory.
    pub fn base_url(&self) -> Result<Url> {
        if let Some(base_url) = &self.site.base_url {
            return Ok(Url::parse(base_url)?);
        }

        if self.is_local() {
            let root = validation::validate_required_field("source.root", &self.source.root)?;
            let absolute = std::fs::canonicalize(root)?;
            return Url::from_directory_path(&absolute).map_err(|_| RenderError::ConfigError {
                message: format!("Cannot express {} as a URL", absolute.display()),
            });
        }

        Err(RenderError::MissingConfigError {
            field: "site.base_url".to_string(),
        })
    }

    pub fn build_source(&self) -> Result<Box<dyn TextSource>> {
        if self.is_local() {
            let root = validation::validate_required_field("source.root", &self.source.root)?;
            tracing::debug!("Using local content store at {}", root);
            return Ok(Box::new(LocalTextSource::new(root)));
        }

        let base_url = self.base_url()?;
        tracing::debug!("Using HTTP content store at {}", base_url);
        Ok(Box::new(HttpTextSource::with_timeout(base_url, self.timeout())?))
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("source.type", &self.source.r#type, SOURCE_TYPES)?;

        if let Some(base_url) = &self.site.base_url {
            validation::validate_url("site.base_url", base_url)?;
        } else if !self.is_local() {
            return Err(RenderError::MissingConfigError {
                field: "site.base_url".to_string(),
            });
        }

        if let Some(page) = &self.site.page {
            validation::validate_one_of("site.page", page, PAGES)?;
        }

        if self.is_local() {
            let root = validation::validate_required_field("source.root", &self.source.root)?;
            validation::validate_path("source.root", root)?;
        }

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        if let Some(policy) = self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_transport_error.as_deref())
        {
            validation::validate_one_of("error_handling.on_transport_error", policy, TRANSPORT_POLICIES)?;
        }

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                validation::validate_one_of("output.format", format, OUTPUT_FORMATS)?;
            }
            if let Some(path) = &output.path {
                validation::validate_path("output.path", path)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = RenderConfig::from_toml_str(
            r#"
[site]
base_url = "https://example.fi/about.html"
page = "about"

[source]
type = "http"
timeout_seconds = 10

[error_handling]
on_transport_error = "fail"

[output]
format = "json"
path = "out.json"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.page_kind(), PageKind::About);
        assert_eq!(config.transport_policy(), TransportPolicy::Fail);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("out.json"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://example.fi/about.html"
        );
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = RenderConfig::from_toml_str(
            r#"
[site]
base_url = "http://localhost:8080/"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.source.r#type, "http");
        assert_eq!(config.page_kind(), PageKind::Home);
        assert_eq!(config.transport_policy(), TransportPolicy::Empty);
        assert_eq!(config.output_format(), OutputFormat::Html);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SIVU_RENDER_TEST_BASE", "https://staging.example.fi/");
        let config = RenderConfig::from_toml_str(
            r#"
[site]
base_url = "${SIVU_RENDER_TEST_BASE}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.site.base_url.as_deref(),
            Some("https://staging.example.fi/")
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let missing_base = RenderConfig::default();
        assert!(matches!(
            missing_base.validate(),
            Err(RenderError::MissingConfigError { .. })
        ));

        let bad_policy = RenderConfig::from_toml_str(
            r#"
[site]
base_url = "https://example.fi/"

[error_handling]
on_transport_error = "retry"
"#,
        )
        .unwrap();
        assert!(bad_policy.validate().is_err());

        let local_without_root = RenderConfig::from_toml_str(
            r#"
[source]
type = "local"
"#,
        )
        .unwrap();
        assert!(local_without_root.validate().is_err());
    }

    #[test]
    fn test_local_source_base_url_from_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = RenderConfig::from_toml_str(&format!(
            r#"
[source]
type = "local"
root = "{}"
"#,
            dir.path().display().to_string().replace('\\', "/")
        ))
        .unwrap();

        assert!(config.validate().is_ok());
        let base = config.base_url().unwrap();
        assert_eq!(base.scheme(), "file");
        assert!(base.as_str().ends_with('/'));
        assert!(config.build_source().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = RenderConfig::from_toml_str("[site").unwrap_err();
        assert!(matches!(err, RenderError::ConfigError { .. }));
    }
}
