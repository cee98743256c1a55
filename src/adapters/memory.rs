use crate::domain::ports::TextSource;
use crate::utils::error::{RenderError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory content store. Paths not registered answer as missing.
#[derive(Debug, Default)]
pub struct StaticTextSource {
    texts: HashMap<String, String>,
    failing: HashSet<String>,
    failing_prefixes: Vec<String>,
    fail_all: bool,
    requested: Mutex<Vec<String>>,
}

impl StaticTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(path.into(), text.into());
        self
    }

    /// Makes `path` fail as if the store were unreachable.
    pub fn with_failure(mut self, path: impl Into<String>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Makes every path under `prefix` fail as if the store were unreachable.
    pub fn with_failing_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.failing_prefixes.push(prefix.into());
        self
    }

    pub fn failing_everything(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Paths requested so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }

    fn fails(&self, path: &str) -> bool {
        self.fail_all
            || self.failing.contains(path)
            || self
                .failing_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

#[async_trait]
impl TextSource for StaticTextSource {
    async fn get_text(&self, path: &str) -> Result<Option<String>> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(path.to_string());
        }

        if self.fails(path) {
            return Err(RenderError::TransportError {
                path: path.to_string(),
                message: "simulated network error".to_string(),
            });
        }

        Ok(self.texts.get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_answers_and_records() {
        let source = StaticTextSource::new()
            .with_text("texts/home/page-title.txt", "Hei")
            .with_failing_prefix("texts/about/");

        tokio_test::block_on(async {
            assert_eq!(
                source.get_text("texts/home/page-title.txt").await.unwrap().as_deref(),
                Some("Hei")
            );
            assert_eq!(source.get_text("texts/home/intro-1.txt").await.unwrap(), None);
            assert!(source.get_text("texts/about/intro-1.txt").await.is_err());
        });

        assert_eq!(
            source.requested(),
            vec![
                "texts/home/page-title.txt",
                "texts/home/intro-1.txt",
                "texts/about/intro-1.txt"
            ]
        );
    }
}
