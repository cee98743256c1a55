use crate::domain::ports::TextSource;
use crate::utils::error::{RenderError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Content store on the local filesystem, e.g. a checked-out site directory.
#[derive(Debug, Clone)]
pub struct LocalTextSource {
    root: PathBuf,
}

impl LocalTextSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `path` under the root, refusing anything that could escape it.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        safe.then(|| self.root.join(relative))
    }
}

#[async_trait]
impl TextSource for LocalTextSource {
    async fn get_text(&self, path: &str) -> Result<Option<String>> {
        let Some(full_path) = self.resolve(path) else {
            tracing::warn!("Refusing content path outside the store: {}", path);
            return Ok(None);
        };

        tracing::debug!("Reading {}", full_path.display());
        match tokio::fs::read(&full_path).await {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RenderError::TransportError {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
