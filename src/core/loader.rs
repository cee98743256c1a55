use crate::core::fetcher::fetch_text;
use crate::domain::model::{DefaultMap, PathMap, ResolvedContent, TransportPolicy};
use crate::domain::ports::TextSource;
use crate::utils::error::{RenderError, Result};
use futures_util::future::join_all;
use std::collections::HashMap;

/// Fetches every path concurrently, then resolves each key of `defaults`.
///
/// Keys only present in `defaults` resolve straight to their default; keys
/// only present in `paths` are fetched but dropped from the result.
pub async fn load_text_map<S>(
    source: &S,
    paths: &PathMap,
    defaults: &DefaultMap,
    policy: TransportPolicy,
) -> Result<ResolvedContent>
where
    S: TextSource + ?Sized,
{
    let fetches = paths.iter().map(|(key, path)| async move {
        let text = fetch_text(source, path, policy).await?;
        Ok::<_, RenderError>((key.clone(), text))
    });

    let loaded = join_all(fetches)
        .await
        .into_iter()
        .collect::<Result<HashMap<String, String>>>()?;

    tracing::debug!(
        "Loaded {} of {} texts",
        loaded.values().filter(|v| !v.is_empty()).count(),
        paths.len()
    );

    Ok(ResolvedContent::resolve(&loaded, defaults))
}
