use crate::domain::model::TransportPolicy;
use crate::domain::ports::TextSource;
use crate::utils::error::Result;

/// Fetches one resource as trimmed text.
///
/// A missing resource or a non-success answer is `""`. A transport failure
/// is `""` under [`TransportPolicy::Empty`] and an error under
/// [`TransportPolicy::Fail`].
pub async fn fetch_text<S>(source: &S, path: &str, policy: TransportPolicy) -> Result<String>
where
    S: TextSource + ?Sized,
{
    match source.get_text(path).await {
        Ok(Some(body)) => Ok(body.trim().to_string()),
        Ok(None) => {
            tracing::debug!("No content at {}", path);
            Ok(String::new())
        }
        Err(e) => match policy {
            TransportPolicy::Empty => {
                tracing::warn!("Treating {} as empty: {}", path, e);
                Ok(String::new())
            }
            TransportPolicy::Fail => Err(e),
        },
    }
}
