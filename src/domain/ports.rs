use crate::domain::model::Display;
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// A store of plain-text resources addressed by relative path.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Reads one resource, bypassing any cache.
    ///
    /// `Ok(None)` means the store answered without success (missing file,
    /// non-2xx status). `Err` means the store could not be reached.
    async fn get_text(&self, path: &str) -> Result<Option<String>>;
}

#[async_trait]
impl<T: TextSource + ?Sized> TextSource for Box<T> {
    async fn get_text(&self, path: &str) -> Result<Option<String>> {
        (**self).get_text(path).await
    }
}

#[async_trait]
impl<T: TextSource + ?Sized> TextSource for std::sync::Arc<T> {
    async fn get_text(&self, path: &str) -> Result<Option<String>> {
        (**self).get_text(path).await
    }
}

/// Elements of a host document, looked up by id.
///
/// Lookups return an opaque handle; every mutation goes through a handle so
/// writers deal with "exists / does not exist" once, at lookup time.
pub trait ElementRegistry {
    type Handle: Copy;

    fn lookup(&self, id: &str) -> Option<Self::Handle>;

    /// The `data-page` marker on the document body.
    fn page_marker(&self) -> Option<String>;

    /// Location the document was loaded from; relative references resolve against it.
    fn base_url(&self) -> &Url;

    fn parent(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Replaces all children of the element with a single text node.
    fn set_text(&mut self, element: Self::Handle, text: &str);

    fn clear_children(&mut self, element: Self::Handle);

    /// Appends a `<p>` holding `text` as plain text.
    fn append_paragraph(&mut self, element: Self::Handle, text: &str);

    fn attribute(&self, element: Self::Handle, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str);

    fn remove_attribute(&mut self, element: Self::Handle, name: &str);

    fn set_display(&mut self, element: Self::Handle, display: Display);
}
