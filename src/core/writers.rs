use crate::domain::ports::ElementRegistry;

/// Replaces the text of element `id`. No-op when it does not exist.
pub fn set_text<R: ElementRegistry>(dom: &mut R, id: &str, value: &str) {
    match dom.lookup(id) {
        Some(element) => dom.set_text(element, value),
        None => tracing::debug!("No element #{}, skipping text", id),
    }
}

/// Replaces the children of `container_id` with one `<p>` per non-empty
/// paragraph, in order. No-op when the container does not exist.
pub fn render_paragraphs<R, P>(dom: &mut R, container_id: &str, paragraphs: &[P])
where
    R: ElementRegistry,
    P: AsRef<str>,
{
    let Some(container) = dom.lookup(container_id) else {
        tracing::debug!("No container #{}, skipping paragraphs", container_id);
        return;
    };

    dom.clear_children(container);
    for paragraph in paragraphs {
        let paragraph: &str = paragraph.as_ref();
        if !paragraph.is_empty() {
            dom.append_paragraph(container, paragraph);
        }
    }
}
