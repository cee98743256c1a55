use crate::dom::document::Document;
use crate::domain::model::PageKind;
use url::Url;

/// Hero image the static markup ships with.
pub const DEFAULT_HERO_IMAGE: &str = "kuva.jpg";

/// Builds the host document for `kind`: the shared hero, the content
/// header and intro, and the page-specific elements the renderers target.
pub fn page_skeleton(kind: PageKind, base_url: Url) -> Document {
    let mut doc = Document::new(base_url);
    doc.set_page_marker(kind.as_str());
    let body = doc.body();

    let header = doc.append_element(body, "header", &[("class", "hero")]);
    doc.append_element(
        header,
        "img",
        &[("id", "hero-image"), ("src", DEFAULT_HERO_IMAGE), ("alt", "")],
    );
    doc.append_element(header, "h1", &[("id", "company-name")]);
    doc.append_element(header, "p", &[("id", "page-subtitle")]);

    let main = doc.append_element(body, "main", &[]);
    doc.append_element(main, "h2", &[("id", "content-page-title")]);
    doc.append_element(main, "div", &[("id", "intro-text")]);

    match kind {
        PageKind::Home => {}
        PageKind::About => {
            let history = doc.append_element(main, "section", &[("class", "history")]);
            doc.append_element(history, "h3", &[("id", "about-history-title")]);
            doc.append_element(history, "div", &[("id", "about-history-text")]);
        }
        PageKind::Contact => {
            let address = doc.append_element(main, "address", &[]);
            doc.append_element(address, "p", &[("id", "street")]);
            doc.append_element(address, "p", &[("id", "postal-city")]);
            doc.append_element(address, "p", &[("id", "opening-hours")]);
            let email_row = doc.append_element(address, "p", &[("class", "email")]);
            doc.append_element(email_row, "a", &[("id", "email")]);
            let phone_row = doc.append_element(address, "p", &[("class", "phone")]);
            doc.append_element(phone_row, "a", &[("id", "phone")]);
        }
    }

    doc
}
