use crate::core::contact::render_contact;
use crate::core::loader::load_text_map;
use crate::core::writers::{render_paragraphs, set_text};
use crate::domain::model::{ContactFields, DefaultMap, PathMap, ResolvedContent, TransportPolicy};
use crate::domain::ports::{ElementRegistry, TextSource};
use crate::utils::error::Result;

/// One piece of page content: its logical key, where it lives in the
/// content store, and what to show when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField {
    pub key: &'static str,
    pub path: &'static str,
    pub default: &'static str,
}

const fn field(key: &'static str, path: &'static str, default: &'static str) -> TextField {
    TextField { key, path, default }
}

pub const HERO_TEXTS: &[TextField] = &[
    field("companyName", "texts/shared-hero/title.txt", "PSYKOTERAPIA MIELIKUVA"),
    field("subtitle", "texts/shared-hero/subtitle.txt", "Psykoterapiapalvelut"),
    field("image", "texts/shared-hero/image.txt", "kuva.jpg"),
];

pub const HOME_TEXTS: &[TextField] = &[
    field("pageTitle", "texts/home/page-title.txt", "Tervetuloa"),
    field("intro1", "texts/home/intro-1.txt", ""),
    field("intro2", "texts/home/intro-2.txt", ""),
];

pub const ABOUT_TEXTS: &[TextField] = &[
    field("pageTitle", "texts/about/page-title.txt", "Tausta ja työote"),
    field("intro1", "texts/about/intro-1.txt", ""),
    field("intro2", "texts/about/intro-2.txt", ""),
    field("historyTitle", "texts/about/history-title.txt", "Tausta ja koulutus"),
    field("history1", "texts/about/history-1.txt", ""),
    field("history2", "texts/about/history-2.txt", ""),
];

pub const CONTACT_TEXTS: &[TextField] = &[
    field("pageTitle", "texts/contact/page-title.txt", "Ota yhteyttä"),
    field("intro1", "texts/contact/intro-1.txt", ""),
    field("intro2", "texts/contact/intro-2.txt", ""),
    field("street", "texts/contact/street.txt", ""),
    field("postalCity", "texts/contact/postal-city.txt", ""),
    field("openingHours", "texts/contact/opening-hours.txt", ""),
    field("email", "texts/contact/email.txt", ""),
    field("phoneDisplay", "texts/contact/phone-display.txt", ""),
    field("phoneIntl", "texts/contact/phone-intl.txt", ""),
];

pub fn path_map(fields: &[TextField]) -> PathMap {
    fields
        .iter()
        .map(|f| (f.key.to_string(), f.path.to_string()))
        .collect()
}

pub fn default_map(fields: &[TextField]) -> DefaultMap {
    fields
        .iter()
        .map(|f| (f.key.to_string(), f.default.to_string()))
        .collect()
}

async fn load<S>(source: &S, fields: &[TextField], policy: TransportPolicy) -> Result<ResolvedContent>
where
    S: TextSource + ?Sized,
{
    load_text_map(source, &path_map(fields), &default_map(fields), policy).await
}

/// Company name, subtitle and hero image shared by every page.
///
/// The image source is only reassigned when its absolute form changes, so a
/// default matching the static markup causes no reload.
pub async fn render_shared_hero<S, R>(source: &S, dom: &mut R, policy: TransportPolicy) -> Result<()>
where
    S: TextSource + ?Sized,
    R: ElementRegistry,
{
    let hero = load(source, HERO_TEXTS, policy).await?;

    set_text(dom, "company-name", hero.get("companyName"));
    set_text(dom, "page-subtitle", hero.get("subtitle"));

    let candidate = hero.get("image");
    if let Some(image) = dom.lookup("hero-image") {
        if !candidate.is_empty() {
            let current_src = dom.attribute(image, "src").unwrap_or_default();
            let current = dom.base_url().join(&current_src)?;
            let next = dom.base_url().join(candidate)?;
            if current != next {
                tracing::debug!("Hero image {} -> {}", current, next);
                dom.set_attribute(image, "src", candidate);
            }
        }
    }
    Ok(())
}

pub async fn render_home<S, R>(source: &S, dom: &mut R, policy: TransportPolicy) -> Result<()>
where
    S: TextSource + ?Sized,
    R: ElementRegistry,
{
    let home = load(source, HOME_TEXTS, policy).await?;

    set_text(dom, "content-page-title", home.get("pageTitle"));
    render_paragraphs(dom, "intro-text", &[home.get("intro1"), home.get("intro2")]);
    Ok(())
}

pub async fn render_about<S, R>(source: &S, dom: &mut R, policy: TransportPolicy) -> Result<()>
where
    S: TextSource + ?Sized,
    R: ElementRegistry,
{
    let about = load(source, ABOUT_TEXTS, policy).await?;

    set_text(dom, "content-page-title", about.get("pageTitle"));
    set_text(dom, "about-history-title", about.get("historyTitle"));
    render_paragraphs(dom, "intro-text", &[about.get("intro1"), about.get("intro2")]);
    render_paragraphs(
        dom,
        "about-history-text",
        &[about.get("history1"), about.get("history2")],
    );
    Ok(())
}

pub async fn render_contact_page<S, R>(source: &S, dom: &mut R, policy: TransportPolicy) -> Result<()>
where
    S: TextSource + ?Sized,
    R: ElementRegistry,
{
    let contact = load(source, CONTACT_TEXTS, policy).await?;

    set_text(dom, "content-page-title", contact.get("pageTitle"));
    render_paragraphs(dom, "intro-text", &[contact.get("intro1"), contact.get("intro2")]);
    render_contact(dom, &ContactFields::from_content(&contact));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticTextSource;
    use crate::dom::{page_skeleton, Document};
    use crate::domain::model::PageKind;
    use crate::utils::error::RenderError;
    use std::collections::HashSet;
    use url::Url;

    fn skeleton(kind: PageKind) -> Document {
        page_skeleton(kind, Url::parse("https://example.fi/about.html").unwrap())
    }

    #[test]
    fn test_every_key_has_a_default() {
        for table in [HERO_TEXTS, HOME_TEXTS, ABOUT_TEXTS, CONTACT_TEXTS] {
            let paths: HashSet<_> = path_map(table).into_keys().collect();
            let defaults: HashSet<_> = default_map(table).into_keys().collect();
            assert_eq!(paths, defaults);
            assert_eq!(paths.len(), table.len());
        }
    }

    #[tokio::test]
    async fn test_hero_with_defaults() {
        let mut doc = skeleton(PageKind::Home);
        let source = StaticTextSource::new();

        render_shared_hero(&source, &mut doc, TransportPolicy::Empty).await.unwrap();

        assert_eq!(doc.text_of("company-name").as_deref(), Some("PSYKOTERAPIA MIELIKUVA"));
        assert_eq!(doc.text_of("page-subtitle").as_deref(), Some("Psykoterapiapalvelut"));
    }

    #[tokio::test]
    async fn test_hero_twice_with_matching_default_never_touches_src() {
        let mut doc = skeleton(PageKind::Home);
        let image = doc.lookup("hero-image").unwrap();
        let source = StaticTextSource::new();

        render_shared_hero(&source, &mut doc, TransportPolicy::Empty).await.unwrap();
        render_shared_hero(&source, &mut doc, TransportPolicy::Empty).await.unwrap();

        assert_eq!(doc.attribute_writes(image, "src"), 0);
        assert_eq!(doc.attribute(image, "src").as_deref(), Some("kuva.jpg"));
    }

    #[tokio::test]
    async fn test_hero_equivalent_absolute_image_is_not_reassigned() {
        let mut doc = skeleton(PageKind::Home);
        let image = doc.lookup("hero-image").unwrap();
        let source = StaticTextSource::new()
            .with_text("texts/shared-hero/image.txt", "https://example.fi/kuva.jpg\n");

        render_shared_hero(&source, &mut doc, TransportPolicy::Empty).await.unwrap();

        assert_eq!(doc.attribute_writes(image, "src"), 0);
    }

    #[tokio::test]
    async fn test_hero_new_image_is_assigned_once() {
        let mut doc = skeleton(PageKind::Home);
        let image = doc.lookup("hero-image").unwrap();
        let source = StaticTextSource::new().with_text("texts/shared-hero/image.txt", "kuvat/uusi.jpg");

        render_shared_hero(&source, &mut doc, TransportPolicy::Empty).await.unwrap();
        render_shared_hero(&source, &mut doc, TransportPolicy::Empty).await.unwrap();

        assert_eq!(doc.attribute(image, "src").as_deref(), Some("kuvat/uusi.jpg"));
        assert_eq!(doc.attribute_writes(image, "src"), 1);
    }

    #[tokio::test]
    async fn test_hero_unresolvable_image_is_an_error() {
        let mut doc = skeleton(PageKind::Home);
        let source = StaticTextSource::new().with_text("texts/shared-hero/image.txt", "http://[::1");

        let result = render_shared_hero(&source, &mut doc, TransportPolicy::Empty).await;

        assert!(matches!(result, Err(RenderError::UrlError(_))));
    }

    #[tokio::test]
    async fn test_home_page() {
        let mut doc = skeleton(PageKind::Home);
        let source = StaticTextSource::new()
            .with_text("texts/home/intro-1.txt", "Ensimmäinen kappale.")
            .with_text("texts/home/intro-2.txt", "Toinen kappale.");

        render_home(&source, &mut doc, TransportPolicy::Empty).await.unwrap();

        let intro = doc.lookup("intro-text").unwrap();
        assert_eq!(doc.text_of("content-page-title").as_deref(), Some("Tervetuloa"));
        assert_eq!(doc.paragraphs(intro), vec!["Ensimmäinen kappale.", "Toinen kappale."]);
    }

    #[tokio::test]
    async fn test_about_page_history() {
        let mut doc = skeleton(PageKind::About);
        let source = StaticTextSource::new()
            .with_text("texts/about/history-title.txt", "Koulutus")
            .with_text("texts/about/history-2.txt", "Valmistuin 2010.");

        render_about(&source, &mut doc, TransportPolicy::Empty).await.unwrap();

        let history = doc.lookup("about-history-text").unwrap();
        assert_eq!(doc.text_of("about-history-title").as_deref(), Some("Koulutus"));
        assert_eq!(doc.paragraphs(history), vec!["Valmistuin 2010."]);
    }

    #[tokio::test]
    async fn test_contact_page_fills_block() {
        let mut doc = skeleton(PageKind::Contact);
        let source = StaticTextSource::new()
            .with_text("texts/contact/street.txt", "Esplanadi 1")
            .with_text("texts/contact/email.txt", "info@example.fi")
            .with_text("texts/contact/phone-intl.txt", "+358401234567");

        render_contact_page(&source, &mut doc, TransportPolicy::Empty).await.unwrap();

        let email = doc.lookup("email").unwrap();
        let phone = doc.lookup("phone").unwrap();
        assert_eq!(doc.text_of("content-page-title").as_deref(), Some("Ota yhteyttä"));
        assert_eq!(doc.text_of("street").as_deref(), Some("Esplanadi 1"));
        assert_eq!(doc.attribute(email, "href").as_deref(), Some("mailto:info@example.fi"));
        // intl number alone is not enough to show the phone link
        assert_eq!(doc.attribute(phone, "href"), None);
    }
}
