use crate::domain::model::{ContactFields, Display};
use crate::domain::ports::ElementRegistry;

/// Writes the contact block. Does nothing unless all five elements exist.
///
/// Returns whether the block was written.
pub fn render_contact<R: ElementRegistry>(dom: &mut R, fields: &ContactFields) -> bool {
    let (Some(street), Some(postal_city), Some(opening_hours), Some(email), Some(phone)) = (
        dom.lookup("street"),
        dom.lookup("postal-city"),
        dom.lookup("opening-hours"),
        dom.lookup("email"),
        dom.lookup("phone"),
    ) else {
        tracing::debug!("Contact block incomplete, skipping");
        return false;
    };

    dom.set_text(street, &fields.street);
    dom.set_text(postal_city, &fields.postal_city);
    dom.set_text(opening_hours, &fields.opening_hours);
    dom.set_display(opening_hours, Display::visible_if(!fields.opening_hours.is_empty()));

    if fields.email.is_empty() {
        hide_link(dom, email);
    } else {
        show_link(dom, email, &fields.email, &format!("mailto:{}", fields.email));
    }

    let dial = fields.dial_number();
    if !dial.is_empty() && !fields.phone_display.is_empty() {
        show_link(dom, phone, &fields.phone_display, &format!("tel:{}", dial));
    } else {
        hide_link(dom, phone);
    }

    true
}

fn show_link<R: ElementRegistry>(dom: &mut R, link: R::Handle, label: &str, href: &str) {
    dom.set_text(link, label);
    dom.set_attribute(link, "href", href);
    set_parent_display(dom, link, Display::Block);
}

fn hide_link<R: ElementRegistry>(dom: &mut R, link: R::Handle) {
    dom.set_text(link, "");
    dom.remove_attribute(link, "href");
    set_parent_display(dom, link, Display::None);
}

fn set_parent_display<R: ElementRegistry>(dom: &mut R, element: R::Handle, display: Display) {
    if let Some(parent) = dom.parent(element) {
        dom.set_display(parent, display);
    }
}
