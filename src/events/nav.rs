use crate::dom;
use web_sys as web;

/// Mobile menu: the toggle flips `active` on itself and the menu; picking a
/// link closes both.
pub fn wire_nav_menu(document: &web::Document) {
    let toggle = dom::element_by_id::<web::Element>(document, "navToggle");
    let menu = dom::element_by_id::<web::Element>(document, "navMenu");
    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        return;
    };

    let (t, m) = (toggle.clone(), menu.clone());
    dom::add_click_listener(&toggle, move || {
        _ = m.class_list().toggle("active");
        _ = t.class_list().toggle("active");
    });

    for link in dom::query_all(document, ".nav-link") {
        let (t, m) = (toggle.clone(), menu.clone());
        dom::add_click_listener(&link, move || {
            dom::set_class(&m, "active", false);
            dom::set_class(&t, "active", false);
        });
    }
}
