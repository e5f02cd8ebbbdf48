use crate::dom;
use folio_core::scroll::{anchor_selector, back_to_top_visible, navbar_scrolled};
use web_sys as web;

/// Scroll-position driven classes: `scrolled` on the navbar and `visible`
/// on the back-to-top button.
pub fn wire_scroll_state(
    window: &web::Window,
    navbar: Option<web::Element>,
    back_to_top: Option<web::Element>,
) {
    if navbar.is_none() && back_to_top.is_none() {
        return;
    }
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let y = win.scroll_y().unwrap_or(0.0);
        if let Some(nav) = &navbar {
            dom::set_class(nav, "scrolled", navbar_scrolled(y));
        }
        if let Some(btn) = &back_to_top {
            dom::set_class(btn, "visible", back_to_top_visible(y));
        }
    });
}

pub fn wire_back_to_top(window: &web::Window, btn: &web::Element) {
    let win = window.clone();
    dom::add_click_listener(btn, move || {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    });
}

/// In-page `#id` links scroll smoothly to their target.
pub fn wire_smooth_anchors(document: &web::Document) {
    let anchors = dom::query_all(document, "a[href^=\"#\"]");
    log::debug!("[scroll] {} in-page anchors", anchors.len());
    for anchor in anchors {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(selector) {
                ev.prevent_default();
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
