use crate::dom;
use folio_core::constants::PARALLAX_RESET_MS;
use folio_core::input::{
    css_px, parallax_offset, translate_css, ViewRect, PARALLAX_REST_TRANSFORM,
    PARALLAX_RESET_TRANSITION,
};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Glow element follows the pointer (desktop only, checked by the caller).
pub fn wire_cursor_glow(document: &web::Document) {
    let Some(glow) = dom::element_by_id::<web::HtmlElement>(document, "cursorGlow") else {
        return;
    };
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        dom::set_style(&glow, "left", &css_px(ev.client_x() as f64));
        dom::set_style(&glow, "top", &css_px(ev.client_y() as f64));
    });
}

/// Hero image drifts against the pointer and eases back on leave.
pub fn wire_parallax(document: &web::Document) {
    let image = document
        .query_selector(".hero-image-wrapper")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok());
    let hero = document.query_selector(".hero").ok().flatten();
    let (Some(image), Some(hero)) = (image, hero) else {
        log::debug!("[parallax] no hero image; skipped");
        return;
    };

    let image_move = image.clone();
    let hero_rect = hero.clone();
    dom::add_listener(&hero, "mousemove", move |ev: web::MouseEvent| {
        let r = hero_rect.get_bounding_client_rect();
        let rect = ViewRect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        };
        let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let offset = parallax_offset(client, &rect);
        dom::set_style(&image_move, "transform", &translate_css(offset));
    });

    dom::add_listener(&hero, "mouseleave", move |_: web::MouseEvent| {
        dom::set_style(&image, "transform", PARALLAX_REST_TRANSFORM);
        dom::set_style(&image, "transition", PARALLAX_RESET_TRANSITION);
        let image_reset = image.clone();
        dom::set_timeout(PARALLAX_RESET_MS, move || {
            dom::set_style(&image_reset, "transition", "");
        });
    });
}
