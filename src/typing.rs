use crate::dom;
use folio_core::Typewriter;
use web_sys as web;

/// Rotate the hero tagline: each step writes the text and re-arms a timer
/// for the delay the typewriter asks for.
pub fn start_typing(document: &web::Document, typewriter: Typewriter) {
    let Some(el) = dom::element_by_id::<web::Element>(document, "typingText") else {
        return;
    };
    step(el, typewriter);
}

fn step(el: web::Element, mut typewriter: Typewriter) {
    let next = typewriter.step();
    el.set_text_content(Some(&next.text));
    dom::set_timeout(next.delay_ms, move || step(el, typewriter));
}
