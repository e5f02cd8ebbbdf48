//! IntersectionObserver-driven effects: active nav link, scroll reveal,
//! and count-up stats.

use crate::dom;
use crate::frame;
use folio_core::constants::*;
use folio_core::reveal::{hero_delay_ms, is_staggered_grid, reveal_delay_ms};
use folio_core::scroll::link_targets_section;
use folio_core::{parse_target, CounterAnimation, Flow, FrameTask, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `targets`, calling `on_enter(element, observer)` each time one
/// starts intersecting.
fn observe(
    targets: &[web::Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: impl FnMut(web::Element, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(entry.target(), &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    for t in targets {
        observer.observe(t);
    }
    Ok(())
}

/// Highlight the nav link whose `href` matches the section in view.
pub fn wire_active_nav(document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all(document, ".section, .hero");
    let links = dom::query_all(document, ".nav-link:not(.nav-cta)");
    if sections.is_empty() || links.is_empty() {
        return Ok(());
    }
    observe(
        &sections,
        NAV_OBSERVER_THRESHOLD,
        Some(NAV_OBSERVER_ROOT_MARGIN),
        move |section, _| {
            let id = section.id();
            for link in &links {
                let href = link.get_attribute("href");
                dom::set_class(link, "active", link_targets_section(href.as_deref(), &id));
            }
        },
    )
}

/// Hero `.animate-in` elements fade in on load after their `data-delay`.
pub fn trigger_hero_animations(document: &web::Document) {
    for el in dom::query_all(document, ".animate-in") {
        let delay = hero_delay_ms(el.get_attribute("data-delay").as_deref());
        dom::set_timeout(delay, move || dom::set_class(&el, "visible", true));
    }
}

fn grid_index(el: &web::Element) -> Option<usize> {
    let parent = el.parent_element()?;
    let class_name = parent.class_name();
    if !is_staggered_grid(class_name.split_whitespace()) {
        return None;
    }
    let siblings = parent.query_selector_all(".reveal").ok()?;
    let node: &web::Node = el.as_ref();
    (0..siblings.length())
        .filter_map(|i| siblings.get(i))
        .position(|n| n.is_same_node(Some(node)))
}

/// `.reveal` elements become visible the first time they scroll into view.
pub fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, ".reveal");
    if targets.is_empty() {
        return Ok(());
    }
    observe(
        &targets,
        REVEAL_OBSERVER_THRESHOLD,
        Some(REVEAL_OBSERVER_ROOT_MARGIN),
        |el, observer| {
            let delay = reveal_delay_ms(el.get_attribute("data-delay").as_deref(), grid_index(&el));
            observer.unobserve(&el);
            dom::set_timeout(delay, move || dom::set_class(&el, "visible", true));
        },
    )
}

struct CounterTask {
    el: web::Element,
    anim: CounterAnimation,
}

impl FrameTask for CounterTask {
    fn tick(&mut self, timestamp_ms: f64) -> Flow {
        let frame = self.anim.sample(timestamp_ms);
        self.el.set_text_content(Some(&frame.text()));
        if frame.finished {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

/// Stat numbers count up from zero to their `data-target` once visible.
pub fn wire_counters(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, ".stat-number[data-target]");
    if targets.is_empty() {
        return Ok(());
    }
    observe(&targets, COUNTER_OBSERVER_THRESHOLD, None, |el, observer| {
        observer.unobserve(&el);
        let target = el
            .get_attribute("data-target")
            .map(|s| parse_target(&s))
            .unwrap_or(0.0);
        log::debug!("[counter] start -> {}", target);
        let task = Rc::new(RefCell::new(CounterTask {
            el,
            anim: CounterAnimation::new(target),
        }));
        frame::start_loop(task, LoopHandle::new());
    })
}
