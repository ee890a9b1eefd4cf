use foundation::ids::SectionId;
use gloo_events::{EventListener, EventListenerOptions};
use js_sys::Array;
use navigation::{AnchorConfig, RevealConfig, RevealTracker, Scrollspy, ScrollspyConfig};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::config::Markup;
use crate::dom;
use crate::error::WebError;

/// An `IntersectionObserver` and the callback it owns; disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    fn new(
        root: &Element,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, WebError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_root(Some(root.as_ref()));
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn observe_all<'a>(&self, targets: impl IntoIterator<Item = &'a Element>) {
        for target in targets {
            self.observer.observe(target);
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smooth in-container scrolling for same-page fragment links.
pub fn install_anchors(
    document: &Document,
    markup: &Markup,
    config: AnchorConfig,
) -> Result<Vec<EventListener>, WebError> {
    let root: HtmlElement = dom::by_id(document, &markup.scroll_root_id)?;
    let links: Vec<Element> = dom::query_all(document, &markup.anchor_links)?;
    let listeners = links
        .into_iter()
        .map(|link| {
            let root = root.clone();
            let document = document.clone();
            let anchor = link.clone();
            EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(id) = anchor
                        .get_attribute("href")
                        .and_then(|href| SectionId::from_fragment(&href))
                    else {
                        return;
                    };
                    // Unknown targets fall through to default navigation.
                    let Some(target) = document.get_element_by_id(id.as_str()) else {
                        return;
                    };
                    event.prevent_default();
                    let top = config.scroll_top_for(
                        &dom::rect(&target),
                        &dom::rect(&root),
                        f64::from(root.scroll_top()),
                    );
                    debug!(section = %id, top, "anchor scroll");
                    dom::scroll_to(&root, None, Some(top), true);
                },
            )
        })
        .collect();
    Ok(listeners)
}

/// Flag sections as revealed the first time they scroll into view.
pub fn install_reveal(
    document: &Document,
    markup: &Markup,
    config: &RevealConfig,
) -> Result<Observer, WebError> {
    let root: Element = dom::by_id(document, &markup.scroll_root_id)?;
    let sections: Vec<Element> = dom::query_all(document, &markup.reveal_sections)?;
    let tracked = sections.clone();
    let class_name = config.class_name.clone();
    let mut tracker = RevealTracker::new();
    let observer = Observer::new(
        &root,
        config.threshold,
        Some(config.root_margin.as_str()),
        move |entry, observer| {
            let target = entry.target();
            let Some(index) = tracked.iter().position(|s| *s == target) else {
                return;
            };
            if tracker.observe(index, entry.is_intersecting()) {
                if let Err(err) = target.class_list().add_1(&class_name) {
                    warn!(error = ?err, "could not reveal section");
                }
                observer.unobserve(&target);
            }
        },
    )?;
    observer.observe_all(&sections);
    debug!(sections = sections.len(), "section reveal observing");
    Ok(observer)
}

/// Highlight the nav link of the section in view and mirror it into the URL.
pub fn install_scrollspy(
    window: &Window,
    document: &Document,
    markup: &Markup,
    config: &ScrollspyConfig,
) -> Result<Observer, WebError> {
    let root: Element = dom::by_id(document, &markup.scroll_root_id)?;
    let sections: Vec<Element> = dom::query_all(document, &markup.spy_sections)?;
    let nav_links: Vec<Element> = dom::query_all(document, &markup.nav_links)?;
    let ids = sections
        .iter()
        .filter_map(|s| SectionId::new(s.id()))
        .collect();
    let mut spy = Scrollspy::new(config, ids);
    let history = window.history()?;
    let class_name = config.class_name.clone();

    let observer = Observer::new(&root, config.threshold, None, move |entry, _| {
        let Some(id) = SectionId::new(entry.target().id()) else {
            return;
        };
        let Some(change) = spy.observe(&id, entry.intersection_ratio(), entry.is_intersecting())
        else {
            return;
        };
        for link in &nav_links {
            let active = link
                .get_attribute("href")
                .is_some_and(|href| spy.is_active_href(&href));
            if let Err(err) = link.class_list().toggle_with_force(&class_name, active) {
                warn!(error = ?err, "could not mark nav link");
            }
        }
        if let Err(err) =
            history.replace_state_with_url(&JsValue::NULL, "", Some(change.fragment.as_str()))
        {
            debug!(error = ?err, "could not replace URL fragment");
        }
    })?;
    observer.observe_all(&sections);
    Ok(observer)
}
