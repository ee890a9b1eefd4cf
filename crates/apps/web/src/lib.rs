//! Browser entry point for the portfolio page.
//!
//! Each behavior block looks up its elements at start; a block whose markup is
//! missing stays inert without affecting the others.

use console_error_panic_hook::set_once;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod config;
mod dom;
mod error;
mod logging;
mod motion;
mod overlays;
mod projects;
mod sections;

pub use config::{Markup, SiteConfig};
pub use error::WebError;

use overlays::{LightboxBlock, VideoBlock};
use projects::CarouselBlock;
use sections::Observer;

static PANIC_HOOK_SET: OnceLock<()> = OnceLock::new();

/// Everything a mounted page keeps alive. Dropping it detaches every listener
/// and observer.
struct Site {
    carousel: Option<Rc<CarouselBlock>>,
    _listeners: Vec<EventListener>,
    _observers: Vec<Observer>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Mount with defaults, overlaid by the page's embedded JSON config if any.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    PANIC_HOOK_SET.get_or_init(set_once);
    let document = dom::document()?;
    let (config, rejected) = match SiteConfig::from_document(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = rejected {
        warn!(%err, "embedded config ignored, using defaults");
    }
    mount(config)?;
    Ok(())
}

/// Remount with an explicit JSON config. Invalid JSON leaves the current page untouched.
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    PANIC_HOOK_SET.get_or_init(set_once);
    let config = SiteConfig::from_json(json)?;
    logging::init(&config.log_level);
    mount(config)?;
    Ok(())
}

/// Force a carousel layout pass, e.g. after cards were inserted late.
#[wasm_bindgen]
pub fn carousel_layout() {
    let carousel = SITE.with(|site| site.borrow().as_ref().and_then(|s| s.carousel.clone()));
    if let Some(carousel) = carousel {
        carousel.layout();
    }
}

fn enabled<T>(block: &str, result: Result<T, WebError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(WebError::MissingElement(what)) => {
            debug!(block, %what, "block disabled");
            None
        }
        Err(err) => {
            warn!(block, %err, "block failed to start");
            None
        }
    }
}

fn mount(config: SiteConfig) -> Result<(), WebError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let markup = &config.markup;

    // Detach a previously mounted site before wiring the new one.
    drop(SITE.with(|site| site.borrow_mut().take()));

    let mut listeners = Vec::new();
    let mut observers = Vec::new();

    set_footer_year(&document, markup);

    listeners.extend(
        enabled("anchors", sections::install_anchors(&document, markup, config.anchor))
            .unwrap_or_default(),
    );
    observers.extend(enabled(
        "reveal",
        sections::install_reveal(&document, markup, &config.reveal),
    ));
    observers.extend(enabled(
        "scrollspy",
        sections::install_scrollspy(&window, &document, markup, &config.scrollspy),
    ));

    let carousel = enabled(
        "carousel",
        CarouselBlock::find(&window, &document, markup, &config.carousel),
    );
    if let Some(carousel) = &carousel {
        listeners.extend(carousel.install(markup));
        if document_loaded(&document.ready_state()) {
            carousel.layout();
        } else {
            let carousel = Rc::clone(carousel);
            listeners.push(EventListener::once(&window, "load", move |_| {
                carousel.layout();
            }));
        }
    }

    listeners.extend(
        enabled(
            "video modal",
            VideoBlock::find(&document, markup, &config.video)
                .and_then(|block| block.install(&window, markup)),
        )
        .unwrap_or_default(),
    );
    listeners.extend(
        enabled(
            "lightbox",
            LightboxBlock::find(&document, markup)
                .and_then(|block| block.install(&window, markup, &config.links)),
        )
        .unwrap_or_default(),
    );

    enabled(
        "reduced motion",
        motion::apply_preference(&window, &document, markup),
    );

    info!(
        listeners = listeners.len(),
        observers = observers.len(),
        carousel = carousel.is_some(),
        "folio mounted"
    );
    SITE.with(|site| {
        *site.borrow_mut() = Some(Site {
            carousel,
            _listeners: listeners,
            _observers: observers,
        });
    });
    Ok(())
}

fn set_footer_year(document: &Document, markup: &Markup) {
    if let Some(el) = document.get_element_by_id(&markup.year_id) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(year.to_string().as_str()));
    }
}

/// `document.readyState` once the `load` event has already fired.
fn document_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}
