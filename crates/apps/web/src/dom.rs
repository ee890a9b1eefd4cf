//! Thin helpers over `web-sys` lookups and mutations shared by every block.

use std::cell::RefCell;

use carousel::FocusKind;
use foundation::bounds::Rect;
use runtime::HoldCount;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::WebError;

thread_local! {
    static SCROLL_LOCK: RefCell<HoldCount> = const { RefCell::new(HoldCount::new()) };
}

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or_else(|| WebError::MissingElement("window".to_owned()))
}

pub fn document() -> Result<Document, WebError> {
    window()?
        .document()
        .ok_or_else(|| WebError::MissingElement("document".to_owned()))
}

/// Element by id, cast to `T`. A wrong element type counts as missing.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, WebError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| WebError::MissingElement(format!("#{id}")))
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, WebError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

pub fn query_in<T: JsCast>(parent: &Element, selector: &str) -> Result<Option<T>, WebError> {
    Ok(parent
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

/// All matches castable to `T`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, WebError> {
    collect(document.query_selector_all(selector)?)
}

pub fn query_all_in<T: JsCast>(parent: &Element, selector: &str) -> Result<Vec<T>, WebError> {
    collect(parent.query_selector_all(selector)?)
}

fn collect<T: JsCast>(nodes: web_sys::NodeList) -> Result<Vec<T>, WebError> {
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn scroll_to(el: &Element, left: Option<f64>, top: Option<f64>, smooth: bool) {
    let opts = ScrollToOptions::new();
    if let Some(left) = left {
        opts.set_left(left);
    }
    if let Some(top) = top {
        opts.set_top(top);
    }
    opts.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    el.scroll_to_with_scroll_to_options(&opts);
}

/// Take or drop one overlay's hold on document-level scrolling. The page only
/// scrolls again once every holder has let go.
pub fn set_scroll_lock(document: &Document, locked: bool) -> Result<(), WebError> {
    let changed = SCROLL_LOCK.with(|lock| {
        let mut lock = lock.borrow_mut();
        if locked { lock.acquire() } else { lock.release() }
    });
    if !changed {
        return Ok(());
    }
    let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let style = root.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

/// Whether any overlay currently holds the scroll lock.
pub fn scroll_locked() -> bool {
    SCROLL_LOCK.with(|lock| lock.borrow().is_held())
}

pub fn focus_kind(document: &Document) -> FocusKind {
    match document.active_element() {
        Some(el) => {
            let editable = el
                .dyn_ref::<HtmlElement>()
                .is_some_and(HtmlElement::is_content_editable);
            FocusKind::from_element(&el.tag_name(), editable)
        }
        None => FocusKind::Other,
    }
}

/// Resolve once `src` is fetched and decoded; errors if it cannot be.
pub async fn preload_image(src: &str) -> Result<(), WebError> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    JsFuture::from(img.decode()).await?;
    Ok(())
}
