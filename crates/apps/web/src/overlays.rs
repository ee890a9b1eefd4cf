use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use overlay::{
    CloseTrigger, Effect, ImageLightbox, LinkClasses, LinkRole, NEW_TAB_ATTRS, PreloadOutcome,
    ThumbnailChain, ThumbnailStep, VideoConfig, VideoModal, background_image_css,
    video_id_from_link,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, HtmlIFrameElement, HtmlImageElement,
    KeyboardEvent, Window,
};

use crate::config::Markup;
use crate::dom;
use crate::error::WebError;

enum MediaSlot {
    Frame(HtmlIFrameElement),
    Image(HtmlImageElement),
}

/// DOM side of one modal; applies [`Effect`]s in order.
struct OverlayDom {
    document: Document,
    root: HtmlElement,
    close: Option<HtmlElement>,
    media: MediaSlot,
    caption: Option<HtmlElement>,
    opener: RefCell<Option<HtmlElement>>,
}

impl OverlayDom {
    fn apply(&self, effects: &[Effect]) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect) {
                warn!(?effect, %err, "overlay effect failed");
            }
        }
    }

    fn apply_one(&self, effect: &Effect) -> Result<(), WebError> {
        match effect {
            Effect::SetSource(src) => self.set_source(src)?,
            Effect::ClearSource => self.set_source("")?,
            Effect::SetCaption(caption) => self.set_caption(caption.as_deref())?,
            Effect::Reveal => self.root.set_hidden(false),
            Effect::Hide => self.root.set_hidden(true),
            Effect::LockScroll => dom::set_scroll_lock(&self.document, true)?,
            Effect::UnlockScroll => dom::set_scroll_lock(&self.document, false)?,
            Effect::FocusClose => {
                if let Some(close) = &self.close {
                    close.focus()?;
                }
            }
            Effect::RestoreFocus => {
                let opener = self.opener.borrow_mut().take();
                if let Some(opener) = opener.filter(|o| o.is_connected()) {
                    opener.focus()?;
                }
            }
        }
        Ok(())
    }

    fn set_source(&self, src: &str) -> Result<(), WebError> {
        match &self.media {
            MediaSlot::Frame(frame) => frame.set_src(src),
            MediaSlot::Image(img) if src.is_empty() => img.remove_attribute("src")?,
            MediaSlot::Image(img) => img.set_src(src),
        }
        Ok(())
    }

    fn set_caption(&self, caption: Option<&str>) -> Result<(), WebError> {
        let text = caption.unwrap_or_default();
        match &self.media {
            MediaSlot::Frame(frame) => frame.set_attribute("title", text)?,
            MediaSlot::Image(img) => img.set_alt(text),
        }
        if let Some(el) = &self.caption {
            el.set_text_content(caption);
        }
        Ok(())
    }

    /// A click that landed on the modal container itself rather than its content.
    fn is_backdrop_click(&self, event: &Event) -> bool {
        let root: &EventTarget = self.root.as_ref();
        event.target().as_ref() == Some(root)
    }
}

/// Close handling shared by both modals.
trait Dismiss {
    fn dom(&self) -> &OverlayDom;
    fn escape_trigger(&self, key: &str) -> Option<CloseTrigger>;
    fn dismiss(&self, trigger: CloseTrigger);
}

fn close_listeners<T: Dismiss + 'static>(block: &Rc<T>, window: &Window) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    if let Some(close) = &block.dom().close {
        let b = Rc::clone(block);
        listeners.push(EventListener::new(close, "click", move |_| {
            b.dismiss(CloseTrigger::Button);
        }));
    }
    let b = Rc::clone(block);
    listeners.push(EventListener::new(&block.dom().root, "click", move |event| {
        if b.dom().is_backdrop_click(event) {
            b.dismiss(CloseTrigger::Backdrop);
        }
    }));
    let b = Rc::clone(block);
    listeners.push(EventListener::new(window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(trigger) = b.escape_trigger(&event.key()) {
            b.dismiss(trigger);
        }
    }));
    listeners
}

fn intercept_click(
    target: &EventTarget,
    mut handler: impl FnMut(&Event) + 'static,
) -> EventListener {
    EventListener::new_with_options(
        target,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            handler(event);
        },
    )
}

/// Embedded-player modal plus its thumbnail triggers.
pub struct VideoBlock {
    dom: OverlayDom,
    modal: RefCell<VideoModal>,
}

impl Dismiss for VideoBlock {
    fn dom(&self) -> &OverlayDom {
        &self.dom
    }

    fn escape_trigger(&self, key: &str) -> Option<CloseTrigger> {
        self.modal.borrow().overlay().close_trigger_for_key(key)
    }

    fn dismiss(&self, trigger: CloseTrigger) {
        let effects = self.modal.borrow_mut().close(trigger);
        self.dom.apply(&effects);
    }
}

impl VideoBlock {
    pub fn find(
        document: &Document,
        markup: &Markup,
        config: &VideoConfig,
    ) -> Result<Rc<Self>, WebError> {
        let root: HtmlElement = dom::by_id(document, &markup.video_modal_id)?;
        let frame: HtmlIFrameElement = dom::by_id(document, &markup.video_frame_id)?;
        let close = dom::query_in(&root, &markup.video_close)?;
        Ok(Rc::new(Self {
            dom: OverlayDom {
                document: document.clone(),
                root,
                close,
                media: MediaSlot::Frame(frame),
                caption: None,
                opener: RefCell::new(None),
            },
            modal: RefCell::new(VideoModal::new(config.clone())),
        }))
    }

    pub fn install(
        self: &Rc<Self>,
        window: &Window,
        markup: &Markup,
    ) -> Result<Vec<EventListener>, WebError> {
        let mut listeners = close_listeners(self, window);
        let links: Vec<HtmlElement> = dom::query_all(&self.dom.document, &markup.video_triggers)?;
        let mut wired = 0usize;
        for link in links {
            let href = link.get_attribute("href");
            let source = link.get_attribute(&markup.video_source_attr);
            // Links without a recognizable video stay inert.
            let Some(id) = video_id_from_link(href.as_deref(), source.as_deref()) else {
                continue;
            };

            let chain = ThumbnailChain::new(self.modal.borrow().config().thumbnail_urls(&id));
            spawn_local(load_thumbnail(link.clone(), chain));

            let block = Rc::clone(self);
            let opener = link.clone();
            listeners.push(intercept_click(&link, move |_| {
                let title = opener.get_attribute("title");
                *block.dom.opener.borrow_mut() = Some(opener.clone());
                let effects = block.modal.borrow_mut().open(&id, title.as_deref());
                block.dom.apply(&effects);
            }));
            wired += 1;
        }
        debug!(links = wired, "video modal ready");
        Ok(listeners)
    }
}

async fn load_thumbnail(link: HtmlElement, mut chain: ThumbnailChain) {
    let mut step = chain.start();
    while let Some(next) = step {
        match next {
            ThumbnailStep::Apply(url) => {
                set_background(&link, &url);
                return;
            }
            ThumbnailStep::Preload(url) => match dom::preload_image(&url).await {
                Ok(()) => {
                    if let Some(url) = chain.loaded() {
                        set_background(&link, url);
                    }
                    return;
                }
                Err(err) => {
                    debug!(%url, %err, "thumbnail unavailable, trying next");
                    step = chain.failed();
                }
            },
        }
    }
}

fn set_background(el: &HtmlElement, url: &str) {
    if let Err(err) = el
        .style()
        .set_property("background-image", &background_image_css(url))
    {
        debug!(error = ?err, "could not set thumbnail");
    }
}

/// Image lightbox plus its gallery links.
pub struct LightboxBlock {
    dom: OverlayDom,
    image: HtmlImageElement,
    zoom_class: String,
    lightbox: RefCell<ImageLightbox>,
}

impl Dismiss for LightboxBlock {
    fn dom(&self) -> &OverlayDom {
        &self.dom
    }

    fn escape_trigger(&self, key: &str) -> Option<CloseTrigger> {
        self.lightbox.borrow().overlay().close_trigger_for_key(key)
    }

    fn dismiss(&self, trigger: CloseTrigger) {
        let effects = self.lightbox.borrow_mut().close(trigger);
        self.dom.apply(&effects);
        self.render_zoom();
    }
}

impl LightboxBlock {
    pub fn find(document: &Document, markup: &Markup) -> Result<Rc<Self>, WebError> {
        let root: HtmlElement = dom::by_id(document, &markup.image_modal_id)?;
        let image: HtmlImageElement = dom::by_id(document, &markup.image_view_id)?;
        let close = dom::query_in(&root, &markup.image_close)?;
        let caption = dom::by_id(document, &markup.image_caption_id).ok();
        Ok(Rc::new(Self {
            dom: OverlayDom {
                document: document.clone(),
                root,
                close,
                media: MediaSlot::Image(image.clone()),
                caption,
                opener: RefCell::new(None),
            },
            image,
            zoom_class: markup.zoom_class.clone(),
            lightbox: RefCell::new(ImageLightbox::new()),
        }))
    }

    fn render_zoom(&self) {
        let zoomed = self.lightbox.borrow().is_zoomed();
        if let Err(err) = self
            .image
            .class_list()
            .toggle_with_force(&self.zoom_class, zoomed)
        {
            debug!(error = ?err, "could not toggle zoom");
        }
    }

    fn open(self: &Rc<Self>, link: &HtmlElement, src: &str, caption: Option<&str>) {
        *self.dom.opener.borrow_mut() = Some(link.clone());
        let (effects, request) = self.lightbox.borrow_mut().open(src, caption);
        self.dom.apply(&effects);
        self.render_zoom();

        let block = Rc::clone(self);
        spawn_local(async move {
            let outcome = match dom::preload_image(&request.source).await {
                Ok(()) => PreloadOutcome::Loaded,
                Err(err) => {
                    debug!(source = %request.source, %err, "lightbox preload failed");
                    PreloadOutcome::Failed
                }
            };
            let effects = block
                .lightbox
                .borrow_mut()
                .preload_finished(request.generation, outcome);
            block.dom.apply(&effects);
        });
    }

    pub fn install(
        self: &Rc<Self>,
        window: &Window,
        markup: &Markup,
        classes: &LinkClasses,
    ) -> Result<Vec<EventListener>, WebError> {
        let mut listeners = close_listeners(self, window);

        let block = Rc::clone(self);
        listeners.push(EventListener::new(&self.image, "click", move |_| {
            if block.lightbox.borrow_mut().toggle_zoom().is_some() {
                block.render_zoom();
            }
        }));

        let links: Vec<HtmlElement> = dom::query_all(&self.dom.document, &markup.image_triggers)?;
        for link in links {
            let src = link.get_attribute(&classes.image_attr);
            match classes.role(&link.class_name(), src.as_deref()) {
                LinkRole::ExternalDetail => {
                    for (name, value) in NEW_TAB_ATTRS {
                        if !link.has_attribute(name) {
                            link.set_attribute(name, value)?;
                        }
                    }
                }
                LinkRole::Lightbox => {
                    let src = src.unwrap_or_default();
                    let block = Rc::clone(self);
                    let caption_attr = markup.image_caption_attr.clone();
                    let opener = link.clone();
                    listeners.push(intercept_click(&link, move |_| {
                        let caption = opener
                            .get_attribute(&caption_attr)
                            .or_else(|| opener.get_attribute("title"));
                        block.open(&opener, &src, caption.as_deref());
                    }));
                }
                LinkRole::Other => {}
            }
        }
        Ok(listeners)
    }
}
