use std::cell::RefCell;
use std::rc::Rc;

use carousel::{
    ArrowState, CarouselConfig, CarouselEngine, Direction, KeyPress, ScrollBehavior,
    ScrollCommand, ScrollMetrics, paging_shortcut,
};
use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;
use runtime::{Debouncer, FrameGate};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, KeyboardEvent, Window};

use crate::config::Markup;
use crate::dom;
use crate::error::WebError;

/// The project carousel bound to its DOM elements.
pub struct CarouselBlock {
    window: Window,
    document: Document,
    viewport: HtmlElement,
    track: HtmlElement,
    cards: Vec<HtmlElement>,
    left: Option<HtmlButtonElement>,
    right: Option<HtmlButtonElement>,
    engine: RefCell<CarouselEngine>,
    resize: RefCell<Debouncer>,
    resize_timer: RefCell<Option<Timeout>>,
    frame_gate: RefCell<FrameGate>,
    frame: RefCell<Option<AnimationFrame>>,
    settle_timer: RefCell<Option<Timeout>>,
}

impl CarouselBlock {
    pub fn find(
        window: &Window,
        document: &Document,
        markup: &Markup,
        config: &CarouselConfig,
    ) -> Result<Rc<Self>, WebError> {
        let viewport: HtmlElement = dom::by_id(document, &markup.carousel_viewport_id)?;
        let track: HtmlElement = dom::by_id(document, &markup.carousel_track_id)?;
        let cards = dom::query_all_in(&track, &markup.carousel_cards)?;
        Ok(Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            viewport,
            track,
            cards,
            left: dom::query(document, &markup.arrow_left)?,
            right: dom::query(document, &markup.arrow_right)?,
            engine: RefCell::new(CarouselEngine::new(config.clone())),
            resize: RefCell::new(Debouncer::new(config.resize_debounce)),
            resize_timer: RefCell::new(None),
            frame_gate: RefCell::new(FrameGate::new()),
            frame: RefCell::new(None),
            settle_timer: RefCell::new(None),
        }))
    }

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left: f64::from(self.viewport.scroll_left()),
            track_width: f64::from(self.track.scroll_width()),
            viewport_width: f64::from(self.viewport.client_width()),
        }
    }

    fn window_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_else(|| f64::from(self.viewport.client_width()))
    }

    fn track_gap(&self) -> (String, String) {
        let Ok(Some(style)) = self.window.get_computed_style(&self.track) else {
            return (String::new(), String::new());
        };
        (
            style.get_property_value("gap").unwrap_or_default(),
            style.get_property_value("column-gap").unwrap_or_default(),
        )
    }

    /// Size the cards now and snap on the next frame, once the browser has reflowed.
    pub fn layout(self: &Rc<Self>) {
        let (gap, column_gap) = self.track_gap();
        let plan = self.engine.borrow().plan_layout(
            self.window_width(),
            dom::rect(&self.viewport).width,
            &gap,
            &column_gap,
        );
        let width = plan.card_width_css();
        for card in &self.cards {
            if let Err(err) = card.style().set_property("width", &width) {
                warn!(error = ?err, "could not size carousel card");
            }
        }
        debug!(
            cards_per_view = plan.cards_per_view,
            card_width = plan.card_width,
            gap = plan.gap,
            "carousel cards sized"
        );

        if !self.frame_gate.borrow_mut().request() {
            return;
        }
        let block = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            block.frame_gate.borrow_mut().fire();
            block.finish_layout();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn finish_layout(&self) {
        let cmd = self.engine.borrow_mut().finish_layout(self.metrics());
        self.apply_scroll(cmd);
        let arrows = self.engine.borrow().arrows();
        self.render_arrows(arrows);
    }

    pub fn page(self: &Rc<Self>, direction: Direction) {
        let cmd = self.engine.borrow_mut().page(direction, self.metrics());
        self.apply_scroll(cmd);
        let block = Rc::clone(self);
        let settle = self.engine.borrow().config().settle_delay;
        let timer = Timeout::new(settle.0, move || {
            block.sync_arrows();
        });
        *self.settle_timer.borrow_mut() = Some(timer);
    }

    fn sync_arrows(&self) {
        let arrows = self.engine.borrow_mut().sync_scroll(self.metrics());
        self.render_arrows(arrows);
    }

    /// Coalesce resize bursts into one layout pass.
    fn schedule_layout(self: &Rc<Self>) {
        let (token, delay) = {
            let mut resize = self.resize.borrow_mut();
            (resize.schedule(), resize.delay())
        };
        let block = Rc::clone(self);
        let timer = Timeout::new(delay.0, move || {
            if block.resize.borrow_mut().fire(token) {
                block.layout();
            }
        });
        // Replacing the handle cancels the superseded timer; a fired handle is
        // kept until then.
        *self.resize_timer.borrow_mut() = Some(timer);
    }

    fn apply_scroll(&self, cmd: ScrollCommand) {
        dom::scroll_to(
            &self.viewport,
            Some(cmd.left),
            None,
            cmd.behavior == ScrollBehavior::Smooth,
        );
    }

    fn render_arrows(&self, arrows: ArrowState) {
        if let Some(left) = &self.left {
            left.set_disabled(arrows.left_disabled);
        }
        if let Some(right) = &self.right {
            right.set_disabled(arrows.right_disabled);
        }
    }

    pub fn install(self: &Rc<Self>, markup: &Markup) -> Vec<EventListener> {
        let mut listeners = Vec::new();

        for (button, direction) in [
            (&self.left, Direction::Previous),
            (&self.right, Direction::Next),
        ] {
            if let Some(button) = button {
                let block = Rc::clone(self);
                listeners.push(EventListener::new(button, "click", move |_| {
                    block.page(direction);
                }));
            }
        }

        let block = Rc::clone(self);
        listeners.push(EventListener::new(&self.viewport, "scroll", move |_| {
            block.sync_arrows();
        }));

        let block = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "resize", move |_| {
            block.schedule_layout();
        }));

        match self.window.match_media(&markup.orientation_query) {
            Ok(Some(query)) => {
                let block = Rc::clone(self);
                listeners.push(EventListener::new(&query, "change", move |_| {
                    block.schedule_layout();
                }));
            }
            Ok(None) => {}
            Err(err) => debug!(error = ?err, "orientation query unavailable"),
        }

        let block = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = event.key();
            let press = KeyPress {
                key: &key,
                focus: dom::focus_kind(&block.document),
                alt: event.alt_key(),
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
                overlay_open: dom::scroll_locked(),
            };
            if let Some(direction) = paging_shortcut(&press) {
                block.page(direction);
            }
        }));

        listeners
    }
}
