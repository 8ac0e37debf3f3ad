use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::FrameScheduler;
use instant::Instant;
use site_core::reveal::{ParseError, Reveal};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Binding {
    reveal: Reveal,
    trigger: web::HtmlElement,
    targets: Vec<web::HtmlElement>,
}

impl Binding {
    fn refresh(&mut self, viewport_height: f32) {
        let (top, height) = dom::layout_box(&self.trigger);
        self.reveal.refresh(top, height, viewport_height);
    }

    /// Write sampled styles if the playhead moved since the last render.
    fn render(&mut self) {
        if !self.reveal.timeline.take_dirty() {
            return;
        }
        for (i, style) in self.reveal.timeline.sample() {
            if let Some(el) = self.targets.get(i) {
                for (prop, value) in style.css() {
                    dom::set_style(el, prop, &value);
                }
            }
        }
    }
}

/// Scroll-triggered entrance animations. Timelines advance on animation
/// frames only while at least one of them is playing.
pub struct RevealDriver {
    _listeners: Vec<Listener>,
    _frames: FrameScheduler,
}

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<RevealDriver> {
    let mut bindings = Vec::new();

    for el in dom::query_all_html(document, REVEAL_UP_SELECTOR) {
        push_binding(&mut bindings, Reveal::fade_up(), el.clone(), vec![el]);
    }

    let points = dom::query_all_html(document, MAP_POINT_SELECTOR);
    if let Some(first) = points.first() {
        let trigger = document
            .get_element_by_id(MAP_SECTION_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .unwrap_or_else(|| first.clone());
        push_binding(&mut bindings, Reveal::map_points(points.len()), trigger, points);
    }

    let masks = dom::query_all_html(document, MASK_IMAGE_SELECTOR);
    if let Some(img) = masks.into_iter().next() {
        push_binding(&mut bindings, Reveal::mask_image(), img.clone(), vec![img]);
    }

    if bindings.is_empty() {
        anyhow::bail!("nothing to reveal");
    }
    let count = bindings.len();
    let vh = dom::viewport_height(window);
    for b in bindings.iter_mut() {
        // measured before the first render writes any transform
        b.refresh(vh);
        b.render();
    }
    let bindings = Rc::new(RefCell::new(bindings));

    let last_frame: Rc<Cell<Option<Instant>>> = Rc::new(Cell::new(None));
    let frames = {
        let bindings = bindings.clone();
        FrameScheduler::new(move || {
            let now = Instant::now();
            let dt = last_frame
                .replace(Some(now))
                .map(|prev| smooth_lag((now - prev).as_secs_f32()))
                .unwrap_or(0.0);
            let mut running = false;
            for b in bindings.borrow_mut().iter_mut() {
                running |= b.reveal.advance(dt);
                b.render();
            }
            if !running {
                last_frame.set(None);
            }
            running
        })
    };

    let evaluate = {
        let window = window.clone();
        let bindings = bindings.clone();
        let frame = frames.requester();
        move || {
            let scroll_y = dom::scroll_y(&window);
            let mut running = false;
            for b in bindings.borrow_mut().iter_mut() {
                running |= b.reveal.on_scroll(scroll_y);
                // reset/complete actions jump without playing
                b.render();
            }
            if running {
                frame.request();
            }
        }
    };
    evaluate();

    let on_resize = {
        let window = window.clone();
        let bindings = bindings.clone();
        let evaluate = evaluate.clone();
        move |_: web::Event| {
            let vh = dom::viewport_height(&window);
            for b in bindings.borrow_mut().iter_mut() {
                b.refresh(vh);
            }
            evaluate();
        }
    };

    let target: &web::EventTarget = window.as_ref();
    let listeners = vec![
        Listener::new(target, "scroll", move |_: web::Event| evaluate()),
        Listener::new(target, "resize", on_resize),
    ];

    log::info!("[reveal] mounted {} reveals", count);
    Ok(RevealDriver {
        _listeners: listeners,
        _frames: frames,
    })
}

fn push_binding(
    bindings: &mut Vec<Binding>,
    reveal: Result<Reveal, ParseError>,
    trigger: web::HtmlElement,
    targets: Vec<web::HtmlElement>,
) {
    match reveal {
        Ok(reveal) => bindings.push(Binding {
            reveal,
            trigger,
            targets,
        }),
        Err(e) => log::warn!("[reveal] skipped: {}", e),
    }
}

/// Stretches after a stalled tab would otherwise jump animations to the end.
fn smooth_lag(dt: f32) -> f32 {
    if dt > LAG_THRESHOLD_SEC {
        LAG_STEP_SEC
    } else {
        dt
    }
}
