use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::FrameScheduler;
use anyhow::anyhow;
use glam::Vec2;
use site_core::card::{self, CardEvent, CardStore, CardStyles};
use site_core::{SiteConfig, TiltConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CardElements {
    scene: web::HtmlElement,
    card: web::HtmlElement,
    shine: web::HtmlElement,
    shadow: web::HtmlElement,
}

/// Tilt + flip widget for `#business-card`. Dropping it detaches every listener.
pub struct CardWidget {
    _listeners: Vec<Listener>,
    _frames: FrameScheduler,
}

struct CardShared {
    els: CardElements,
    store: RefCell<CardStore>,
    tilt: TiltConfig,
    reflow_on_flip: bool,
}

impl CardShared {
    fn render(&self) {
        let styles = card::render(&self.store.borrow(), &self.tilt);
        project(&self.els, &styles, self.reflow_on_flip);
    }
}

pub fn mount(
    window: &web::Window,
    document: &web::Document,
    cfg: &SiteConfig,
) -> anyhow::Result<CardWidget> {
    let scene = document
        .get_element_by_id(CARD_SCENE_ID)
        .ok_or_else(|| anyhow!("missing #{}", CARD_SCENE_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("#{} is not an HTML element", CARD_SCENE_ID))?;
    let els = CardElements {
        card: dom::query_html(&scene, CARD_OBJECT_SELECTOR)?,
        shine: dom::query_html(&scene, SHINE_SELECTOR)?,
        shadow: dom::query_html(&scene, SHADOW_SELECTOR)?,
        scene,
    };
    let shared = Rc::new(CardShared {
        els,
        store: RefCell::new(CardStore::new()),
        tilt: cfg.tilt.clone(),
        reflow_on_flip: cfg.force_reflow_on_flip,
    });

    let frames = {
        let shared = shared.clone();
        FrameScheduler::new(move || {
            shared.render();
            false
        })
    };

    let target: &web::EventTarget = shared.els.scene.as_ref();
    let mut listeners = Vec::new();

    let tilt_enabled = cfg
        .hover_policy
        .allows_tilt(dom::hover_media_matches(window), dom::touch_capable(window));
    if tilt_enabled {
        let on_move = shared.clone();
        let frame = frames.requester();
        listeners.push(Listener::new(target, "mousemove", move |ev: web::MouseEvent| {
            let rect = on_move.els.scene.get_bounding_client_rect();
            let pos = Vec2::new(
                (ev.client_x() as f64 - rect.left()) as f32,
                (ev.client_y() as f64 - rect.top()) as f32,
            );
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            let interacting = {
                let mut store = on_move.store.borrow_mut();
                store.apply(CardEvent::PointerMove { pos, size });
                store.interacting()
            };
            dom::set_class(&on_move.els.card, INTERACTING_CLASS, interacting);
            frame.request();
        }));

        let on_leave = shared.clone();
        listeners.push(Listener::new(target, "mouseleave", move |_: web::MouseEvent| {
            on_leave.store.borrow_mut().apply(CardEvent::PointerLeave);
            on_leave.render();
        }));
    }

    let on_click = shared.clone();
    listeners.push(Listener::new(target, "click", move |ev: web::MouseEvent| {
        if clicked_link(&ev) {
            return;
        }
        on_click.store.borrow_mut().apply(CardEvent::Flip);
        on_click.render();
    }));

    log::info!(
        "[card] mounted tilt={} policy={:?} max_tilt={}",
        tilt_enabled,
        cfg.hover_policy,
        cfg.tilt.max_tilt_deg
    );
    Ok(CardWidget {
        _listeners: listeners,
        _frames: frames,
    })
}

fn clicked_link(ev: &web::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(LINK_SELECTOR).ok().flatten())
        .is_some()
}

/// Write one render of the card. Inline styles go first so that, when the
/// flip class changes, the class rule is the only thing driving the transform.
fn project(els: &CardElements, styles: &CardStyles, reflow_on_flip: bool) {
    dom::set_class(&els.card, INTERACTING_CLASS, styles.interacting);
    dom::set_style(&els.card, "transform", &styles.card_transform);
    if let Some(background) = &styles.shine_background {
        dom::set_style(&els.shine, "background", background);
    }
    dom::set_style(&els.shine, "opacity", &styles.shine_opacity.to_string());
    dom::set_style(&els.shadow, "opacity", &styles.shadow_opacity.to_string());
    dom::set_style(&els.shadow, "transform", &styles.shadow_transform);
    if els.card.class_list().contains(FLIPPED_CLASS) != styles.flipped {
        if reflow_on_flip {
            // Reading layout commits the cleared styles before the class flips.
            _ = els.card.offset_width();
        }
        dom::set_class(&els.card, FLIPPED_CLASS, styles.flipped);
    }
}
