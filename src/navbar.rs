use crate::constants::HEADER_ID;
use crate::dom::Listener;
use anyhow::anyhow;
use site_core::{NavbarConfig, NavbarPreset, NavbarStore};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct NavbarWidget {
    _scroll: Listener,
}

pub fn mount(
    window: &web::Window,
    document: &web::Document,
    cfg: &NavbarConfig,
) -> anyhow::Result<NavbarWidget> {
    let header = document
        .get_element_by_id(HEADER_ID)
        .ok_or_else(|| anyhow!("missing #{}", HEADER_ID))?;
    let store = Rc::new(RefCell::new(NavbarStore::new(cfg)));

    let evaluate = {
        let window = window.clone();
        move || {
            let y = window.scroll_y().unwrap_or(0.0);
            if let Some(preset) = store.borrow_mut().update(y) {
                project(&header, preset);
            }
        }
    };
    evaluate();
    let scroll = Listener::new(window.as_ref(), "scroll", move |_: web::Event| evaluate());

    log::info!("[navbar] mounted threshold={}px", cfg.threshold_px);
    Ok(NavbarWidget { _scroll: scroll })
}

fn project(header: &web::Element, preset: NavbarPreset) {
    let classes = header.class_list();
    for c in preset.classes_to_remove() {
        _ = classes.remove_1(c);
    }
    for c in preset.classes_to_add() {
        _ = classes.add_1(c);
    }
}
