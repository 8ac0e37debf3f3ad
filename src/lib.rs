#![cfg(target_arch = "wasm32")]
use site_core::{Lifecycle, SiteConfig, CONFIG_ATTRIBUTES};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod card;
mod constants;
mod cycler;
mod dom;
mod frame;
mod navbar;
mod reveal;
mod timer;

thread_local! {
    static SITE: RefCell<Lifecycle<Site>> = const { RefCell::new(Lifecycle::Pending) };
}

/// Every mounted widget. A widget whose elements are missing stays `None`
/// and the rest of the page keeps working.
struct Site {
    _card: Option<card::CardWidget>,
    _cycler: Option<cycler::CyclerWidget>,
    _navbar: Option<navbar::NavbarWidget>,
    _reveals: Option<reveal::RevealDriver>,
}

impl Site {
    fn mount(window: &web::Window, document: &web::Document, cfg: &SiteConfig) -> Self {
        Self {
            _card: optional("card", card::mount(window, document, cfg)),
            _cycler: optional("map", cycler::mount(window, document, &cfg.cycler)),
            _navbar: optional("navbar", navbar::mount(window, document, &cfg.navbar)),
            _reveals: optional("reveal", reveal::mount(window, document)),
        }
    }
}

fn optional<T>(name: &str, mounted: anyhow::Result<T>) -> Option<T> {
    match mounted {
        Ok(w) => Some(w),
        Err(e) => {
            log::warn!("[{}] not mounted: {:#}", name, e);
            None
        }
    }
}

/// Defaults overridden by `data-*` attributes on `<body>`, then on the card scene.
fn load_config(document: &web::Document) -> SiteConfig {
    let mut cfg = SiteConfig::default();
    let sources: [Option<web::Element>; 2] = [
        document.body().map(Into::into),
        document.get_element_by_id(constants::CARD_SCENE_ID),
    ];
    for el in sources.iter().flatten() {
        let pairs: Vec<(&str, String)> = CONFIG_ATTRIBUTES
            .iter()
            .filter_map(|name| el.get_attribute(name).map(|v| (*name, v)))
            .collect();
        cfg.apply_attributes(pairs.iter().map(|(n, v)| (*n, v.as_str())));
    }
    cfg
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    let cfg = load_config(&document);
    if SITE.with(|s| s.borrow().is_torn_down()) {
        log::info!("torn down before init finished; not mounting");
        return Ok(());
    }
    let site = Site::mount(&window, &document, &cfg);
    let refused = SITE.with(|s| s.borrow_mut().mount(site));
    if let Err(site) = refused {
        drop(site);
        log::info!("torn down while mounting; site dropped");
    }
    Ok(())
}

/// Detach every listener, cancel pending frames and stop the map timer.
#[wasm_bindgen]
pub fn teardown() {
    let site = SITE.with(|s| s.borrow_mut().teardown());
    if site.is_some() {
        drop(site);
        log::info!("site-web torn down");
    }
}
