use crate::constants::{ACTIVE_CLASS, MAP_POINT_SELECTOR};
use crate::dom;
use crate::timer::IntervalTask;
use anyhow::bail;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{CycleStep, CyclerConfig, MapCycler};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Highlights one random `.map-point` at a time. Dropping the widget stops
/// the timer and clears the highlight.
pub struct CyclerWidget {
    points: Rc<Vec<web::HtmlElement>>,
    cycler: Rc<RefCell<MapCycler<StdRng>>>,
    _task: IntervalTask,
}

pub fn mount(
    window: &web::Window,
    document: &web::Document,
    cfg: &CyclerConfig,
) -> anyhow::Result<CyclerWidget> {
    let points = Rc::new(dom::query_all_html(document, MAP_POINT_SELECTOR));
    if points.is_empty() {
        bail!("no {} elements", MAP_POINT_SELECTOR);
    }
    let cycler = Rc::new(RefCell::new(MapCycler::new(
        points.len(),
        cfg.max_retries,
        StdRng::from_entropy(),
    )));

    let tick = {
        let points = points.clone();
        let cycler = cycler.clone();
        move || {
            let step = cycler.borrow_mut().tick();
            apply_step(&points, step);
        }
    };
    tick();
    let task = IntervalTask::start(window, cfg.interval_ms, tick)?;

    log::info!(
        "[map] cycling {} points every {}ms",
        points.len(),
        cfg.interval_ms
    );
    Ok(CyclerWidget {
        points,
        cycler,
        _task: task,
    })
}

fn apply_step(points: &[web::HtmlElement], step: CycleStep) {
    if let Some(el) = step.deactivate.and_then(|i| points.get(i)) {
        dom::set_class(el, ACTIVE_CLASS, false);
    }
    if let Some(el) = step.activate.and_then(|i| points.get(i)) {
        dom::set_class(el, ACTIVE_CLASS, true);
    }
}

impl Drop for CyclerWidget {
    fn drop(&mut self) {
        let step = self.cycler.borrow_mut().clear();
        apply_step(&self.points, step);
    }
}
