use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `setInterval` registration that is cleared when dropped.
pub struct IntervalTask {
    window: web::Window,
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalTask {
    pub fn start(
        window: &web::Window,
        interval_ms: u32,
        tick: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            window: window.clone(),
            id,
            _closure: closure,
        })
    }
}

impl Drop for IntervalTask {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}
