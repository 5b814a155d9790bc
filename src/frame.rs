//! The continuous redraw loop, driven by requestAnimationFrame.

use crate::app::App;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: App,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
    /// Millisecond clock for pad revert deadlines.
    pub epoch: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;

        self.app.drain_commands(now_ms);

        let mut machine = self.app.machine.borrow_mut();
        machine.state.tick(now_ms);
        machine.sync();

        if let Some(gpu) = &mut self.gpu {
            let width = self.canvas.width();
            let height = self.canvas.height();
            gpu.resize_if_needed(width, height);

            let camera = self.app.camera.borrow();
            let aspect = width as f32 / height.max(1) as f32;
            gpu.set_camera(camera.projection_matrix(aspect) * camera.view_matrix());
            drop(camera);

            if let Err(e) = gpu.render(machine.instances()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    meshes: &[crate::core::MeshData],
    max_instances: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, meshes, max_instances).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
