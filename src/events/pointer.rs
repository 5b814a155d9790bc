use crate::app::App;
use crate::constants::ORBIT_RADIANS_PER_PX;
use crate::core::Command;
use crate::input::{self, PickKind};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(app: App, canvas: web::HtmlCanvasElement) {
    wire_pointerdown(&app, &canvas);
    wire_pointermove(&app, &canvas);
    wire_pointerup(&app);
}

// Pointer-down picks a control under the cursor (power button or pad)
// and anchors an orbit drag.
fn wire_pointerdown(app: &App, canvas: &web::HtmlCanvasElement) {
    let app = app.clone();
    let canvas = canvas.clone();
    let canvas_for_listener = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        {
            let mut pointer = app.pointer.borrow_mut();
            pointer.x = pos.x;
            pointer.y = pos.y;
            pointer.down = true;
        }

        let (ro, rd) = app.camera.borrow().screen_to_world_ray(
            canvas.width() as f32,
            canvas.height() as f32,
            pos.x,
            pos.y,
        );
        let targets = app.machine.borrow().pick_targets();
        match input::nearest_pick(ro, rd, &targets) {
            Some(PickKind::PowerButton) => app.dispatch(Command::TogglePower),
            Some(PickKind::Pad(index)) => app.dispatch(Command::PressPad(index)),
            None => {}
        }

        _ = canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Dragging orbits the camera around the machine.
fn wire_pointermove(app: &App, canvas: &web::HtmlCanvasElement) {
    let app = app.clone();
    let canvas = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        let (dx, dy, dragging) = {
            let mut pointer = app.pointer.borrow_mut();
            let dx = pos.x - pointer.x;
            let dy = pos.y - pointer.y;
            pointer.x = pos.x;
            pointer.y = pos.y;
            (dx, dy, pointer.down)
        };
        if dragging {
            app.camera.borrow_mut().orbit(
                -dx * ORBIT_RADIANS_PER_PX,
                -dy * ORBIT_RADIANS_PER_PX,
            );
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(app: &App) {
    let app = app.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app.pointer.borrow_mut().down = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
