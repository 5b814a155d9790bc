use crate::app::App;
use crate::core::command_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Translate keydown events into pad commands via the binding table.
/// Unknown keys fall through untouched.
pub fn wire_global_keydown(app: App) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if let Some(command) = command_for_key(&ev.key()) {
                    app.dispatch(command);
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
