use hero_core::PointerCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Route window pointer movement and document leave into `pointer`.
pub fn wire_pointer(pointer: Rc<PointerCell>) {
    wire_pointermove(pointer.clone());
    wire_mouseleave(pointer);
}

fn wire_pointermove(pointer: Rc<PointerCell>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::window_inner_size(&window);
        pointer.set_pixels(ev.client_x() as f32, ev.client_y() as f32, w, h);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseleave(pointer: Rc<PointerCell>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        pointer.leave();
    }) as Box<dyn FnMut(_)>);

    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
