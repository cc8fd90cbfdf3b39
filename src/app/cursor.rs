use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::cosmetics::{cursor_offsets, is_clickable, CURSOR_VISIBILITY};

fn hovering_clickable(e: &MouseEvent) -> bool {
    let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    let cursor = window()
        .get_computed_style(&el)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("cursor").ok());
    is_clickable(&el.tag_name(), cursor.as_deref())
}

/// Ring and dot that follow the pointer on wide screens.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let (position, set_position) = signal((-100.0_f64, -100.0_f64));
    let (pointer, set_pointer) = signal(false);

    let _ = use_event_listener(use_window(), ev::mousemove, move |e: MouseEvent| {
        set_position.set((e.client_x() as f64, e.client_y() as f64));
        let clickable = hovering_clickable(&e);
        if clickable != pointer.get_untracked() {
            set_pointer.set(clickable);
        }
    });

    let ring = move || {
        let ((x, y), _) = cursor_offsets(position.get().0, position.get().1);
        let scale = if pointer.get() { 1.5 } else { 1.0 };
        format!("transform: translate({x}px, {y}px) scale({scale})")
    };
    let dot = move || {
        let (_, (x, y)) = cursor_offsets(position.get().0, position.get().1);
        format!("transform: translate({x}px, {y}px)")
    };

    view! {
        <div class=format!("{CURSOR_VISIBILITY} pointer-events-none")>
            <div
                class="fixed top-0 left-0 w-8 h-8 rounded-full border-2 border-cyan-400 z-[9999] mix-blend-difference transition-transform duration-150 ease-out"
                style=ring
            />
            <div
                class="fixed top-0 left-0 w-2 h-2 rounded-full bg-cyan-400 z-[9999] mix-blend-difference"
                style=dot
            />
        </div>
    }
}
