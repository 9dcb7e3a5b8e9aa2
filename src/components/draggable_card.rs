//! Draggable Card Component
//!
//! Wraps one entry of a reorderable grid. Drag handlers only engage while
//! admin mode is on.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::session::use_admin_session;

#[component]
pub fn DraggableCard(dnd: DndSignals, index: usize, children: Children) -> impl IntoView {
    let session = use_admin_session();

    let on_mousedown = make_on_mousedown(dnd, index);
    let on_mouseenter = make_on_mouseenter(dnd, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let card_class = move || {
        let mut c = String::from("card");
        if session.is_admin() { c.push_str(" draggable"); }
        if dnd.is_dragging(index) { c.push_str(" dragging"); }
        if dnd.is_drop_target(index) && !dnd.is_dragging(index) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=card_class
            on:mousedown=move |ev| {
                if session.is_admin_untracked() {
                    on_mousedown(ev);
                }
            }
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {children()}
        </div>
    }
}
