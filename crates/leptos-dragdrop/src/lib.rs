//! Leptos DragDrop Utilities
//!
//! Drag-and-drop over an indexed list using mouse events.
//! Uses a movement threshold to distinguish click from drag, and reports
//! each finished gesture as `(source index, destination index)`.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Index being dragged (None = idle)
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Index currently hovered while dragging
    pub drop_target_read: ReadSignal<Option<usize>>,
    pub drop_target_write: WriteSignal<Option<usize>>,
    /// True briefly after a drop so the trailing click can be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DndSignals {
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragging_read.get() == Some(index)
    }

    pub fn is_drop_target(&self, index: usize) -> bool {
        self.dragging_read.get().is_some() && self.drop_target_read.get() == Some(index)
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Form controls inside a card keep their own mouse behaviour
fn is_control(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
}

/// Create mousedown handler for a draggable entry.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if ev.target().is_some_and(|t| is_control(&t)) {
            return;
        }
        dnd.pending_write.set(Some(index));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseenter handler for entries (become drop target)
pub fn make_on_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Window listeners owned by one list. Call `remove` when the list unmounts.
pub struct DndListeners {
    mousemove: WindowListenerHandle,
    mouseup: WindowListenerHandle,
}

impl DndListeners {
    pub fn remove(self) {
        self.mousemove.remove();
        self.mouseup.remove();
    }
}

/// Bind the window-level handlers that start a drag once the pointer moves
/// past the threshold and finish it on mouseup.
///
/// `on_drop(source, destination)` runs for every real drag; `destination`
/// is None when the pointer was released outside any entry.
pub fn bind_global_handlers<F>(dnd: DndSignals, on_drop: F) -> DndListeners
where
    F: Fn(usize, Option<usize>) + 'static,
{
    let mousemove = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        if pending.is_none() || dnd.dragging_read.get_untracked().is_some() {
            return;
        }
        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_write.set(pending);
        }
    });

    let mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let target = dnd.drop_target_read.get_untracked();

        dnd.pending_write.set(None);
        // Without an active drag this was a plain click; the element handles it
        if let Some(source) = dragging {
            end_drag(&dnd);
            on_drop(source, target);
        }
    });

    DndListeners { mousemove, mouseup }
}
