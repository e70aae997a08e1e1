// src/ui/resize.rs

use gtk4::glib::{self, SignalHandlerId};
use gtk4::prelude::*;
use gtk4::Window;
use std::cell::Cell;
use std::rc::Rc;

/// Window properties that change when the window is resized.
const SIZE_PROPERTIES: [&str; 4] = ["default-width", "default-height", "maximized", "fullscreened"];

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
}

/// Number of subscriptions currently attached, across all windows.
pub fn live_subscriptions() -> usize {
    LIVE.with(|c| c.get())
}

/// Resize listener registered on a window for as long as this value lives.
/// Dropping it disconnects every handler it installed.
pub struct ResizeSubscription {
    window: glib::WeakRef<Window>,
    handlers: Vec<SignalHandlerId>,
}

impl ResizeSubscription {
    pub fn attach<F: Fn() + 'static>(window: &Window, on_resize: F) -> Self {
        let callback = Rc::new(on_resize);
        let handlers = SIZE_PROPERTIES
            .iter()
            .map(|prop| {
                let cb = callback.clone();
                window.connect_notify_local(Some(*prop), move |_, _| cb())
            })
            .collect();

        LIVE.with(|c| c.set(c.get() + 1));
        Self {
            window: window.downgrade(),
            handlers,
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        LIVE.with(|c| c.set(c.get().saturating_sub(1)));

        // A window that is already gone took its handlers with it.
        if let Some(window) = self.window.upgrade() {
            for id in self.handlers.drain(..) {
                window.disconnect(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_disconnects_handlers() {
        // Needs a display; headless runners skip it.
        if gtk4::init().is_err() {
            return;
        }
        let window = Window::new();
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        let sub = ResizeSubscription::attach(&window, move || h.set(h.get() + 1));
        assert_eq!(live_subscriptions(), 1);

        window.set_default_size(640, 480);
        let seen = hits.get();
        assert!(seen > 0);

        drop(sub);
        assert_eq!(live_subscriptions(), 0);
        window.set_default_size(800, 600);
        assert_eq!(hits.get(), seen);

        window.destroy();
    }
}
