//! Animation-Frame Debounce
//!
//! Hover highlighting runs on the next animation frame, and a newer hover
//! selection cancels a still-pending pass. The scheduler is a trait so the
//! coalescing behavior is testable without a rendering surface.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Cancellable one-shot callback scheduler
pub trait FrameScheduler {
    type Handle;

    fn schedule(&mut self, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a scheduled callback; cancelling one that already ran is a
    /// no-op
    fn cancel(&mut self, handle: Self::Handle);
}

/// Coalesces rapid requests: only the most recent callback runs
pub struct FrameDebounce<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> FrameDebounce<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Schedule `callback`, cancelling any still-pending one first
    pub fn request(&mut self, callback: Box<dyn FnOnce()>) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.pending = Some(self.scheduler.schedule(callback));
    }
}

/// `requestAnimationFrame`-backed scheduler. The closure is kept alive in
/// the handle so cancelling also frees it.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = (i32, Closure<dyn FnMut()>);

    fn schedule(&mut self, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let mut callback = Some(callback);
        let closure = Closure::new(move || {
            if let Some(f) = callback.take() {
                f();
            }
        });
        let id = web_sys::window()
            .and_then(|win| {
                win.request_animation_frame(closure.as_ref().unchecked_ref())
                    .ok()
            })
            .unwrap_or(0);
        (id, closure)
    }

    fn cancel(&mut self, (id, closure): Self::Handle) {
        if let Some(win) = web_sys::window() {
            let _ = win.cancel_animation_frame(id);
        }
        drop(closure);
    }
}
