use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::Window;

struct LoopState {
    origin: f64,
    running: Cell<bool>,
    /// Queued frame; dropping it cancels the browser callback.
    pending: RefCell<Option<AnimationFrame>>,
    on_frame: RefCell<Box<dyn FnMut(f64)>>,
}

fn schedule(state: &Rc<LoopState>) {
    // Weak so a queued frame does not keep a stopped loop alive.
    let weak: Weak<LoopState> = Rc::downgrade(state);
    let frame = request_animation_frame(move |timestamp| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.pending.borrow_mut().take();
        if !state.running.get() {
            return;
        }
        let elapsed = (timestamp - state.origin).max(0.0);
        (*state.on_frame.borrow_mut())(elapsed);
        if state.running.get() {
            schedule(&state);
        }
    });
    *state.pending.borrow_mut() = Some(frame);
}

/// `requestAnimationFrame` loop with an explicit stop condition.
///
/// `on_frame` receives the milliseconds elapsed since `start`. The `running`
/// flag is checked on entry to every frame, so a stopped loop never draws.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(window: &Window, on_frame: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(LoopState {
            origin: window.performance().map(|p| p.now()).unwrap_or(0.0),
            running: Cell::new(true),
            pending: RefCell::new(None),
            on_frame: RefCell::new(Box::new(on_frame)),
        });
        schedule(&state);
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.state.pending.borrow().is_some()
    }

    /// Cancel the queued frame. Idempotent.
    pub fn stop(&self) {
        self.state.running.set(false);
        self.state.pending.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
