use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::frame::FrameLoop;
use crate::motion::{gradient_stops, Blob, EllipseShape, Scene, Viewport, PASS_ALPHA};

/// Keeps the canvas fixed behind all content and out of pointer hit-testing.
const CANVAS_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("z-index", "-1"),
    ("pointer-events", "none"),
];

struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Cell<Viewport>,
    scene: RefCell<Scene>,
}

impl Surface {
    /// Match the backing buffer to the canvas's CSS box at the current pixel
    /// density and re-pin the corner blob.
    fn resize(&self, window: &Window) -> Result<(), JsValue> {
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = Viewport::new(rect.width(), rect.height(), window.device_pixel_ratio());
        let (width, height) = viewport.pixel_size();
        // Resizing the buffer resets the context, transform included.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.ctx
            .set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;

        self.scene.borrow_mut().resize(viewport.width, viewport.height);
        self.viewport.set(viewport);
        log::debug!(
            "background resized to {}x{} ({}x{} px)",
            viewport.width,
            viewport.height,
            width,
            height
        );
        Ok(())
    }

    fn draw(&self, t: f64) -> Result<(), JsValue> {
        let Viewport { width, height, .. } = self.viewport.get();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width, height);

        let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
        for (offset, color) in gradient_stops(t) {
            gradient.add_color_stop(offset as f32, color)?;
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, width, height);

        let scene = *self.scene.borrow();
        for blob in scene.blobs() {
            self.draw_blob(blob, t)?;
        }
        Ok(())
    }

    fn draw_blob(&self, blob: &Blob, t: f64) -> Result<(), JsValue> {
        let frame = blob.frame(t);
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(PASS_ALPHA);
        ctx.set_fill_style_str(blob.color);
        let mut drawn = Ok(());
        for centre in frame.centres {
            ctx.save();
            drawn = self.draw_pass(blob, centre, frame.motion.scale, &frame.shape);
            ctx.restore();
            if drawn.is_err() {
                break;
            }
        }
        ctx.restore();
        drawn
    }

    fn draw_pass(
        &self,
        blob: &Blob,
        centre: (f64, f64),
        scale: f64,
        shape: &EllipseShape,
    ) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.translate(centre.0, centre.1)?;
        ctx.scale(scale, scale)?;
        ctx.translate(-blob.size.0 / 2.0, -blob.size.1 / 2.0)?;
        ctx.begin_path();
        ctx.ellipse(
            shape.center.0,
            shape.center.1,
            shape.radius.0,
            shape.radius.1,
            shape.rotation,
            0.0,
            TAU,
        )?;
        ctx.fill();
        Ok(())
    }
}

struct Running {
    surface: Rc<Surface>,
    frames: FrameLoop,
    _resize: EventListener,
}

/// Full-viewport animated canvas drawn behind the page.
#[derive(Default)]
pub struct BackgroundRenderer {
    running: Option<Running>,
}

impl BackgroundRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the canvas as the first child of `body`, size it and start the
    /// frame loop. Does nothing when already running.
    pub fn init(&mut self) -> Result<(), JsValue> {
        if self.running.is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("document has no body")?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let style = canvas.style();
        for (property, value) in CANVAS_STYLE {
            style.set_property(property, value)?;
        }
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2D canvas not supported")?
            .dyn_into()?;
        body.insert_before(&canvas, body.first_child().as_ref())?;

        let surface = Rc::new(Surface {
            canvas,
            ctx,
            viewport: Cell::new(Viewport::default()),
            scene: RefCell::new(Scene::new(0.0, 0.0)),
        });
        if let Err(err) = surface.resize(&window) {
            surface.canvas.remove();
            return Err(err);
        }

        let resize = {
            let surface = surface.clone();
            let window_for_resize = window.clone();
            EventListener::new(&window, "resize", move |_| {
                if let Err(err) = surface.resize(&window_for_resize) {
                    log::warn!("background resize failed: {:?}", err);
                }
            })
        };

        let frames = {
            let surface = surface.clone();
            FrameLoop::start(&window, move |t| {
                if let Err(err) = surface.draw(t) {
                    log::error!("background frame failed: {:?}", err);
                }
            })
        };

        log::info!("background animation started");
        self.running = Some(Running {
            surface,
            frames,
            _resize: resize,
        });
        Ok(())
    }

    /// Cancel the pending frame, drop the resize listener and detach the
    /// canvas. Safe before `init` and after a previous `destroy`.
    pub fn destroy(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        running.frames.stop();
        running.surface.canvas.remove();
        log::info!("background animation stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| running.frames.is_running())
    }

    pub fn has_pending_frame(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| running.frames.has_pending_frame())
    }

    pub fn canvas(&self) -> Option<HtmlCanvasElement> {
        self.running
            .as_ref()
            .map(|running| running.surface.canvas.clone())
    }

    /// Blob layout as of the last resize.
    pub fn scene(&self) -> Option<Scene> {
        self.running
            .as_ref()
            .map(|running| *running.surface.scene.borrow())
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.running
            .as_ref()
            .map(|running| running.surface.viewport.get())
    }
}

impl Drop for BackgroundRenderer {
    fn drop(&mut self) {
        self.destroy();
    }
}
