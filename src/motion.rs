//! Animation math for the background: gradient drift, blob motion and the
//! layered passes that fake a blur. All times are milliseconds since the
//! renderer started; all lengths are logical (CSS) pixels.

use std::f64::consts::{PI, TAU};

/// Overlaid draws per blob.
pub const BLUR_PASSES: usize = 4;
/// Radius of the circle the pass centres are spread along.
pub const BLUR_RADIUS: f64 = 30.0;
/// Global alpha of a single pass; the passes together sum to 0.5.
pub const PASS_ALPHA: f64 = 0.5 / BLUR_PASSES as f64;
/// Distance of blob2's anchor from the bottom-right corner.
pub const CORNER_MARGIN: f64 = 150.0;

/// Angular speed of the gradient drift, radians per ms.
const GRADIENT_SPEED: f64 = 0.0004;
/// Angular speed of the ellipse wobble, radians per ms.
const WOBBLE_SPEED: f64 = 0.001;
const WOBBLE_AMPLITUDE: f64 = 0.2;

/// Gradient colors ordered warm to cool.
pub const GRADIENT_COLORS: [&str; 4] = ["#ffdabe", "#ffc0cb", "#e6e6fa", "#add8e6"];

/// `3x² − 2x³`, clamped to the unit interval.
pub fn smoothstep(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Color stops `(offset, color)` of the diagonal background gradient at `t`.
///
/// The two inner stops slide by up to 0.1 with a slow sine; the ends stay put.
pub fn gradient_stops(t: f64) -> [(f64, &'static str); 4] {
    let drift = (t * GRADIENT_SPEED).sin() * 0.5 + 0.5;
    let [warm, pink, lavender, cool] = GRADIENT_COLORS;
    [
        (0.0, warm),
        (0.3 + drift * 0.1, pink),
        (0.6 + drift * 0.1, lavender),
        (1.0, cool),
    ]
}

/// Centre offset of blur pass `index`, spread along a circle and growing with
/// the index so the first pass sits on the true centre.
pub fn pass_offset(index: usize) -> (f64, f64) {
    let angle = index as f64 / BLUR_PASSES as f64 * TAU;
    let reach = BLUR_RADIUS * (index as f64 / (BLUR_PASSES - 1) as f64);
    (angle.cos() * reach, angle.sin() * reach)
}

/// Translation and scale derived from an eased motion parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub eased: f64,
    pub offset: (f64, f64),
    pub scale: f64,
}

impl Motion {
    pub fn from_eased(eased: f64) -> Self {
        Self {
            eased,
            offset: (20.0 * eased, -30.0 * eased),
            scale: 1.0 + 0.1 * eased,
        }
    }
}

/// Ellipse drawn for every pass, in the blob's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseShape {
    pub center: (f64, f64),
    pub radius: (f64, f64),
    pub rotation: f64,
}

/// Everything needed to paint one blob for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobFrame {
    pub motion: Motion,
    pub shape: EllipseShape,
    /// Where each pass's local frame is centred, before scaling.
    pub centres: [(f64, f64); BLUR_PASSES],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub base: (f64, f64),
    pub size: (f64, f64),
    pub color: &'static str,
    pub duration_ms: f64,
    /// Forward motion when set; reversed relative to elapsed time otherwise.
    pub alternate: bool,
}

impl Blob {
    /// Light blob pinned near the top-left corner.
    pub fn upper_left() -> Self {
        Self {
            base: (-100.0, -100.0),
            size: (450.0, 450.0),
            color: "rgba(170, 180, 200, 0.5)",
            duration_ms: 20_000.0,
            alternate: true,
        }
    }

    /// Teal blob anchored to the bottom-right corner of the viewport.
    pub fn lower_right(width: f64, height: f64) -> Self {
        Self {
            base: corner_anchor(width, height),
            size: (550.0, 550.0),
            color: "rgba(60, 140, 130, 0.6)",
            duration_ms: 25_000.0,
            alternate: false,
        }
    }

    /// Linear position within the current cycle, in `[0, 1)`.
    pub fn progress(&self, t: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        t.rem_euclid(self.duration_ms) / self.duration_ms
    }

    /// Progress, mirrored when the blob runs in reverse.
    pub fn phase(&self, t: f64) -> f64 {
        let progress = self.progress(t);
        if self.alternate {
            progress
        } else {
            1.0 - progress
        }
    }

    pub fn motion(&self, t: f64) -> Motion {
        Motion::from_eased(smoothstep(self.phase(t)))
    }

    /// Ellipse slightly stretched along one axis, squeezed along the other and
    /// tilted, so the outline never settles into a plain oval.
    pub fn shape(&self, t: f64) -> EllipseShape {
        let shift = if self.alternate { 0.0 } else { PI };
        let variation = (t * WOBBLE_SPEED + shift).sin() * WOBBLE_AMPLITUDE;
        let (w, h) = self.size;
        EllipseShape {
            center: (w / 2.0, h / 2.0),
            radius: (w / 2.0 * (1.0 + variation), h / 2.0 * (1.0 - variation * 0.5)),
            rotation: variation * 0.3,
        }
    }

    pub fn frame(&self, t: f64) -> BlobFrame {
        let motion = self.motion(t);
        let (x, y) = (self.base.0 + motion.offset.0, self.base.1 + motion.offset.1);
        let (half_w, half_h) = (self.size.0 / 2.0, self.size.1 / 2.0);
        let mut centres = [(0.0, 0.0); BLUR_PASSES];
        for (i, centre) in centres.iter_mut().enumerate() {
            let (dx, dy) = pass_offset(i);
            *centre = (x + half_w + dx, y + half_h + dy);
        }
        BlobFrame {
            motion,
            shape: self.shape(t),
            centres,
        }
    }
}

fn corner_anchor(width: f64, height: f64) -> (f64, f64) {
    (width - CORNER_MARGIN, height - CORNER_MARGIN)
}

/// Logical viewport size plus device pixel density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Non-finite or non-positive densities count as 1.
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self { width, height, dpr }
    }

    /// Backing buffer size in physical pixels, truncated like a fractional
    /// assignment to `canvas.width`.
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |logical: f64| (logical * self.dpr).floor().max(0.0) as u32;
        (px(self.width), px(self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// The two blobs painted over the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub upper: Blob,
    pub lower: Blob,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            upper: Blob::upper_left(),
            lower: Blob::lower_right(width, height),
        }
    }

    /// Re-pin the corner blob; the upper blob's anchor does not depend on the
    /// viewport.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.lower.base = corner_anchor(width, height);
    }

    pub fn blobs(&self) -> [&Blob; 2] {
        [&self.upper, &self.lower]
    }
}
