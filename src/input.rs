use glam::Vec2;

/// Latest pointer position and presses queued since the last frame.
#[derive(Default, Clone, Debug)]
pub struct PointerState {
    /// Normalized device coordinates, x right and y up, both in -1..1.
    pub ndc: Vec2,
    pub presses: Vec<Vec2>,
}

impl PointerState {
    pub fn record_move(&mut self, ndc: Vec2) {
        self.ndc = ndc;
    }

    pub fn record_press(&mut self, ndc: Vec2) {
        self.ndc = ndc;
        self.presses.push(ndc);
    }

    pub fn take_presses(&mut self) -> Vec<Vec2> {
        std::mem::take(&mut self.presses)
    }
}

/// Map a CSS-pixel position inside an element rect to NDC (y up), clamped to -1..1.
/// A degenerate rect maps to the center.
#[inline]
pub fn css_to_ndc(x_css: f32, y_css: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0 && height > 0.0) {
        return Vec2::ZERO;
    }
    let u = (x_css / width).clamp(0.0, 1.0);
    let v = (y_css / height).clamp(0.0, 1.0);
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

#[inline]
pub fn clamp_device_pixel_ratio(dpr: f64, min: f64, max: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(min, max)
    } else {
        min
    }
}

/// Backing-store size in device pixels for a CSS box, never below 1x1.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr).round().max(1.0) as u32;
    let h = (css_height * dpr).round().max(1.0) as u32;
    (w, h)
}
