// Pan/zoom transform applied to the lightbox image

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 3.0;

/// Scales this close to `MIN_ZOOM` count as fully zoomed out. Repeated
/// `+0.1` / `-0.1` button steps drift by a few ulps and must still snap home.
const SNAP_TOLERANCE: f64 = 1e-9;

/// A position in either client or content-local pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

/// `translate(tx, ty) scale(scale)` in that order, with the content's
/// transform origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::canonical()
    }
}

impl Transform {
    /// The reset state: 1:1 scale, no panning.
    pub const fn canonical() -> Self {
        Self {
            scale: MIN_ZOOM,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_ZOOM
    }

    pub fn is_canonical(&self) -> bool {
        *self == Self::canonical()
    }

    pub fn reset(&mut self) {
        *self = Self::canonical();
    }

    /// Clamps `scale` into `[MIN_ZOOM, max_zoom]`, snapping near-minimum values.
    pub fn clamp_scale(scale: f64, max_zoom: f64) -> f64 {
        let clamped = scale.clamp(MIN_ZOOM, max_zoom.max(MIN_ZOOM));
        if clamped - MIN_ZOOM <= SNAP_TOLERANCE {
            MIN_ZOOM
        } else {
            clamped
        }
    }

    /// Sets a new scale, keeping the current translate unless the clamped
    /// scale lands on `MIN_ZOOM`, in which case the whole transform resets.
    /// Returns false when `scale` is not a finite number.
    pub fn apply_or_reset(&mut self, scale: f64, max_zoom: f64) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let scale = Self::clamp_scale(scale, max_zoom);
        if scale == MIN_ZOOM {
            self.reset();
        } else {
            self.scale = scale;
        }
        true
    }

    /// Zooms to `scale` keeping the content point under `anchor` (content-local
    /// pixels) fixed on screen.
    pub fn zoom_about(&mut self, anchor: Point, scale: f64, max_zoom: f64) -> bool {
        if !scale.is_finite() || !anchor.x.is_finite() || !anchor.y.is_finite() {
            return false;
        }
        let rel = self.content_at(anchor);
        let scale = Self::clamp_scale(scale, max_zoom);
        if scale == MIN_ZOOM {
            self.reset();
            return true;
        }
        self.scale = scale;
        self.translate_x = anchor.x - rel.x * scale;
        self.translate_y = anchor.y - rel.y * scale;
        true
    }

    /// Content-space point currently displayed at `screen`.
    pub fn content_at(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translate_x) / self.scale,
            (screen.y - self.translate_y) / self.scale,
        )
    }

    /// Where the content-space point `content` is displayed.
    pub fn screen_of(&self, content: Point) -> Point {
        Point::new(
            self.translate_x + content.x * self.scale,
            self.translate_y + content.y * self.scale,
        )
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}
