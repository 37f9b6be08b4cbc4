use super::transform::Point;

/// On-screen rectangle of the frame the zoomable content is laid out in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContentRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Source of the content frame's current client rectangle.
pub trait GeometryProbe {
    fn content_rect(&self) -> ContentRect;

    /// Converts a client-space position into content-local pixels.
    fn to_local(&self, client: Point) -> Point {
        let rect = self.content_rect();
        Point::new(client.x - rect.left, client.y - rect.top)
    }
}

impl GeometryProbe for ContentRect {
    fn content_rect(&self) -> ContentRect {
        *self
    }
}

impl GeometryProbe for web_sys::Element {
    fn content_rect(&self) -> ContentRect {
        let r = self.get_bounding_client_rect();
        ContentRect::new(r.left(), r.top(), r.width(), r.height())
    }
}
