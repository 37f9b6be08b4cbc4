// Raw input classification: drag vs click, one vs two fingers
use super::transform::{Point, Transform};

/// Raw input delivered by the host page. Coordinates are client pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Wheel { delta_y: f64, x: f64, y: f64 },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    /// Touch points still on the surface after the lift.
    TouchEnd(Vec<Point>),
    Click { x: f64, y: f64 },
    BackdropClick,
    KeyDown(String),
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

/// Canonical intent derived from one or more raw events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    WheelZoom { zoom_in: bool, anchor: Point },
    PanStart,
    PanTo { x: f64, y: f64 },
    PanEnd,
    PinchStart,
    PinchZoom { scale: f64, anchor: Point },
    ToggleZoom { anchor: Point },
    StepIn,
    StepOut,
    Reset,
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    pub distance: f64,
    pub scale: f64,
}

#[derive(Default, Debug, Clone)]
pub struct GestureState {
    pub panning: bool,
    pub press: Point,
    pub drag_origin: Point,
    pub dragged: bool,
    pub pinch: Option<PinchBaseline>,
}

#[derive(Default, Debug, Clone)]
pub struct GestureReconciler {
    state: GestureState,
}

impl GestureReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_panning(&self) -> bool {
        self.state.panning
    }

    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    pub fn classify(&mut self, event: &InputEvent, transform: &Transform) -> Option<Gesture> {
        match event {
            InputEvent::Wheel { delta_y, x, y } => {
                if *delta_y == 0.0 || !delta_y.is_finite() {
                    return None;
                }
                Some(Gesture::WheelZoom {
                    zoom_in: *delta_y < 0.0,
                    anchor: Point::new(*x, *y),
                })
            }
            InputEvent::PointerDown { x, y } => {
                self.state.dragged = false;
                self.state.pinch = None;
                self.begin_pan(Point::new(*x, *y), transform)
            }
            InputEvent::PointerMove { x, y } => self.continue_pan(Point::new(*x, *y)),
            InputEvent::PointerUp => self.end_pan(),
            InputEvent::TouchStart(points) => match points.as_slice() {
                [] => None,
                [p] => {
                    self.state.dragged = false;
                    self.state.pinch = None;
                    self.begin_pan(*p, transform)
                }
                [a, b, ..] => {
                    self.state.panning = false;
                    let distance = a.distance_to(*b);
                    if distance > 0.0 && distance.is_finite() {
                        self.state.pinch = Some(PinchBaseline {
                            distance,
                            scale: transform.scale,
                        });
                        Some(Gesture::PinchStart)
                    } else {
                        self.state.pinch = None;
                        None
                    }
                }
            },
            InputEvent::TouchMove(points) => match points.as_slice() {
                [] => None,
                [p] => self.continue_pan(*p),
                [a, b, ..] => {
                    let baseline = self.state.pinch?;
                    let scale = baseline.scale * (a.distance_to(*b) / baseline.distance);
                    if !scale.is_finite() {
                        return None;
                    }
                    if scale != transform.scale {
                        self.state.dragged = true;
                    }
                    Some(Gesture::PinchZoom {
                        scale,
                        anchor: a.midpoint(*b),
                    })
                }
            },
            InputEvent::TouchEnd(remaining) => match remaining.as_slice() {
                [] => {
                    self.state.pinch = None;
                    self.end_pan()
                }
                [p] => {
                    // Pinch released to one finger: pan from where that finger is now.
                    if self.state.pinch.take().is_some() {
                        let dragged = self.state.dragged;
                        let gesture = self.begin_pan(*p, transform);
                        self.state.dragged = dragged;
                        gesture
                    } else {
                        None
                    }
                }
                _ => None,
            },
            InputEvent::Click { x, y } => {
                if self.state.dragged {
                    self.state.dragged = false;
                    return None;
                }
                Some(Gesture::ToggleZoom {
                    anchor: Point::new(*x, *y),
                })
            }
            // A pan released over the backdrop delivers its click there.
            InputEvent::BackdropClick => {
                if self.state.dragged {
                    self.state.dragged = false;
                    return None;
                }
                Some(Gesture::Dismiss)
            }
            InputEvent::KeyDown(key) => (key == "Escape").then_some(Gesture::Dismiss),
            InputEvent::ZoomIn => Some(Gesture::StepIn),
            InputEvent::ZoomOut => Some(Gesture::StepOut),
            InputEvent::ZoomReset => Some(Gesture::Reset),
        }
    }

    fn begin_pan(&mut self, at: Point, transform: &Transform) -> Option<Gesture> {
        // Panning only makes sense once zoomed in.
        if !transform.is_zoomed() {
            self.state.panning = false;
            return None;
        }
        self.state.panning = true;
        self.state.press = at;
        self.state.drag_origin = Point::new(at.x - transform.translate_x, at.y - transform.translate_y);
        Some(Gesture::PanStart)
    }

    fn continue_pan(&mut self, at: Point) -> Option<Gesture> {
        if !self.state.panning {
            return None;
        }
        if at != self.state.press {
            self.state.dragged = true;
        }
        Some(Gesture::PanTo {
            x: at.x - self.state.drag_origin.x,
            y: at.y - self.state.drag_origin.y,
        })
    }

    fn end_pan(&mut self) -> Option<Gesture> {
        if std::mem::take(&mut self.state.panning) {
            Some(Gesture::PanEnd)
        } else {
            None
        }
    }
}
