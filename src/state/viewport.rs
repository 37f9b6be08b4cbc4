//! Zoom/pan controller for one lightbox instance.
//!
//! `ZoomViewport` owns the image transform, the in-flight gesture state and the
//! open flag. Hosts feed it [`InputEvent`]s together with a [`GeometryProbe`]
//! and read back the transform, the zoomed flag and the cursor hint.

use super::geometry::GeometryProbe;
use super::gesture::{Gesture, GestureReconciler, InputEvent};
use super::transform::{Point, Transform};
use crate::config::ViewerConfig;

/// Pointer affordance for the image container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// The event was used; the host should suppress the browser default.
    pub consumed: bool,
    /// Visible state changed; the host should re-render.
    pub changed: bool,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed(changed: bool) -> Self {
        Self {
            consumed: true,
            changed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ZoomViewport {
    config: ViewerConfig,
    transform: Transform,
    gestures: GestureReconciler,
    open: bool,
}

impl Default for ZoomViewport {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ZoomViewport {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            transform: Transform::canonical(),
            gestures: GestureReconciler::new(),
            open: false,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_zoomed(&self) -> bool {
        self.transform.is_zoomed()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scroll stays locked for as long as the viewer is visible.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> Cursor {
        match (self.is_zoomed(), self.gestures.is_panning()) {
            (true, true) => Cursor::Grabbing,
            (true, false) => Cursor::Grab,
            (false, _) => Cursor::Default,
        }
    }

    pub fn open(&mut self) -> bool {
        let changed = !self.open || !self.transform.is_canonical();
        self.open = true;
        self.reset_zoom();
        if changed {
            log::debug!("lightbox opened");
        }
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open || !self.transform.is_canonical();
        self.open = false;
        self.reset_zoom();
        if changed {
            log::debug!("lightbox closed");
        }
        changed
    }

    /// Canonical transform, no gesture in flight.
    pub fn reset_zoom(&mut self) {
        self.transform.reset();
        self.gestures.reset();
    }

    pub fn handle(&mut self, event: InputEvent, probe: &impl GeometryProbe) -> Response {
        if !self.open {
            return Response::ignored();
        }
        let before = (self.transform, self.cursor());
        let Some(gesture) = self.gestures.classify(&event, &self.transform) else {
            // A click swallowed by drag suppression is still ours.
            return match event {
                InputEvent::Click { .. } | InputEvent::BackdropClick => Response::consumed(false),
                _ => Response::ignored(),
            };
        };
        if gesture == Gesture::Dismiss {
            return Response::consumed(self.close());
        }
        self.apply(gesture, probe);
        Response::consumed((self.transform, self.cursor()) != before)
    }

    fn apply(&mut self, gesture: Gesture, probe: &impl GeometryProbe) {
        let max = self.config.max_zoom;
        match gesture {
            Gesture::WheelZoom { zoom_in, anchor } => {
                let factor = 1.0 + self.config.wheel_intensity;
                let proposed = if zoom_in {
                    self.transform.scale * factor
                } else {
                    self.transform.scale / factor
                };
                self.zoom_at(probe.to_local(anchor), proposed);
            }
            Gesture::PanTo { x, y } => {
                if self.transform.is_zoomed() {
                    self.transform.translate_x = x;
                    self.transform.translate_y = y;
                }
            }
            Gesture::PinchZoom { scale, anchor } => {
                self.zoom_at(probe.to_local(anchor), scale);
            }
            Gesture::ToggleZoom { anchor } => {
                if self.transform.is_zoomed() {
                    self.reset_zoom();
                } else {
                    self.zoom_at(probe.to_local(anchor), self.config.toggle_zoom);
                }
            }
            Gesture::StepIn => {
                self.transform
                    .apply_or_reset(self.transform.scale + self.config.zoom_step, max);
            }
            Gesture::StepOut => {
                self.transform
                    .apply_or_reset(self.transform.scale - self.config.zoom_step, max);
            }
            Gesture::Reset => self.reset_zoom(),
            Gesture::PanStart | Gesture::PanEnd | Gesture::PinchStart | Gesture::Dismiss => {}
        }
    }

    fn zoom_at(&mut self, local: Point, scale: f64) {
        self.transform.zoom_about(local, scale, self.config.max_zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::geometry::ContentRect;
    use crate::state::transform::{MAX_ZOOM, MIN_ZOOM};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn frame() -> ContentRect {
        ContentRect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn opened() -> ZoomViewport {
        let mut vp = ZoomViewport::default();
        vp.open();
        vp
    }

    fn wheel(vp: &mut ZoomViewport, delta_y: f64, x: f64, y: f64) -> Response {
        vp.handle(InputEvent::Wheel { delta_y, x, y }, &frame())
    }

    #[test]
    fn starts_closed_and_canonical() {
        let vp = ZoomViewport::default();
        assert!(!vp.is_open());
        assert!(vp.transform().is_canonical());
        assert_eq!(vp.cursor(), Cursor::Default);
    }

    #[test]
    fn events_are_ignored_while_closed() {
        let mut vp = ZoomViewport::default();
        let r = wheel(&mut vp, -1.0, 10.0, 10.0);
        assert_eq!(r, Response::default());
        assert!(vp.transform().is_canonical());
    }

    #[test]
    fn wheel_zoom_preserves_anchor() {
        let mut vp = opened();
        let anchor = Point::new(100.0, 50.0);
        let content = vp.transform().content_at(anchor);
        let r = wheel(&mut vp, -1.0, anchor.x, anchor.y);
        assert!(r.consumed && r.changed);
        let t = vp.transform();
        assert!(approx_eq(t.scale, 1.05));
        let screen = t.screen_of(content);
        assert!(approx_eq(screen.x, 100.0));
        assert!(approx_eq(screen.y, 50.0));
    }

    #[test]
    fn wheel_anchor_uses_content_local_coordinates() {
        let mut vp = opened();
        let probe = ContentRect::new(40.0, 20.0, 800.0, 600.0);
        vp.handle(InputEvent::Wheel { delta_y: -1.0, x: 140.0, y: 70.0 }, &probe);
        let t = vp.transform();
        let local = Point::new(100.0, 50.0);
        let screen = t.screen_of(local);
        assert!(approx_eq(screen.x, local.x));
        assert!(approx_eq(screen.y, local.y));
    }

    #[test]
    fn wheel_out_at_minimum_stays_canonical() {
        let mut vp = opened();
        wheel(&mut vp, 1.0, 300.0, 200.0);
        assert!(vp.transform().is_canonical());
    }

    #[test]
    fn scale_stays_within_bounds_for_any_sequence() {
        let mut vp = opened();
        let events = [
            InputEvent::Wheel { delta_y: -1.0, x: 10.0, y: 10.0 },
            InputEvent::ZoomIn,
            InputEvent::ZoomIn,
            InputEvent::Click { x: 50.0, y: 50.0 },
            InputEvent::Click { x: 50.0, y: 50.0 },
            InputEvent::ZoomOut,
            InputEvent::Wheel { delta_y: 1.0, x: 10.0, y: 10.0 },
        ];
        for round in 0..40 {
            for event in events.iter().cycle().skip(round % events.len()).take(events.len()) {
                vp.handle(event.clone(), &frame());
                let t = vp.transform();
                assert!(t.scale >= MIN_ZOOM && t.scale <= MAX_ZOOM);
                if t.scale == MIN_ZOOM {
                    assert!(t.is_canonical());
                }
            }
        }
        for _ in 0..60 {
            wheel(&mut vp, -1.0, 400.0, 300.0);
        }
        assert_eq!(vp.transform().scale, MAX_ZOOM);
    }

    #[test]
    fn zooming_out_fully_resets_translate() {
        let mut vp = opened();
        for _ in 0..5 {
            wheel(&mut vp, -1.0, 700.0, 20.0);
        }
        assert!(vp.transform().translate_x != 0.0);
        for _ in 0..10 {
            wheel(&mut vp, 1.0, 10.0, 500.0);
        }
        assert_eq!(vp.transform(), Transform::canonical());
    }

    #[test]
    fn zoom_out_button_snaps_home() {
        let mut vp = opened();
        vp.handle(InputEvent::ZoomIn, &frame());
        vp.handle(InputEvent::ZoomIn, &frame());
        vp.handle(InputEvent::PointerDown { x: 0.0, y: 0.0 }, &frame());
        vp.handle(InputEvent::PointerMove { x: 35.0, y: -12.0 }, &frame());
        vp.handle(InputEvent::PointerUp, &frame());
        vp.handle(InputEvent::ZoomOut, &frame());
        assert!(vp.is_zoomed());
        vp.handle(InputEvent::ZoomOut, &frame());
        assert_eq!(vp.transform(), Transform::canonical());
    }

    #[test]
    fn zoom_in_button_keeps_translate_and_clamps() {
        let mut vp = opened();
        for _ in 0..40 {
            vp.handle(InputEvent::ZoomIn, &frame());
        }
        let t = vp.transform();
        assert_eq!(t.scale, MAX_ZOOM);
        assert_eq!((t.translate_x, t.translate_y), (0.0, 0.0));
    }

    #[test]
    fn click_toggles_when_not_dragged() {
        let mut vp = opened();
        let r = vp.handle(InputEvent::Click { x: 200.0, y: 120.0 }, &frame());
        assert!(r.changed);
        let t = vp.transform();
        assert_eq!(t.scale, 1.5);
        assert!(approx_eq(t.translate_x, 200.0 - 200.0 * 1.5));
        assert!(approx_eq(t.translate_y, 120.0 - 120.0 * 1.5));
        vp.handle(InputEvent::Click { x: 10.0, y: 10.0 }, &frame());
        assert_eq!(vp.transform(), Transform::canonical());
    }

    #[test]
    fn drag_suppresses_click() {
        let mut vp = opened();
        vp.handle(InputEvent::Click { x: 100.0, y: 100.0 }, &frame());
        assert!(vp.is_zoomed());
        let r = vp.handle(InputEvent::PointerDown { x: 10.0, y: 10.0 }, &frame());
        assert!(r.consumed);
        assert_eq!(vp.cursor(), Cursor::Grabbing);
        let before = vp.transform();
        vp.handle(InputEvent::PointerMove { x: 40.0, y: 40.0 }, &frame());
        let moved = vp.transform();
        assert_eq!(moved.translate_x, before.translate_x + 30.0);
        assert_eq!(moved.translate_y, before.translate_y + 30.0);
        vp.handle(InputEvent::PointerUp, &frame());
        assert_eq!(vp.cursor(), Cursor::Grab);
        let r = vp.handle(InputEvent::Click { x: 40.0, y: 40.0 }, &frame());
        assert!(r.consumed && !r.changed);
        assert_eq!(vp.transform(), moved);
    }

    #[test]
    fn drag_released_over_backdrop_keeps_viewer_open() {
        let mut vp = opened();
        vp.handle(InputEvent::Click { x: 100.0, y: 100.0 }, &frame());
        vp.handle(InputEvent::PointerDown { x: 10.0, y: 10.0 }, &frame());
        vp.handle(InputEvent::PointerMove { x: 900.0, y: 40.0 }, &frame());
        vp.handle(InputEvent::PointerUp, &frame());
        let panned = vp.transform();
        let r = vp.handle(InputEvent::BackdropClick, &frame());
        assert!(r.consumed && !r.changed);
        assert!(vp.is_open());
        assert_eq!(vp.transform(), panned);
        // the next backdrop click is a real one
        vp.handle(InputEvent::BackdropClick, &frame());
        assert!(!vp.is_open());
    }

    #[test]
    fn no_panning_at_minimum_zoom() {
        let mut vp = opened();
        let r = vp.handle(InputEvent::PointerDown { x: 10.0, y: 10.0 }, &frame());
        assert!(!r.consumed);
        vp.handle(InputEvent::PointerMove { x: 90.0, y: 90.0 }, &frame());
        assert!(vp.transform().is_canonical());
    }

    #[test]
    fn single_touch_pans_like_pointer() {
        let mut vp = opened();
        vp.handle(InputEvent::ZoomIn, &frame());
        vp.handle(InputEvent::TouchStart(vec![Point::new(50.0, 50.0)]), &frame());
        vp.handle(InputEvent::TouchMove(vec![Point::new(20.0, 70.0)]), &frame());
        let t = vp.transform();
        assert_eq!((t.translate_x, t.translate_y), (-30.0, 20.0));
        vp.handle(InputEvent::TouchEnd(vec![]), &frame());
        assert_eq!(vp.cursor(), Cursor::Grab);
    }

    #[test]
    fn pinch_recenters_on_midpoint() {
        let mut vp = opened();
        vp.handle(
            InputEvent::TouchStart(vec![Point::new(100.0, 200.0), Point::new(200.0, 200.0)]),
            &frame(),
        );
        let mid = Point::new(150.0, 200.0);
        let content = vp.transform().content_at(mid);
        vp.handle(
            InputEvent::TouchMove(vec![Point::new(75.0, 200.0), Point::new(225.0, 200.0)]),
            &frame(),
        );
        let t = vp.transform();
        assert!(approx_eq(t.scale, 1.5));
        let screen = t.screen_of(content);
        assert!(approx_eq(screen.x, mid.x));
        assert!(approx_eq(screen.y, mid.y));
    }

    #[test]
    fn pinch_in_past_minimum_resets() {
        let mut vp = opened();
        vp.handle(InputEvent::Click { x: 300.0, y: 300.0 }, &frame());
        vp.handle(
            InputEvent::TouchStart(vec![Point::new(0.0, 0.0), Point::new(200.0, 0.0)]),
            &frame(),
        );
        vp.handle(
            InputEvent::TouchMove(vec![Point::new(90.0, 0.0), Point::new(110.0, 0.0)]),
            &frame(),
        );
        assert_eq!(vp.transform(), Transform::canonical());
    }

    #[test]
    fn pinch_does_not_leave_a_toggle_click_behind() {
        let mut vp = opened();
        vp.handle(
            InputEvent::TouchStart(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]),
            &frame(),
        );
        vp.handle(
            InputEvent::TouchMove(vec![Point::new(0.0, 0.0), Point::new(200.0, 0.0)]),
            &frame(),
        );
        vp.handle(InputEvent::TouchEnd(vec![]), &frame());
        let zoomed = vp.transform();
        vp.handle(InputEvent::Click { x: 50.0, y: 0.0 }, &frame());
        assert_eq!(vp.transform(), zoomed);
    }

    #[test]
    fn escape_and_backdrop_close() {
        let mut vp = opened();
        vp.handle(InputEvent::ZoomIn, &frame());
        let r = vp.handle(InputEvent::KeyDown("Escape".into()), &frame());
        assert!(r.consumed && r.changed);
        assert!(!vp.is_open());
        assert!(!vp.scroll_locked());
        assert!(vp.transform().is_canonical());

        vp.open();
        vp.handle(InputEvent::BackdropClick, &frame());
        assert!(!vp.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut vp = opened();
        vp.handle(InputEvent::Click { x: 10.0, y: 10.0 }, &frame());
        assert!(vp.close());
        let once = (vp.is_open(), vp.scroll_locked(), vp.transform());
        assert!(!vp.close());
        assert_eq!((vp.is_open(), vp.scroll_locked(), vp.transform()), once);
        assert_eq!(once, (false, false, Transform::canonical()));

        let mut never_opened = ZoomViewport::default();
        assert!(!never_opened.close());
        assert_eq!(never_opened.transform(), Transform::canonical());
    }

    #[test]
    fn open_resets_previous_state() {
        let mut vp = opened();
        vp.handle(InputEvent::ZoomIn, &frame());
        vp.open();
        assert!(vp.is_open());
        assert!(vp.scroll_locked());
        assert!(vp.transform().is_canonical());
    }

    #[test]
    fn wheel_scenario_then_reset_button() {
        let mut vp = opened();
        let mut last = vp.transform().scale;
        for _ in 0..3 {
            wheel(&mut vp, -1.0, 150.0, 100.0);
            let s = vp.transform().scale;
            assert!(s > last);
            assert!(s <= MAX_ZOOM);
            last = s;
        }
        assert!(vp.is_zoomed());
        assert_eq!(vp.cursor(), Cursor::Grab);
        vp.handle(InputEvent::ZoomReset, &frame());
        assert_eq!(vp.transform(), Transform::canonical());
        assert!(!vp.is_zoomed());
        assert_eq!(vp.cursor(), Cursor::Default);
    }

    #[test]
    fn wheel_caps_at_configured_maximum() {
        let config = ViewerConfig {
            max_zoom: 1.1,
            ..ViewerConfig::default()
        };
        let mut vp = ZoomViewport::new(config);
        vp.open();
        for _ in 0..3 {
            wheel(&mut vp, -1.0, 150.0, 100.0);
        }
        assert_eq!(vp.transform().scale, 1.1);
    }
}
