use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, TouchEvent, TouchList};
use yew::prelude::*;

use super::zoom_controls::ZoomControls;
use crate::config::ViewerConfig;
use crate::state::viewport::Response;
use crate::state::{GeometryProbe, InputEvent, Point, ZoomViewport};
use crate::util::set_page_scroll_locked;

type Dispatch = Rc<dyn Fn(InputEvent) -> Response>;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub config: ViewerConfig,
}

fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let frame_ref = use_node_ref();
    let image_ref = use_node_ref();
    let viewport = {
        let config = props.config.clone();
        use_mut_ref(move || ZoomViewport::new(config))
    };
    let rerender = use_force_update();
    let dispatch_ref = use_mut_ref(|| None::<Dispatch>);

    // Every input goes through here: handle, then close / re-render as told.
    let dispatch: Dispatch = {
        let viewport = viewport.clone();
        let frame_ref = frame_ref.clone();
        let rerender = rerender.clone();
        let on_close = props.on_close.clone();
        Rc::new(move |event: InputEvent| {
            let rect = frame_ref
                .cast::<Element>()
                .map(|el| el.content_rect())
                .unwrap_or_default();
            let mut vp = viewport.borrow_mut();
            let was_open = vp.is_open();
            let response = vp.handle(event, &rect);
            let closed = was_open && !vp.is_open();
            drop(vp);
            if closed {
                set_page_scroll_locked(false);
                on_close.emit(());
            }
            if response.changed {
                rerender.force_update();
            }
            response
        })
    };
    *dispatch_ref.borrow_mut() = Some(dispatch.clone());

    // Sync open/closed from the parent
    {
        let viewport = viewport.clone();
        let rerender = rerender.clone();
        use_effect_with(props.open, move |open| {
            let mut vp = viewport.borrow_mut();
            let changed = if *open { vp.open() } else { vp.close() };
            let locked = vp.scroll_locked();
            drop(vp);
            if changed {
                set_page_scroll_locked(locked);
                rerender.force_update();
            }
            || ()
        });
    }

    {
        let frame_ref = frame_ref.clone();
        let image_ref = image_ref.clone();
        let dispatch_ref = dispatch_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let frame: HtmlElement = frame_ref
                .cast::<HtmlElement>()
                .expect("frame_ref not attached to an element");
            let image: HtmlElement = image_ref
                .cast::<HtmlElement>()
                .expect("image_ref not attached to an element");

            let send: Dispatch = Rc::new(move |event: InputEvent| {
                let current = dispatch_ref.borrow().clone();
                current.map(|f| f(event)).unwrap_or_default()
            });

            // Wheel zoom toward the cursor
            let wheel_cb = {
                let send = send.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    let r = send(InputEvent::Wheel {
                        delta_y: e.delta_y(),
                        x: e.client_x() as f64,
                        y: e.client_y() as f64,
                    });
                    if r.consumed {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            frame
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .ok();
            // Mouse events; move/up on window so a drag may leave the image
            let mousedown_cb = {
                let send = send.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let r = send(InputEvent::PointerDown {
                        x: e.client_x() as f64,
                        y: e.client_y() as f64,
                    });
                    if r.consumed {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            image
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let mousemove_cb = {
                let send = send.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let r = send(InputEvent::PointerMove {
                        x: e.client_x() as f64,
                        y: e.client_y() as f64,
                    });
                    if r.consumed {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let mouseup_cb = {
                let send = send.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    send(InputEvent::PointerUp);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .ok();
            let keydown_cb = {
                let send = send.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    let r = send(InputEvent::KeyDown(e.key()));
                    if r.consumed {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .ok();
            // Touch. Only touchmove suppresses the default so a tap still
            // produces the click that toggles zoom.
            let touch_start_cb = {
                let send = send.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    send(InputEvent::TouchStart(touch_points(&e.touches())));
                }) as Box<dyn FnMut(_)>)
            };
            image
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_move_cb = {
                let send = send.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let r = send(InputEvent::TouchMove(touch_points(&e.touches())));
                    if r.consumed {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            image
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_end_cb = {
                let send = send.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    send(InputEvent::TouchEnd(touch_points(&e.touches())));
                }) as Box<dyn FnMut(_)>)
            };
            image
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            image
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Cleanup
            move || {
                let _ = frame
                    .remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                let _ = image.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _ = image.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = image.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = image.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = image.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (
                    &wheel_cb,
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &keydown_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                );
            }
        });
    }

    let on_image_click = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatch(InputEvent::Click {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };
    let on_backdrop_click = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                dispatch(InputEvent::BackdropClick);
            }
        })
    };
    let on_close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let control = |event: InputEvent| {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch(event.clone());
        })
    };

    let vp = viewport.borrow();
    let transform = vp.transform();
    let zoomed = vp.is_zoomed();
    let cursor = vp.cursor().as_css();
    let config = vp.config().clone();
    drop(vp);

    html! {<div id="imagePopup" class={classes!("image-popup", props.open.then_some("active"))} onclick={on_backdrop_click}
        style={format!("position:fixed; inset:0; background:rgba(0,0,0,0.85); z-index:40; align-items:center; justify-content:center; display:{};", if props.open { "flex" } else { "none" })}>
        <button id="closePopup" onclick={on_close_click} aria-label="Close" style="position:absolute; top:12px; right:16px; font-size:22px; padding:2px 10px;">{"×"}</button>
        <div id="imageContainer" ref={frame_ref} class={classes!("image-container", zoomed.then_some("zoomed"))}
            style={format!("position:relative; overflow:hidden; max-width:90vw; max-height:80vh; touch-action:none; cursor:{};", cursor)}>
            <img id="popupImage" ref={image_ref} src={config.image_src} alt={config.image_alt} draggable="false" onclick={on_image_click}
                class={classes!("popup-image", zoomed.then_some("zoomed"))}
                style={format!("display:block; max-width:90vw; max-height:80vh; user-select:none; transform-origin:0 0; transform:{};", transform.to_css())} />
        </div>
        <ZoomControls
            scale={transform.scale}
            on_zoom_in={control(InputEvent::ZoomIn)}
            on_zoom_out={control(InputEvent::ZoomOut)}
            on_reset={control(InputEvent::ZoomReset)}
        />
    </div>}
}
