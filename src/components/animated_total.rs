use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::util::{format_currency, Tween};

const COUNT_MS: f64 = 500.0;

#[derive(Properties, PartialEq, Clone)]
pub struct AnimatedTotalProps {
    pub value: f64,
}

/// Currency label that counts from its previous value to the new one.
#[function_component(AnimatedTotal)]
pub fn animated_total(props: &AnimatedTotalProps) -> Html {
    let label_ref = use_node_ref();
    let shown = use_mut_ref(|| props.value);

    {
        let label_ref = label_ref.clone();
        let shown = shown.clone();
        use_effect_with(props.value, move |target| {
            let window = web_sys::window().expect("no global `window` exists");
            let tween = Tween::new(*shown.borrow(), *target, COUNT_MS);
            // The label text is owned by this effect, not by the vdom.
            if let Some(el) = label_ref.cast::<HtmlElement>() {
                el.set_text_content(Some(&format_currency(tween.from)));
            }
            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let closure_cell_clone = closure_cell.clone();
                let window_loop = window.clone();
                let mut started: Option<f64> = None;
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                    let begun = *started.get_or_insert(now);
                    let (v, done) = tween.sample(now - begun);
                    *shown.borrow_mut() = v;
                    if let Some(el) = label_ref.cast::<HtmlElement>() {
                        el.set_text_content(Some(&format_currency(v)));
                    }
                    if done {
                        *raf_id_clone.borrow_mut() = None;
                        return;
                    }
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                })
                    as Box<dyn FnMut(f64)>));
            }
            if let Some(cb) = closure_cell.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
            move || {
                if let Some(id) = raf_id.borrow_mut().take() {
                    let _ = window.cancel_animation_frame(id);
                }
                // break the self-reference so the closure is freed
                closure_cell.borrow_mut().take();
            }
        });
    }

    html! {
        <span id="totalBudget" ref={label_ref} style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;"></span>
    }
}
