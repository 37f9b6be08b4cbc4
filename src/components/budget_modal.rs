use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::add_category_form::AddCategoryForm;
use super::donut_chart::DonutChart;
use super::legend_panel::LegendPanel;
use super::toast::{commit, Notice, ToastContext};
use crate::model::Budget;
use crate::util::set_page_scroll_locked;

#[derive(Properties, PartialEq, Clone)]
pub struct BudgetModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub budget: UseStateHandle<Budget>,
}

#[function_component]
pub fn BudgetModal(props: &BudgetModalProps) -> Html {
    let toast = use_context::<ToastContext>();
    let dialog_ref = use_node_ref();
    let show_flag = use_mut_ref(|| props.show);
    let on_close_ref = use_mut_ref(|| props.on_close.clone());
    *show_flag.borrow_mut() = props.show;
    *on_close_ref.borrow_mut() = props.on_close.clone();

    // Scroll lock + move focus into the dialog when it opens
    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with(props.show, move |show| {
            set_page_scroll_locked(*show);
            if *show {
                let first = dialog_ref
                    .cast::<HtmlElement>()
                    .and_then(|d| d.query_selector("input, button").ok().flatten())
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if let Some(el) = first {
                    let _ = el.focus();
                }
            }
            || ()
        });
    }

    // Escape closes
    {
        let show_flag = show_flag.clone();
        let on_close_ref = on_close_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let keydown_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                if e.key() == "Escape" && *show_flag.borrow() {
                    let cb = on_close_ref.borrow().clone();
                    cb.emit(());
                }
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .ok();
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    if !props.show {
        return html! {};
    }

    let on_add = {
        let budget = props.budget.clone();
        let toast = toast.clone();
        Callback::from(move |(name, amount, color): (String, String, String)| {
            commit(&budget, toast.as_ref(), |b| {
                b.add(&name, &amount, &color)
                    .map(|added| Some(Notice::success(format!("{} added successfully!", added.name))))
            })
        })
    };
    let on_edit = {
        let budget = props.budget.clone();
        let toast = toast.clone();
        Callback::from(move |(index, name, amount): (usize, String, String)| {
            commit(&budget, toast.as_ref(), |b| {
                b.edit(index, &name, &amount).map(|_| None)
            })
        })
    };
    let on_delete = {
        let budget = props.budget.clone();
        let toast = toast.clone();
        Callback::from(move |index: usize| {
            commit(&budget, toast.as_ref(), |b| {
                b.remove(index)
                    .map(|c| Some(Notice::info(format!("{} removed", c.name))))
            });
        })
    };
    let on_color = {
        let budget = props.budget.clone();
        let toast = toast.clone();
        Callback::from(move |(index, color): (usize, String)| {
            commit(&budget, toast.as_ref(), |b| {
                b.set_color(index, &color).map(|_| None)
            });
        })
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let backdrop_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                cb.emit(());
            }
        })
    };

    let budget = (*props.budget).clone();
    html! {<div id="cardModal" class="modal-active" aria-hidden="false" onclick={backdrop_cb}
        style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div ref={dialog_ref} role="dialog" aria-modal="true" style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; max-height:90vh; overflow:auto; display:flex; flex-direction:column; gap:6px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Monthly budget"}</h3>
                <button class="close-btn" onclick={close_cb} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <DonutChart background={budget.donut_background()} total={budget.total()} />
            <LegendPanel budget={budget.clone()} on_edit={on_edit} on_delete={on_delete} on_color={on_color} />
            <AddCategoryForm on_add={on_add} />
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Click a name to edit it, a dot to recolor. Ctrl/Cmd+S saves an open edit or the new category."}</div>
        </div>
    </div>}
}
