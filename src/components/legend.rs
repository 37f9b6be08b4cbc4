use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{Category, PALETTE};
use crate::util::{format_currency, is_save_shortcut};

/// `(index, name, amount)` as typed; returns whether the edit was accepted.
pub type EditCallback = Callback<(usize, String, String), bool>;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub index: usize,
    pub category: Category,
    pub share: f64,
    pub on_edit: EditCallback,
    pub on_delete: Callback<usize>,
    pub on_color: Callback<(usize, String)>,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let editing = use_state(|| false);
    let picking = use_state(|| false);
    let name_ref = use_node_ref();
    let amount_ref = use_node_ref();

    // Select the name when the editor opens
    {
        let name_ref = name_ref.clone();
        use_effect_with(*editing, move |editing| {
            if *editing {
                if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                    input.select();
                }
            }
            || ()
        });
    }

    let save = {
        let editing = editing.clone();
        let name_ref = name_ref.clone();
        let amount_ref = amount_ref.clone();
        let on_edit = props.on_edit.clone();
        let index = props.index;
        Callback::from(move |_: ()| {
            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            if on_edit.emit((index, value(&name_ref), value(&amount_ref))) {
                editing.set(false);
            }
        })
    };

    if *editing {
        let on_save_click = {
            let save = save.clone();
            Callback::from(move |_: MouseEvent| save.emit(()))
        };
        let on_cancel = {
            let editing = editing.clone();
            Callback::from(move |_: MouseEvent| editing.set(false))
        };
        let on_keydown = {
            let save = save.clone();
            let editing = editing.clone();
            Callback::from(move |e: KeyboardEvent| {
                let key = e.key();
                if is_save_shortcut(&key, e.ctrl_key(), e.meta_key()) {
                    e.prevent_default();
                    save.emit(());
                } else if key == "Enter" {
                    save.emit(());
                } else if key == "Escape" {
                    // Leave the modal open; only the editor closes.
                    e.stop_propagation();
                    editing.set(false);
                }
            })
        };
        return html! {
            <div class="legend-item-flex legend-editing" onkeydown={on_keydown} style="display:flex; align-items:center; gap:8px; margin:4px 0;">
                <span class="legend-color" style={format!("display:inline-block; width:12px; height:12px; border-radius:50%; background:{};", props.category.color)}></span>
                <input ref={name_ref} type="text" class="edit-name" value={props.category.name.clone()} placeholder="Category name" style="flex:1; min-width:0;" />
                <input ref={amount_ref} type="number" step="0.01" class="edit-amount" value={format!("{:.2}", props.category.amount)} placeholder="Amount" style="width:90px;" />
                <button class="save-edit" onclick={on_save_click} aria-label="Save">{"✓"}</button>
                <button class="cancel-edit" onclick={on_cancel} aria-label="Cancel">{"✕"}</button>
            </div>
        };
    }

    let start_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };
    let delete = {
        let cb = props.on_delete.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| cb.emit(index))
    };
    let toggle_picker = {
        let picking = picking.clone();
        Callback::from(move |_: MouseEvent| picking.set(!*picking))
    };
    let swatches = PALETTE.iter().map(|col| {
        let on_pick = {
            let cb = props.on_color.clone();
            let picking = picking.clone();
            let index = props.index;
            let col = col.to_string();
            Callback::from(move |_: MouseEvent| {
                cb.emit((index, col.clone()));
                picking.set(false);
            })
        };
        let selected = *col == props.category.color;
        html! {
            <button type="button" class={classes!("color-swatch", selected.then_some("selected"))} onclick={on_pick}
                style={format!("width:18px; height:18px; border-radius:50%; background:{}; border:2px solid {};", col, if selected { "#e6edf3" } else { "transparent" })}></button>
        }
    });

    html! {
        <div class="legend-item-flex" style="margin:4px 0;">
            <div style="display:flex; align-items:center; gap:8px;">
                <span class="legend-color" onclick={toggle_picker} title="Change color"
                    style={format!("display:inline-block; width:12px; height:12px; border-radius:50%; cursor:pointer; background:{};", props.category.color)}></span>
                <span class="legend-name" onclick={start_edit.clone()} style="flex:1; cursor:pointer;">{ props.category.name.clone() }</span>
                <span style="font-size:11px; opacity:0.7;">{ format!("{:.0}%", props.share) }</span>
                <span class="legend-amount" style="min-width:80px; text-align:right; font-variant-numeric:tabular-nums;">{ format_currency(props.category.amount) }</span>
                <button class="edit-btn" onclick={start_edit} aria-label="Edit">{"✎"}</button>
                <button class="del-btn" onclick={delete} aria-label="Delete">{"🗑"}</button>
            </div>
            { if *picking { html!{ <div class="color-picker-popup" style="display:flex; gap:6px; padding:6px 0 0 20px;">{ for swatches }</div> } } else { html!{} } }
        </div>
    }
}
